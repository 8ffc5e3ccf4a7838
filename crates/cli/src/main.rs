use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use textguard_core::detection::domain::text_localizer::TextLocalizer;
use textguard_core::detection::infrastructure::json_localizer::JsonFileLocalizer;
use textguard_core::pipeline::analysis_logger::{AnalysisLogger, StdoutAnalysisLogger};
use textguard_core::pipeline::contrast_session::{
    AnalysisConfig, ContrastAnalysisSession, SessionResult,
};
use textguard_core::shared::constants::{
    DEFAULT_BACKGROUND_MARGIN, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_CONTRAST_THRESHOLD,
    DEFAULT_SCALE_WIDTH, DEFAULT_TARGET_FRAME_RATE, IMAGE_EXTENSIONS,
};
use textguard_core::video::domain::video_reader::VideoReader;
use textguard_core::video::infrastructure::ffmpeg_reader::FfmpegReader;
use textguard_core::video::infrastructure::image_file_reader::ImageFileReader;

/// Low-contrast text detection for videos and images.
#[derive(Parser)]
#[command(name = "textguard")]
struct Cli {
    /// Input video or image file.
    input: PathBuf,

    /// JSON sidecar with text detections from an external OCR pass.
    #[arg(long)]
    detections: PathBuf,

    /// Target analysis rate in frames per second (videos only).
    #[arg(long, default_value_t = DEFAULT_TARGET_FRAME_RATE)]
    rate: f64,

    /// Minimum localizer confidence for a candidate to be scored (0.0-1.0).
    #[arg(long, default_value_t = DEFAULT_CONFIDENCE_THRESHOLD)]
    confidence: f64,

    /// Luminance difference below which text is flagged (0-255).
    #[arg(long, default_value_t = DEFAULT_CONTRAST_THRESHOLD)]
    threshold: f64,

    /// Background sampling margin around each text box, in pixels.
    #[arg(long, default_value_t = DEFAULT_BACKGROUND_MARGIN)]
    margin: i32,

    /// Downscale frames to this width before analysis.
    #[arg(long, default_value_t = DEFAULT_SCALE_WIDTH)]
    scale_width: u32,

    /// Analyze frames at native resolution (disables --scale-width).
    #[arg(long)]
    no_scale: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let reader = open_reader(&cli.input);
    let localizer: Box<dyn TextLocalizer> = Box::new(JsonFileLocalizer::from_file(&cli.detections)?);
    let logger: Box<dyn AnalysisLogger> = Box::new(StdoutAnalysisLogger::default());

    let config = AnalysisConfig {
        confidence_threshold: cli.confidence,
        contrast_threshold: cli.threshold,
        background_margin: cli.margin,
        scale_width: if cli.no_scale {
            None
        } else {
            Some(cli.scale_width)
        },
    };

    let session = ContrastAnalysisSession::new(reader, localizer, logger, config);
    let SessionResult {
        contrast_error_count,
    } = if is_image(&cli.input) {
        session.analyze_image(&cli.input)?
    } else {
        session.analyze_video(&cli.input, cli.rate)?
    };

    println!("Contrast errors detected: {contrast_error_count}");
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if !cli.detections.exists() {
        return Err(format!("Detections file not found: {}", cli.detections.display()).into());
    }
    if !(0.0..=1.0).contains(&cli.confidence) {
        return Err(format!(
            "Confidence must be between 0.0 and 1.0, got {}",
            cli.confidence
        )
        .into());
    }
    if cli.rate <= 0.0 {
        return Err(format!("Rate must be positive, got {}", cli.rate).into());
    }
    if cli.threshold < 0.0 {
        return Err(format!("Threshold must be non-negative, got {}", cli.threshold).into());
    }
    if cli.margin < 0 {
        return Err(format!("Margin must be non-negative, got {}", cli.margin).into());
    }
    if cli.scale_width == 0 {
        return Err("Scale width must be positive (or use --no-scale)".into());
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn open_reader(input: &Path) -> Box<dyn VideoReader> {
    if is_image(input) {
        Box::new(ImageFileReader::new())
    } else {
        Box::new(FfmpegReader::new())
    }
}
