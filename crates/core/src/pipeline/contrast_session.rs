use std::path::Path;

use thiserror::Error;

use crate::analysis::domain::color_sampler::RegionColorSampler;
use crate::analysis::domain::contrast::ContrastEvaluator;
use crate::analysis::domain::dedup::DeduplicationTracker;
use crate::analysis::domain::frame_sampler::{FrameSampler, SamplingError, SamplingPlan};
use crate::detection::domain::text_localizer::TextLocalizer;
use crate::pipeline::analysis_logger::AnalysisLogger;
use crate::shared::constants::{
    DEFAULT_BACKGROUND_MARGIN, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_CONTRAST_THRESHOLD,
    DEFAULT_SCALE_WIDTH,
};
use crate::shared::contrast_event::ContrastEvent;
use crate::shared::frame::Frame;
use crate::video::domain::video_reader::VideoReader;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Source metadata or target rate failed validation; nothing was scored.
    #[error("invalid media metadata: {0}")]
    InvalidMetadata(#[from] SamplingError),
    #[error("failed to read media source: {0}")]
    Source(Box<dyn std::error::Error>),
    #[error("media source contains no frames")]
    EmptySource,
}

/// Tunable analysis policy. Defaults are the values the pipeline was
/// tuned with; they are deliberate knobs, not derived quantities.
#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    /// Candidates below this localizer confidence are discarded.
    pub confidence_threshold: f64,
    /// Luminance difference below which a region is a contrast error.
    pub contrast_threshold: f64,
    /// Background expansion around a text box, in pixels per side.
    pub background_margin: i32,
    /// Downscale width applied before detection and color sampling;
    /// `None` analyzes frames at native resolution.
    pub scale_width: Option<u32>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            contrast_threshold: DEFAULT_CONTRAST_THRESHOLD,
            background_margin: DEFAULT_BACKGROUND_MARGIN,
            scale_width: Some(DEFAULT_SCALE_WIDTH),
        }
    }
}

/// The sole required output of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionResult {
    pub contrast_error_count: usize,
}

/// Orchestrates one contrast analysis run over a video or single image.
///
/// Owns every collaborator plus a deduplication tracker constructed
/// fresh inside each analyze call. The analyze methods consume the
/// session, so dedup state cannot leak into a later run; build a new
/// session per source.
pub struct ContrastAnalysisSession {
    reader: Box<dyn VideoReader>,
    localizer: Box<dyn TextLocalizer>,
    logger: Box<dyn AnalysisLogger>,
    config: AnalysisConfig,
}

impl ContrastAnalysisSession {
    pub fn new(
        reader: Box<dyn VideoReader>,
        localizer: Box<dyn TextLocalizer>,
        logger: Box<dyn AnalysisLogger>,
        config: AnalysisConfig,
    ) -> Self {
        Self {
            reader,
            localizer,
            logger,
            config,
        }
    }

    /// Samples the video at `target_rate` and scores every admitted text
    /// candidate. Only metadata validation is fatal; per-frame failures
    /// degrade to "no contribution from this frame".
    pub fn analyze_video(
        self,
        path: &Path,
        target_rate: f64,
    ) -> Result<SessionResult, AnalysisError> {
        let Self {
            mut reader,
            mut localizer,
            mut logger,
            config,
        } = self;

        let metadata = reader.open(path).map_err(AnalysisError::Source)?;
        let plan = SamplingPlan::for_video(metadata.fps, metadata.total_frames, target_rate)?;
        logger.info(&format!(
            "Sampling every {} of {} frames (up to {} samples)",
            plan.skip, metadata.total_frames, plan.max_samples
        ));

        let scorer = CandidateScorer::new(&config);
        let mut dedup = DeduplicationTracker::new();
        let mut count = 0;
        let mut sampled = 0;

        for s in FrameSampler::new(reader.frames(), plan) {
            sampled += 1;
            logger.progress(sampled, plan.max_samples);
            count += scorer.score_frame(
                &s.frame,
                s.raw_index,
                localizer.as_mut(),
                &mut dedup,
                logger.as_mut(),
            );
        }

        reader.close();
        logger.summary();
        Ok(SessionResult {
            contrast_error_count: count,
        })
    }

    /// Degenerate single-frame variant: no sampling plan, same gating
    /// and scoring rules, dedup state starting empty.
    pub fn analyze_image(self, path: &Path) -> Result<SessionResult, AnalysisError> {
        let Self {
            mut reader,
            mut localizer,
            mut logger,
            config,
        } = self;

        reader.open(path).map_err(AnalysisError::Source)?;
        let frame = reader
            .frames()
            .next()
            .ok_or(AnalysisError::EmptySource)?
            .map_err(AnalysisError::Source)?;
        reader.close();

        let scorer = CandidateScorer::new(&config);
        let mut dedup = DeduplicationTracker::new();
        let count = scorer.score_frame(&frame, 1, localizer.as_mut(), &mut dedup, logger.as_mut());

        logger.summary();
        Ok(SessionResult {
            contrast_error_count: count,
        })
    }
}

/// Per-frame detection and scoring, shared by the video and image paths.
struct CandidateScorer<'a> {
    config: &'a AnalysisConfig,
    color_sampler: RegionColorSampler,
    evaluator: ContrastEvaluator,
}

impl<'a> CandidateScorer<'a> {
    fn new(config: &'a AnalysisConfig) -> Self {
        Self {
            config,
            color_sampler: RegionColorSampler::new(config.background_margin),
            evaluator: ContrastEvaluator::new(config.contrast_threshold),
        }
    }

    /// Returns the number of contrast errors contributed by one frame.
    /// A localizer failure is contained here: logged, zero contribution.
    fn score_frame(
        &self,
        frame: &Frame,
        raw_index: usize,
        localizer: &mut dyn TextLocalizer,
        dedup: &mut DeduplicationTracker,
        logger: &mut dyn AnalysisLogger,
    ) -> usize {
        let scaled;
        let frame = match self.config.scale_width {
            Some(width) if width < frame.width() => {
                scaled = frame.scaled_to_width(width);
                &scaled
            }
            _ => frame,
        };

        let candidates = match localizer.detect(frame) {
            Ok(candidates) => candidates,
            Err(e) => {
                log::warn!("text localization failed on frame {raw_index}: {e}; skipping frame");
                return 0;
            }
        };

        let mut errors = 0;
        for candidate in candidates {
            if candidate.confidence < self.config.confidence_threshold {
                continue;
            }
            if !candidate.region.has_area() {
                continue;
            }
            if !dedup.admit(&candidate.text, &candidate.region) {
                continue;
            }

            let text_color = self.color_sampler.text_color(frame, &candidate.region);
            let background = self.color_sampler.background_color(frame, &candidate.region);
            let score = self.evaluator.evaluate(&text_color, &background);

            if score.is_error {
                errors += 1;
                logger.contrast_error(&ContrastEvent {
                    frame_index: raw_index,
                    text: candidate.text,
                    region: candidate.region,
                    contrast: score.value,
                });
            }
        }
        errors
    }
}
