use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::detection::domain::text_localizer::TextLocalizer;
use crate::shared::frame::Frame;
use crate::shared::text_box::{TextBox, TextCandidate};

/// One detection row in a sidecar file.
#[derive(Debug, Deserialize)]
struct DetectionRecord {
    frame: usize,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    text: String,
    confidence: f64,
}

/// Replays text detections recorded by an external OCR pass.
///
/// The sidecar is a JSON array of rows
/// `{frame, x, y, width, height, text, confidence}` where `frame` is the
/// decode index of the frame the OCR ran on. Coordinates must refer to
/// the same frame scaling the session applies before detection.
pub struct JsonFileLocalizer {
    by_frame: HashMap<usize, Vec<TextCandidate>>,
}

impl JsonFileLocalizer {
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let file = File::open(path)?;
        let records: Vec<DetectionRecord> = serde_json::from_reader(BufReader::new(file))?;
        Ok(Self::from_records(records))
    }

    pub fn from_json_str(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let records: Vec<DetectionRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    fn from_records(records: Vec<DetectionRecord>) -> Self {
        let mut by_frame: HashMap<usize, Vec<TextCandidate>> = HashMap::new();
        for record in records {
            by_frame.entry(record.frame).or_default().push(TextCandidate {
                region: TextBox::new(record.x, record.y, record.width, record.height),
                text: record.text,
                confidence: record.confidence,
            });
        }
        Self { by_frame }
    }
}

impl TextLocalizer for JsonFileLocalizer {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<TextCandidate>, Box<dyn std::error::Error>> {
        Ok(self
            .by_frame
            .get(&frame.index())
            .cloned()
            .unwrap_or_default())
    }
}
