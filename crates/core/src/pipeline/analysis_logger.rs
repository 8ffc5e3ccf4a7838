use crate::shared::contrast_event::ContrastEvent;

/// Cross-cutting observer for session diagnostics.
///
/// Decouples the session from output mechanisms (stdout, a job worker's
/// result channel, test capture) so hosts can watch error events without
/// changing orchestration code. Events are a side channel; the session
/// contract remains the final count.
pub trait AnalysisLogger: Send {
    /// Report sampled-frame progress.
    fn progress(&mut self, sampled: usize, max_samples: usize);

    /// Record one detected contrast error.
    fn contrast_error(&mut self, event: &ContrastEvent);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-session summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events. Used by embedding hosts with
/// their own reporting and by tests where diagnostics are irrelevant.
pub struct NullAnalysisLogger;

impl AnalysisLogger for NullAnalysisLogger {
    fn progress(&mut self, _sampled: usize, _max_samples: usize) {}
    fn contrast_error(&mut self, _event: &ContrastEvent) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI-oriented logger: keeps every error event, forwards them to the
/// `log` facade, and reports a summary at session end.
///
/// Progress output is throttled to every `throttle_frames` sampled
/// frames to avoid excessive I/O on long videos.
pub struct StdoutAnalysisLogger {
    throttle_frames: usize,
    events: Vec<ContrastEvent>,
    messages: Vec<String>,
}

impl StdoutAnalysisLogger {
    pub fn new(throttle_frames: usize) -> Self {
        Self {
            throttle_frames: throttle_frames.max(1),
            events: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Error events recorded so far, in detection order.
    pub fn events(&self) -> &[ContrastEvent] {
        &self.events
    }
}

impl Default for StdoutAnalysisLogger {
    fn default() -> Self {
        Self::new(10)
    }
}

impl AnalysisLogger for StdoutAnalysisLogger {
    fn progress(&mut self, sampled: usize, max_samples: usize) {
        if sampled % self.throttle_frames == 0 || sampled == max_samples {
            log::info!("Analyzed {sampled}/{max_samples} sampled frames");
        }
    }

    fn contrast_error(&mut self, event: &ContrastEvent) {
        log::info!(
            "Frame {}: contrast error for text '{}' in box ({}, {}, {}, {}), contrast {:.1}",
            event.frame_index,
            event.text,
            event.region.x,
            event.region.y,
            event.region.width,
            event.region.height,
            event.contrast
        );
        self.events.push(event.clone());
    }

    fn info(&mut self, message: &str) {
        self.messages.push(message.to_string());
        log::info!("{message}");
    }

    fn summary(&self) {
        log::info!("Session complete: {} contrast errors", self.events.len());
    }
}
