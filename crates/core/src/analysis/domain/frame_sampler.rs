use thiserror::Error;

use crate::shared::frame::Frame;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    #[error("native frame rate must be positive, got {0}")]
    InvalidFrameRate(f64),
    #[error("frame count must be positive")]
    InvalidFrameCount,
    #[error("target frame rate must be positive, got {0}")]
    InvalidTargetRate(f64),
}

/// How a raw frame stream is thinned for analysis.
///
/// `skip` is the stride between examined frames; `max_samples` bounds how
/// many frames one run may score, derived from the source duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingPlan {
    pub skip: usize,
    pub max_samples: usize,
}

impl SamplingPlan {
    /// Derives the plan from source metadata and the requested rate.
    ///
    /// A target rate at or above the native rate degenerates to a stride
    /// of 1 (every frame examined). Invalid metadata is reported, never
    /// silently coerced to an empty plan.
    pub fn for_video(
        fps: f64,
        total_frames: usize,
        target_rate: f64,
    ) -> Result<Self, SamplingError> {
        if fps <= 0.0 || fps.is_nan() {
            return Err(SamplingError::InvalidFrameRate(fps));
        }
        if total_frames == 0 {
            return Err(SamplingError::InvalidFrameCount);
        }
        if target_rate <= 0.0 || target_rate.is_nan() {
            return Err(SamplingError::InvalidTargetRate(target_rate));
        }

        let skip = ((fps / target_rate).floor() as usize).max(1);
        let duration = total_frames as f64 / fps;
        let max_samples = ((fps / skip as f64) * duration).floor() as usize;
        Ok(Self { skip, max_samples })
    }
}

/// A frame selected for analysis, tagged with the 1-based cumulative
/// raw-frame count at which it was decoded.
pub struct SampledFrame {
    pub raw_index: usize,
    pub frame: Frame,
}

/// Pull-based sampler over a decoder's frame stream.
///
/// Advances one raw frame per step and yields every `skip`-th frame until
/// the source is exhausted or `max_samples` frames have been yielded.
/// A decode error ends sampling cleanly; frames already yielded remain
/// valid. Not restartable.
pub struct FrameSampler<I> {
    frames: I,
    plan: SamplingPlan,
    raw_index: usize,
    yielded: usize,
    done: bool,
}

impl<I> FrameSampler<I>
where
    I: Iterator<Item = Result<Frame, Box<dyn std::error::Error>>>,
{
    pub fn new(frames: I, plan: SamplingPlan) -> Self {
        Self {
            frames,
            plan,
            raw_index: 0,
            yielded: 0,
            done: false,
        }
    }
}

impl<I> Iterator for FrameSampler<I>
where
    I: Iterator<Item = Result<Frame, Box<dyn std::error::Error>>>,
{
    type Item = SampledFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.yielded >= self.plan.max_samples {
            return None;
        }

        loop {
            let Some(item) = self.frames.next() else {
                self.done = true;
                return None;
            };
            self.raw_index += 1;

            let frame = match item {
                Ok(frame) => frame,
                Err(e) => {
                    log::warn!(
                        "decode failed at raw frame {}: {e}; ending sampling early",
                        self.raw_index
                    );
                    self.done = true;
                    return None;
                }
            };

            if self.raw_index % self.plan.skip != 0 {
                continue;
            }

            self.yielded += 1;
            return Some(SampledFrame {
                raw_index: self.raw_index,
                frame,
            });
        }
    }
}
