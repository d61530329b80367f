use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{FramecardError, FramecardResult};

/// Host-facing invocation contract for one template.
///
/// The host drives the frame clock from 0 to `duration` (exclusive) and
/// composites the resulting scenes into an encoded video; both are outside
/// this crate.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TemplateSpec {
    /// Stable template identifier.
    pub id: String,
    /// Total frame count.
    pub duration: FrameIndex,
    /// Frame rate.
    pub fps: Fps,
    /// Output canvas in pixels.
    pub canvas: Canvas,
}

impl TemplateSpec {
    /// Validate spec invariants.
    pub fn validate(&self) -> FramecardResult<()> {
        if self.id.trim().is_empty() {
            return Err(FramecardError::validation("template id must be non-empty"));
        }
        if self.duration.0 == 0 {
            return Err(FramecardError::validation("duration must be > 0 frames"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(FramecardError::validation("canvas width/height must be > 0"));
        }
        Ok(())
    }

    /// Build the sampling context for `frame`, rejecting out-of-bounds indices.
    pub fn frame_ctx(&self, frame: FrameIndex) -> FramecardResult<FrameCtx> {
        if frame.0 >= self.duration.0 {
            return Err(FramecardError::evaluation("frame is out of bounds"));
        }
        Ok(FrameCtx {
            frame,
            fps: self.fps,
            duration: self.duration,
        })
    }
}

/// Per-call sampling context handed to template render functions.
#[derive(Clone, Copy, Debug)]
pub struct FrameCtx {
    /// Global frame being evaluated.
    pub frame: FrameIndex,
    /// Timeline frame rate.
    pub fps: Fps,
    /// Total composition duration in frames.
    pub duration: FrameIndex,
}

impl FrameCtx {
    /// Global frame as f64, for interpolation inputs.
    pub fn frame_f64(self) -> f64 {
        self.frame.0 as f64
    }

    /// Frames elapsed since `start_frame`; negative before it.
    pub fn elapsed_since(self, start_frame: f64) -> f64 {
        self.frame_f64() - start_frame
    }

    /// Context with the clock re-based to a sequence-local frame.
    pub fn rebased(self, local: FrameIndex) -> Self {
        Self {
            frame: local,
            ..self
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/spec.rs"]
mod tests;
