use crate::foundation::core::{FrameIndex, FrameRange};

/// A contiguous frame window during which a sub-template is active.
///
/// Windows are half-open: a sequence of length `n` starting at `s` is active
/// for `s <= frame < s + n`. Sequences may overlap; rendering is additive and
/// the scheduler enforces no mutual exclusion.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Sequence {
    /// Name for authoring/debugging.
    pub name: String,
    /// Timeline window `[start, start + len)`.
    pub range: FrameRange,
}

impl Sequence {
    /// Sequence starting at `start` and spanning `len` frames.
    pub fn new(name: impl Into<String>, start: FrameIndex, len: u64) -> Self {
        Self {
            name: name.into(),
            range: FrameRange::from_start_len(start, len),
        }
    }

    /// Return `true` while the global frame falls inside the window.
    pub fn is_active(&self, frame: FrameIndex) -> bool {
        self.range.contains(frame)
    }

    /// Re-base the global frame onto this sequence's zero-based local clock.
    ///
    /// Meaningful only while [`Sequence::is_active`] holds.
    pub fn local_frame(&self, frame: FrameIndex) -> FrameIndex {
        FrameIndex(frame.0.saturating_sub(self.range.start.0))
    }

    /// Run the child closure against the local clock when active.
    ///
    /// Returns `None` outside the window, so inactive sequences contribute
    /// nothing to the frame.
    pub fn map_active<T>(&self, frame: FrameIndex, f: impl FnOnce(FrameIndex) -> T) -> Option<T> {
        if self.is_active(frame) {
            Some(f(self.local_frame(frame)))
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequence.rs"]
mod tests;
