//! FIFO (First-In-First-Out) replacement policy.

use crate::common::config::FIRST_FRAME;
use crate::common::{FrameId, PageId};
use crate::policy::EvictionPolicy;

/// Evicts frames in the order they were first filled.
///
/// Frames are filled 1, 2, ..., F and every later miss reuses the frame
/// filled longest ago, so a rotating cursor is all the state needed. Hits
/// never change the order.
#[derive(Debug)]
pub struct FifoPolicy {
    /// Frame handed out on the next miss.
    next_frame: usize,

    /// Number of frames (immutable after construction).
    frames: usize,
}

impl FifoPolicy {
    /// Create a FIFO policy over `frames` frames.
    ///
    /// # Panics
    /// Panics if `frames` is 0.
    pub fn new(frames: usize) -> Self {
        assert!(frames > 0, "frames must be > 0");

        Self {
            next_frame: FIRST_FRAME,
            frames,
        }
    }
}

impl EvictionPolicy for FifoPolicy {
    fn on_hit(&mut self, _page: PageId, _frame: FrameId, _index: usize) {}

    fn on_miss(&mut self, _page: PageId, _index: usize) -> FrameId {
        let frame = FrameId::new(self.next_frame);
        self.next_frame = if self.next_frame == self.frames {
            FIRST_FRAME
        } else {
            self.next_frame + 1
        };
        frame
    }
}
