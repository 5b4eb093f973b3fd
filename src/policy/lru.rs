//! LRU (Least Recently Used) replacement policy.

use log::trace;

use crate::common::{FrameId, PageId};
use crate::policy::{EvictionPolicy, FrameIndex};

/// Evicts the frame whose page was accessed longest ago.
///
/// Each frame is keyed by the index of the last access to its page.
/// Frames that were never filled carry `None`, which orders before every
/// access index, so they are used first and in frame order.
#[derive(Debug)]
pub struct LruPolicy {
    last_used: FrameIndex<Option<usize>>,
}

impl LruPolicy {
    /// Create an LRU policy over `frames` frames.
    ///
    /// # Panics
    /// Panics if `frames` is 0.
    pub fn new(frames: usize) -> Self {
        assert!(frames > 0, "frames must be > 0");

        Self {
            last_used: FrameIndex::new(frames, None),
        }
    }
}

impl EvictionPolicy for LruPolicy {
    fn on_hit(&mut self, _page: PageId, frame: FrameId, index: usize) {
        self.last_used.rekey(frame, Some(index));
    }

    fn on_miss(&mut self, page: PageId, index: usize) -> FrameId {
        let victim = self
            .last_used
            .min_frame()
            .expect("LRU index holds one entry per frame");

        trace!(
            "LRU: page {} at {} takes frame {} (last used {:?})",
            page,
            index,
            victim,
            self.last_used.key(victim)
        );
        self.last_used.rekey(victim, Some(index));
        victim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_fills_empty_frames_in_order() {
        let mut policy = LruPolicy::new(3);

        assert_eq!(policy.on_miss(PageId::new(1), 0), FrameId::new(1));
        assert_eq!(policy.on_miss(PageId::new(2), 1), FrameId::new(2));
        assert_eq!(policy.on_miss(PageId::new(3), 2), FrameId::new(3));
    }

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut policy = LruPolicy::new(2);

        policy.on_miss(PageId::new(1), 0);
        policy.on_miss(PageId::new(2), 1);

        assert_eq!(policy.on_miss(PageId::new(3), 2), FrameId::new(1));
        assert_eq!(policy.on_miss(PageId::new(4), 3), FrameId::new(2));
    }

    #[test]
    fn test_lru_hit_refreshes_frame() {
        let mut policy = LruPolicy::new(2);

        policy.on_miss(PageId::new(1), 0);
        policy.on_miss(PageId::new(2), 1);
        policy.on_hit(PageId::new(1), FrameId::new(1), 2);

        // Frame 2 is now the least recently used
        assert_eq!(policy.on_miss(PageId::new(3), 3), FrameId::new(2));
    }

    #[test]
    fn test_lru_empty_frame_before_any_used_frame() {
        let mut policy = LruPolicy::new(3);

        policy.on_miss(PageId::new(1), 0);
        policy.on_hit(PageId::new(1), FrameId::new(1), 1);

        assert_eq!(policy.on_miss(PageId::new(2), 2), FrameId::new(2));
    }
}
