//! OPT (optimal, offline) replacement policy.
//!
//! Unlike FIFO and LRU this policy is two-pass: it needs the whole access
//! sequence before the simulation starts. [`next_uses`] walks the sequence
//! backwards once, and the policy then only looks up precomputed values
//! while the driver makes its single forward pass.

use log::trace;

use crate::common::{FrameId, PageId};
use crate::policy::{EvictionPolicy, FrameIndex};
use crate::task::Task;

/// For every access index `i`, the index of the next access to the same
/// page, or `accesses.len()` when the page is never accessed again.
///
/// # Example
/// ```
/// use pagesim::policy::next_uses;
/// use pagesim::PageId;
///
/// let accesses: Vec<PageId> = [1, 2, 1].into_iter().map(PageId::new).collect();
/// assert_eq!(next_uses(&accesses, 2), vec![2, 3, 3]);
/// ```
pub fn next_uses(accesses: &[PageId], pages: usize) -> Vec<usize> {
    let never = accesses.len();
    let mut upcoming = vec![never; pages + 1];
    let mut next = vec![never; accesses.len()];

    for (index, page) in accesses.iter().enumerate().rev() {
        next[index] = upcoming[page.0];
        upcoming[page.0] = index;
    }
    next
}

/// Evicts the frame whose page is needed furthest in the future.
///
/// Each frame is keyed by the next use of its resident page. Empty frames
/// and pages never used again share the key `accesses.len()`, the largest
/// possible, so they are reclaimed first. Ties go to the smallest frame id.
#[derive(Debug)]
pub struct OptPolicy {
    next_use: FrameIndex<usize>,

    /// Precomputed next use of the page accessed at each index.
    lookahead: Vec<usize>,
}

impl OptPolicy {
    /// Create an OPT policy for `task`, precomputing its lookahead.
    pub fn new(task: &Task) -> Self {
        Self::from_parts(task.frames(), task.pages(), task.accesses())
    }

    /// Create an OPT policy from the raw parts of a task.
    ///
    /// # Panics
    /// Panics if `frames` is 0.
    pub fn from_parts(frames: usize, pages: usize, accesses: &[PageId]) -> Self {
        assert!(frames > 0, "frames must be > 0");

        Self {
            next_use: FrameIndex::new(frames, accesses.len()),
            lookahead: next_uses(accesses, pages),
        }
    }
}

impl EvictionPolicy for OptPolicy {
    fn on_hit(&mut self, _page: PageId, frame: FrameId, index: usize) {
        self.next_use.rekey(frame, self.lookahead[index]);
    }

    fn on_miss(&mut self, page: PageId, index: usize) -> FrameId {
        let victim = self
            .next_use
            .max_frame()
            .expect("OPT index holds one entry per frame");

        trace!(
            "OPT: page {} at {} takes frame {} (next use {})",
            page,
            index,
            victim,
            self.next_use.key(victim)
        );
        self.next_use.rekey(victim, self.lookahead[index]);
        victim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(numbers: &[usize]) -> Vec<PageId> {
        numbers.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_next_uses() {
        let accesses = pages(&[1, 3, 2, 4, 1, 4, 5, 3, 2]);
        assert_eq!(next_uses(&accesses, 5), vec![4, 7, 8, 5, 9, 9, 9, 9, 9]);
    }

    #[test]
    fn test_next_uses_immediate_repeat() {
        let accesses = pages(&[2, 2, 2]);
        assert_eq!(next_uses(&accesses, 2), vec![1, 2, 3]);
    }

    #[test]
    fn test_next_uses_empty() {
        assert!(next_uses(&[], 4).is_empty());
    }

    #[test]
    fn test_opt_evicts_furthest_next_use() {
        // 1 and 2 fill the frames; 3 misses while 1 is needed at 4 and 2 at 3
        let accesses = pages(&[1, 2, 3, 2, 1]);
        let mut policy = OptPolicy::from_parts(2, 3, &accesses);

        assert_eq!(policy.on_miss(PageId::new(1), 0), FrameId::new(1));
        assert_eq!(policy.on_miss(PageId::new(2), 1), FrameId::new(2));
        assert_eq!(policy.on_miss(PageId::new(3), 2), FrameId::new(1));
    }

    #[test]
    fn test_opt_prefers_never_used_again() {
        let accesses = pages(&[1, 2, 3, 1]);
        let mut policy = OptPolicy::from_parts(2, 3, &accesses);

        policy.on_miss(PageId::new(1), 0);
        policy.on_miss(PageId::new(2), 1);

        // Page 2 is never used again, page 1 is used at 3
        assert_eq!(policy.on_miss(PageId::new(3), 2), FrameId::new(2));
    }

    #[test]
    fn test_opt_tie_goes_to_smallest_frame() {
        let accesses = pages(&[1, 2, 3, 4]);
        let mut policy = OptPolicy::from_parts(3, 4, &accesses);

        policy.on_miss(PageId::new(1), 0);
        policy.on_miss(PageId::new(2), 1);
        policy.on_miss(PageId::new(3), 2);

        // No page is used again: every frame is keyed 4
        assert_eq!(policy.on_miss(PageId::new(4), 3), FrameId::new(1));
    }

    #[test]
    fn test_opt_hit_updates_next_use() {
        let accesses = pages(&[1, 2, 1, 3, 2]);
        let mut policy = OptPolicy::from_parts(2, 3, &accesses);

        policy.on_miss(PageId::new(1), 0);
        policy.on_miss(PageId::new(2), 1);
        policy.on_hit(PageId::new(1), FrameId::new(1), 2);

        // Page 1 is never used again after index 2, page 2 is used at 4
        assert_eq!(policy.on_miss(PageId::new(3), 3), FrameId::new(1));
    }
}
