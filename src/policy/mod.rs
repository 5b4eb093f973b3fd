//! Eviction policy implementations.
//!
//! Currently implements:
//! - [`FifoPolicy`] - Evict frames in the order they were first filled
//! - [`LruPolicy`] - Evict the least recently used frame
//! - [`OptPolicy`] - Evict the frame used furthest in the future (offline)
//!
//! Every policy speaks the same two-call contract ([`EvictionPolicy`]); the
//! simulation driver owns residency and only asks a policy which frame to
//! reuse. [`Strategy`] selects a policy at runtime.

mod fifo;
mod frame_index;
mod lru;
mod opt;

use std::fmt;

use crate::common::{FrameId, PageId};
use crate::task::Task;

pub use fifo::FifoPolicy;
pub use frame_index::FrameIndex;
pub use lru::LruPolicy;
pub use opt::{next_uses, OptPolicy};

/// The capability every replacement policy provides.
pub trait EvictionPolicy {
    /// `page`, resident in `frame`, was accessed at `index`.
    ///
    /// Updates priority bookkeeping only; residency does not change.
    fn on_hit(&mut self, page: PageId, frame: FrameId, index: usize);

    /// `page` missed at `index`; return the frame it will be placed in.
    ///
    /// Called before the driver updates residency, so the returned frame
    /// may still hold the page about to be evicted.
    fn on_miss(&mut self, page: PageId, index: usize) -> FrameId;
}

/// A replacement strategy, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Fifo,
    Lru,
    Opt,
}

impl Strategy {
    /// All strategies, in report order.
    pub const ALL: [Strategy; 3] = [Strategy::Fifo, Strategy::Lru, Strategy::Opt];

    /// Display name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Fifo => "FIFO",
            Strategy::Lru => "LRU",
            Strategy::Opt => "OPT",
        }
    }

    /// True for policies that need the whole access sequence upfront.
    pub fn is_offline(self) -> bool {
        matches!(self, Strategy::Opt)
    }

    /// Build fresh policy state for `task`.
    pub fn build(self, task: &Task) -> Box<dyn EvictionPolicy> {
        match self {
            Strategy::Fifo => Box::new(FifoPolicy::new(task.frames())),
            Strategy::Lru => Box::new(LruPolicy::new(task.frames())),
            Strategy::Opt => Box::new(OptPolicy::new(task)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_order() {
        let names: Vec<_> = Strategy::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["FIFO", "LRU", "OPT"]);
    }

    #[test]
    fn test_only_opt_is_offline() {
        assert!(!Strategy::Fifo.is_offline());
        assert!(!Strategy::Lru.is_offline());
        assert!(Strategy::Opt.is_offline());
    }

    #[test]
    fn test_build_first_miss_takes_frame_one() {
        let task = Task::from_numbers(3, 2, &[1, 2, 3]).unwrap();
        for strategy in Strategy::ALL {
            let mut policy = strategy.build(&task);
            assert_eq!(policy.on_miss(PageId::new(1), 0), FrameId::new(1), "{}", strategy);
        }
    }
}
