//! Simulation statistics.

use std::collections::HashSet;
use std::fmt;

use crate::sim::PlacementTrace;

/// Summary of one simulation run, derived from its trace.
///
/// # Example
/// ```
/// use pagesim::{simulate, SimStats, Strategy, Task};
///
/// let task = Task::from_numbers(5, 3, &[1, 3, 2, 4, 1, 4, 5, 3, 2]).unwrap();
/// let stats = SimStats::from_trace(&simulate(&task, Strategy::Fifo));
/// assert_eq!(stats.misses, 8);
/// assert_eq!(stats.evictions, 5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Accesses whose page was already resident.
    pub hits: u64,

    /// Accesses that needed a placement (the score).
    pub misses: u64,

    /// Placements into a frame that already held a page.
    pub evictions: u64,
}

impl SimStats {
    /// Count hits, misses and evictions in `trace`.
    ///
    /// The first placement into each frame fills it; every later placement
    /// into the same frame evicts.
    pub fn from_trace(trace: &PlacementTrace) -> Self {
        let mut filled = HashSet::new();
        let mut stats = SimStats::default();

        for placement in trace.iter() {
            match placement {
                None => stats.hits += 1,
                Some(frame) => {
                    stats.misses += 1;
                    if !filled.insert(frame) {
                        stats.evictions += 1;
                    }
                }
            }
        }
        stats
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.misses,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::FrameId;

    fn trace(frames: &[Option<usize>]) -> PlacementTrace {
        frames.iter().map(|f| f.map(FrameId::new)).collect()
    }

    #[test]
    fn test_stats_empty() {
        let stats = SimStats::from_trace(&PlacementTrace::default());
        assert_eq!(stats, SimStats::default());
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_stats_counts() {
        let stats = SimStats::from_trace(&trace(&[Some(1), Some(2), None, Some(1), None, None]));
        assert_eq!(stats.hits, 3);
        assert_eq!(stats.misses, 3);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_stats_display() {
        let stats = SimStats {
            hits: 80,
            misses: 20,
            evictions: 5,
        };
        let display = format!("{}", stats);

        assert!(display.contains("hits: 80"));
        assert!(display.contains("misses: 20"));
        assert!(display.contains("80.00%"));
    }
}
