//! Placement traces.

use std::fmt;
use std::ops::Index;

use crate::common::config::HIT_MARKER;
use crate::common::FrameId;

/// Per-access placement decisions of one simulation run.
///
/// `Some(frame)` at position `i` means access `i` missed and its page was
/// placed into `frame`; `None` means access `i` was a hit.
///
/// # Example
/// ```
/// use pagesim::{FrameId, PlacementTrace};
///
/// let trace = PlacementTrace::from(vec![Some(FrameId::new(1)), None]);
/// assert_eq!(trace.score(), 1);
/// assert_eq!(trace.to_string(), "1 -");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementTrace(Vec<Option<FrameId>>);

impl PlacementTrace {
    /// An empty trace with room for `len` decisions.
    pub fn with_capacity(len: usize) -> Self {
        PlacementTrace(Vec::with_capacity(len))
    }

    /// Append the decision for the next access.
    #[inline]
    pub fn push(&mut self, placement: Option<FrameId>) {
        self.0.push(placement);
    }

    /// Number of substitutions (page faults) in the trace.
    pub fn score(&self) -> usize {
        self.0.iter().filter(|p| p.is_some()).count()
    }

    /// Number of decisions.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the trace has no decisions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the decisions in access order.
    pub fn iter(&self) -> impl Iterator<Item = Option<FrameId>> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<Option<FrameId>>> for PlacementTrace {
    fn from(placements: Vec<Option<FrameId>>) -> Self {
        PlacementTrace(placements)
    }
}

impl FromIterator<Option<FrameId>> for PlacementTrace {
    fn from_iter<I: IntoIterator<Item = Option<FrameId>>>(iter: I) -> Self {
        PlacementTrace(iter.into_iter().collect())
    }
}

impl Index<usize> for PlacementTrace {
    type Output = Option<FrameId>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Space-separated frame numbers, hits rendered as `-`.
impl fmt::Display for PlacementTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, placement) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match placement {
                Some(frame) => write!(f, "{}", frame)?,
                None => f.write_str(HIT_MARKER)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_counts_placements() {
        let trace = PlacementTrace::from(vec![
            Some(FrameId::new(3)),
            Some(FrameId::new(6)),
            None,
            Some(FrameId::new(1)),
            None,
        ]);
        assert_eq!(trace.score(), 3);
        assert_eq!(trace.len(), 5);
    }

    #[test]
    fn test_empty_trace() {
        let trace = PlacementTrace::default();
        assert!(trace.is_empty());
        assert_eq!(trace.score(), 0);
        assert_eq!(trace.to_string(), "");
    }

    #[test]
    fn test_display() {
        let trace: PlacementTrace = vec![Some(FrameId::new(1)), None, Some(FrameId::new(12))]
            .into_iter()
            .collect();
        assert_eq!(format!("{}", trace), "1 - 12");
    }

    #[test]
    fn test_index() {
        let mut trace = PlacementTrace::with_capacity(2);
        trace.push(None);
        trace.push(Some(FrameId::new(2)));
        assert_eq!(trace[0], None);
        assert_eq!(trace[1], Some(FrameId::new(2)));
    }
}
