//! Independent replay of placement traces.
//!
//! The validator never consults a policy. It rebuilds residency from the
//! trace alone and checks every decision against it, so a policy bug shows
//! up as a rejected trace rather than a silently wrong score.

use thiserror::Error;

use crate::common::config::FIRST_FRAME;
use crate::common::{FrameId, PageId};
use crate::sim::{PlacementTrace, Residency};
use crate::task::Task;

/// Why a trace is not a legal placement sequence for a task.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceViolation {
    /// The trace does not have one decision per access.
    #[error("trace has {actual} decisions for {expected} accesses")]
    LengthMismatch { expected: usize, actual: usize },

    /// A hit was recorded for a page that is not resident.
    #[error("access {index}: hit recorded but page {page} is not resident")]
    NotResident { index: usize, page: PageId },

    /// A placement was recorded for a page that is already resident.
    #[error("access {index}: page {page} placed but already resident in frame {frame}")]
    AlreadyResident {
        index: usize,
        page: PageId,
        frame: FrameId,
    },

    /// A placement names a frame the task does not have.
    #[error("access {index}: frame {frame} outside 1..={frames}")]
    FrameOutOfRange {
        index: usize,
        frame: FrameId,
        frames: usize,
    },
}

/// Replay `trace` against `task`, reporting the first violation.
pub fn check(task: &Task, trace: &PlacementTrace) -> Result<(), TraceViolation> {
    if trace.len() != task.len() {
        return Err(TraceViolation::LengthMismatch {
            expected: task.len(),
            actual: trace.len(),
        });
    }

    let frame_range = FIRST_FRAME..FIRST_FRAME + task.frames();
    let mut residency = Residency::new(task.pages(), task.frames());

    for (index, (&page, placement)) in task.accesses().iter().zip(trace.iter()).enumerate() {
        match (placement, residency.frame_of(page)) {
            (None, Some(_)) => {}
            (None, None) => return Err(TraceViolation::NotResident { index, page }),
            (Some(_), Some(frame)) => {
                return Err(TraceViolation::AlreadyResident { index, page, frame })
            }
            (Some(frame), None) => {
                if !frame_range.contains(&frame.0) {
                    return Err(TraceViolation::FrameOutOfRange {
                        index,
                        frame,
                        frames: task.frames(),
                    });
                }
                residency.place(page, frame);
            }
        }
    }

    Ok(())
}

/// True if `trace` is a legal placement sequence for `task`.
pub fn is_valid(task: &Task, trace: &PlacementTrace) -> bool {
    check(task, trace).is_ok()
}
