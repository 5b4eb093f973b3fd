//! The simulation loop shared by every policy.

use log::{debug, trace};

use crate::common::config::FIRST_FRAME;
use crate::policy::{EvictionPolicy, Strategy};
use crate::sim::{PlacementTrace, Residency};
use crate::task::Task;

/// Run `strategy` over `task` and return its placement trace.
///
/// Deterministic: the same task and strategy always yield the same trace.
///
/// # Example
/// ```
/// use pagesim::{simulate, Strategy, Task};
///
/// let task = Task::from_numbers(5, 3, &[1, 3, 2, 4, 1, 4, 5, 3, 2]).unwrap();
/// assert_eq!(simulate(&task, Strategy::Opt).to_string(), "1 2 3 3 - - 1 - 1");
/// ```
pub fn simulate(task: &Task, strategy: Strategy) -> PlacementTrace {
    let mut policy = strategy.build(task);
    let trace = simulate_with(task, policy.as_mut());

    debug!(
        "{}: {} accesses, {} frames, score {}",
        strategy,
        task.len(),
        task.frames(),
        trace.score()
    );
    trace
}

/// Run any policy over `task` in a single forward pass.
///
/// On a hit the policy sees `on_hit` and the trace records `None`. On a miss
/// the policy picks a frame first, then residency is updated (evicting the
/// frame's previous page) and the trace records that frame.
pub fn simulate_with(task: &Task, policy: &mut dyn EvictionPolicy) -> PlacementTrace {
    let mut residency = Residency::new(task.pages(), task.frames());
    let mut placements = PlacementTrace::with_capacity(task.len());

    for (index, &page) in task.accesses().iter().enumerate() {
        match residency.frame_of(page) {
            Some(frame) => {
                policy.on_hit(page, frame, index);
                placements.push(None);
            }
            None => {
                let frame = policy.on_miss(page, index);
                assert!(
                    (FIRST_FRAME..FIRST_FRAME + task.frames()).contains(&frame.0),
                    "policy returned {} outside 1..={}",
                    frame,
                    task.frames()
                );

                if let Some(evicted) = residency.place(page, frame) {
                    trace!(
                        "access {}: page {} evicts page {} from frame {}",
                        index,
                        page,
                        evicted,
                        frame
                    );
                }
                placements.push(Some(frame));
            }
        }
    }

    placements
}
