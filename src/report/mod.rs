//! Scoring and report rendering.
//!
//! # Components
//! - [`score`] - Number of substitutions in a trace
//! - [`report`] - One line per strategy for a task
//! - [`checked_report`] - The same, with every trace validated first
//! - [`report_batch`] - Checked reports for many tasks, rendered in parallel
//! - [`curve`] - Score-versus-accesses data for charting

pub mod curve;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use log::{debug, warn};
use parking_lot::Mutex;

use crate::common::Result;
use crate::policy::Strategy;
use crate::sim::{check, simulate, PlacementTrace, SimStats};
use crate::task::Task;

pub use curve::{curve_csv, score_curve};

/// Number of substitutions (page faults) recorded in `trace`.
///
/// # Example
/// ```
/// use pagesim::{score, FrameId, PlacementTrace};
///
/// let trace: PlacementTrace = vec![Some(3), Some(6), None, Some(1), None]
///     .into_iter()
///     .map(|f| f.map(FrameId::new))
///     .collect();
/// assert_eq!(score(&trace), 3);
/// ```
pub fn score(trace: &PlacementTrace) -> usize {
    trace.score()
}

/// Render one report line: `<name> (score <score>): <trace>`.
pub fn report_line(strategy: Strategy, trace: &PlacementTrace) -> String {
    format!("{} (score {}): {}", strategy.name(), trace.score(), trace)
}

/// Run every strategy on `task` and render one line each, in the order of
/// [`Strategy::ALL`], joined by newlines.
pub fn report(task: &Task) -> String {
    Strategy::ALL
        .iter()
        .map(|&strategy| report_line(strategy, &simulate(task, strategy)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Like [`report`], but every trace is replayed through the validator
/// before its line is rendered.
///
/// # Errors
/// `Error::InvalidTrace` naming the first violation found.
pub fn checked_report(task: &Task) -> Result<String> {
    let lines = Strategy::ALL
        .iter()
        .map(|&strategy| checked_line(task, strategy, &simulate(task, strategy)))
        .collect::<Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}

fn checked_line(task: &Task, strategy: Strategy, trace: &PlacementTrace) -> Result<String> {
    if let Err(violation) = check(task, trace) {
        warn!("{} produced an invalid trace: {}", strategy, violation);
        return Err(violation.into());
    }

    debug!("{}: {}", strategy, SimStats::from_trace(trace));
    Ok(report_line(strategy, trace))
}

/// Render [`checked_report`] for every task, using up to `workers` threads.
///
/// Runs share no state, so tasks are handed out to workers in any order;
/// the results are slotted back by task position so the output order always
/// matches `tasks`, and the error returned is the one of the earliest
/// failing task.
pub fn report_batch(tasks: &[Task], workers: usize) -> Result<Vec<String>> {
    let workers = workers.clamp(1, tasks.len().max(1));
    let next = AtomicUsize::new(0);
    let slots: Mutex<Vec<Option<Result<String>>>> =
        Mutex::new((0..tasks.len()).map(|_| None).collect());

    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| loop {
                let index = next.fetch_add(1, Ordering::Relaxed);
                let Some(task) = tasks.get(index) else {
                    break;
                };
                let rendered = checked_report(task);
                slots.lock()[index] = Some(rendered);
            });
        }
    });

    debug!("rendered {} report(s) on {} worker(s)", tasks.len(), workers);
    slots.into_inner().into_iter().flatten().collect()
}
