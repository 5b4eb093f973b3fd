//! Score curves: how many faults each strategy has taken after the first
//! `n` accesses, for every `n`. This is the data behind a score-versus-
//! accesses chart.

use crate::policy::Strategy;
use crate::sim::simulate;
use crate::task::Task;

/// Score of `strategy` on every prefix of `task`: element `n - 1` is the
/// score on the first `n` accesses.
///
/// Online policies never look ahead, so their decisions on a prefix are the
/// same as on the full sequence and the curve is a running fault count.
/// OPT's decisions depend on the accesses after the prefix, so each prefix
/// is simulated on its own truncated task.
pub fn score_curve(task: &Task, strategy: Strategy) -> Vec<usize> {
    if strategy.is_offline() {
        return (1..=task.len())
            .map(|n| simulate(&task.prefix(n), strategy).score())
            .collect();
    }

    simulate(task, strategy)
        .iter()
        .scan(0, |faults, placement| {
            *faults += usize::from(placement.is_some());
            Some(*faults)
        })
        .collect()
}

/// Render the curves of all strategies as CSV with a
/// `accesses,strategy,score` header.
pub fn curve_csv(task: &Task) -> String {
    let mut out = String::from("accesses,strategy,score\n");
    for strategy in Strategy::ALL {
        for (i, score) in score_curve(task, strategy).into_iter().enumerate() {
            out.push_str(&format!("{},{},{}\n", i + 1, strategy.name(), score));
        }
    }
    out
}
