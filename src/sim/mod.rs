//! Simulation core.
//!
//! # Components
//! - [`simulate`] / [`simulate_with`] - The single-pass driver
//! - [`Residency`] - Bidirectional frame/page bookkeeping
//! - [`PlacementTrace`] - Per-access placement decisions
//! - [`validator`] - Independent trace replay
//! - [`SimStats`] - Hit/miss/eviction summary

mod driver;
mod residency;
mod stats;
mod trace;
pub mod validator;

pub use driver::{simulate, simulate_with};
pub use residency::Residency;
pub use stats::SimStats;
pub use trace::PlacementTrace;
pub use validator::{check, is_valid, TraceViolation};
