//! pagesim - A page-replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Collaborators (task/, runner, report/)            │   │
//! │  │   Task files → Task → Reports / Score curves (CSV)      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Simulation Core (sim/)                      │   │
//! │  │   Driver + Residency → PlacementTrace → Validator        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Eviction Policies (policy/)  [Runtime Swappable]   │   │
//! │  │              FIFO  |  LRU  |  OPT (offline)              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`policy`] - Eviction policy implementations
//! - [`sim`] - Simulation driver, residency, traces and validation
//! - [`task`] - Task model, task file format and random generation
//! - [`report`] - Scoring, report lines and score curves
//! - [`runner`] - Running whole task files
//!
//! # Quick Start
//! ```
//! use pagesim::{report, simulate, Strategy, Task};
//!
//! let task = Task::from_numbers(5, 3, &[1, 3, 2, 4, 1, 4, 5, 3, 2]).unwrap();
//!
//! let trace = simulate(&task, Strategy::Lru);
//! assert_eq!(trace.to_string(), "1 2 3 1 2 - 3 2 1");
//!
//! assert!(report(&task).starts_with("FIFO (score 8): "));
//! ```

pub mod common;
pub mod policy;
pub mod report;
pub mod runner;
pub mod sim;
pub mod task;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, PageId, Result};

pub use policy::{EvictionPolicy, Strategy};
pub use report::{checked_report, curve_csv, report, report_batch, score, score_curve};
pub use runner::run_from_files;
pub use sim::{check, is_valid, simulate, simulate_with, PlacementTrace, SimStats, TraceViolation};
pub use task::Task;
