//! Acceptance scenarios
//!
//! Scenarios pair an argument vector with one of three outcome shapes:
//! exact success, handled failure, or success with unchecked output.
//! Suites come from the built-in registry or from YAML suite files.

mod config;
mod report;
mod runner;
pub mod suites;

pub use config::*;
pub use report::{resolve_target, run_all, Aggregator, RunOptions, RunState, RunSummary};
pub use runner::{evaluate, RunCounters};
