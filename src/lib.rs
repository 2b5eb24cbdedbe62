//! argcheck - black-box acceptance harness for argument-parsing CLIs
//!
//! Launches pre-built command-line programs with fixed argument vectors and
//! checks exit code, stdout and stderr against one of three outcome shapes.

pub mod cli;
pub mod commands;
pub mod common;
pub mod process;
pub mod testing;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use process::{ExecutionRequest, ExecutionResult, Launcher, ProcessLauncher};
pub use testing::{Expectation, Scenario, Suite};
