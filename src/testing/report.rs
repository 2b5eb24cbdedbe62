//! Run aggregation and reporting
//!
//! Drives suites in registration order, stops at the first failure and
//! prints a single summary line when everything passes.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Serialize;

use crate::common::{Error, Result};
use crate::process::Launcher;

use super::config::Suite;
use super::runner::{evaluate, RunCounters};

/// Lifecycle of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Success,
    Failed,
}

/// Totals reported after a passing run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub targets: usize,
    pub scenarios: usize,
    pub assertions: usize,
}

impl From<RunCounters> for RunSummary {
    fn from(c: RunCounters) -> Self {
        Self {
            targets: c.targets,
            scenarios: c.scenarios,
            assertions: c.assertions,
        }
    }
}

/// Settings for one run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory holding the target binaries
    pub examples_dir: PathBuf,
    /// Exit code expected from handled argument errors
    pub failure_code: i32,
    /// Print a line per passing scenario
    pub verbose: bool,
    /// Suppress human-readable output (JSON mode)
    pub quiet: bool,
    /// Fall back to PATH for targets missing from the examples directory
    pub path_lookup: bool,
}

impl RunOptions {
    pub fn new(examples_dir: impl Into<PathBuf>) -> Self {
        Self {
            examples_dir: examples_dir.into(),
            failure_code: crate::common::config::DEFAULT_FAILURE_CODE,
            verbose: false,
            quiet: false,
            path_lookup: false,
        }
    }
}

/// Runs suites and tracks counts for a single run
pub struct Aggregator<'a> {
    launcher: &'a dyn Launcher,
    options: RunOptions,
    state: RunState,
    counters: RunCounters,
}

impl<'a> Aggregator<'a> {
    pub fn new(launcher: &'a dyn Launcher, options: RunOptions) -> Self {
        Self {
            launcher,
            options,
            state: RunState::Idle,
            counters: RunCounters::default(),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn counters(&self) -> RunCounters {
        self.counters
    }

    /// Run every suite in order, stopping at the first error
    pub async fn run_all(&mut self, suites: &[Suite]) -> Result<RunSummary> {
        if self.state != RunState::Idle {
            return Err(Error::Internal(format!(
                "Aggregator already used (state {:?})",
                self.state
            )));
        }

        if !self.options.quiet {
            let header = format!(
                "{} {} ...",
                "Running tests in".blue().bold(),
                self.options.examples_dir.display()
            );
            // Unless scenarios are listed, the result completes this line
            if self.options.verbose {
                println!("{header}");
            } else {
                print!("{header}");
                io::stdout().flush()?;
            }
        }
        self.state = RunState::Running;

        match self.run_suites(suites).await {
            Ok(()) => {
                self.state = RunState::Success;
                let summary = RunSummary::from(self.counters);
                if !self.options.quiet {
                    println!(
                        " {} (ran {} tests with {} checks)",
                        "SUCCESS!".green().bold(),
                        summary.targets,
                        summary.assertions
                    );
                }
                Ok(summary)
            }
            Err(e) => {
                self.state = RunState::Failed;
                Err(e)
            }
        }
    }

    async fn run_suites(&mut self, suites: &[Suite]) -> Result<()> {
        for suite in suites {
            self.counters.targets += 1;
            let program = resolve_target(
                &self.options.examples_dir,
                &suite.target,
                self.options.path_lookup,
            );
            tracing::info!(target_name = %suite.target, program = %program.display(), "Running suite");

            for scenario in suite.scenarios(&program) {
                let outcome = evaluate(
                    &scenario,
                    self.launcher,
                    self.options.failure_code,
                    &mut self.counters,
                )
                .await;

                match outcome {
                    Ok(()) => {
                        if self.options.verbose && !self.options.quiet {
                            println!("  {} {}", "✓".green(), scenario.name.dimmed());
                        }
                    }
                    Err(e) => {
                        if !self.options.quiet {
                            if !self.options.verbose {
                                println!();
                            }
                            println!("  {} {}", "✗".red().bold(), scenario.name.red());
                        }
                        return Err(e);
                    }
                }
            }
        }
        Ok(())
    }
}

/// Run suites with a fresh aggregator
pub async fn run_all(
    suites: &[Suite],
    launcher: &dyn Launcher,
    options: RunOptions,
) -> Result<RunSummary> {
    Aggregator::new(launcher, options).run_all(suites).await
}

/// Path of a target: `examples_dir/<target>`, or a PATH match if allowed
///
/// Absolute targets are used as-is.
pub fn resolve_target(examples_dir: &Path, target: &str, path_lookup: bool) -> PathBuf {
    let candidate = examples_dir.join(target);
    if candidate.exists() || !path_lookup {
        return candidate;
    }
    which::which(target).unwrap_or(candidate)
}
