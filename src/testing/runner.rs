//! Scenario evaluation
//!
//! Runs one scenario through a [`Launcher`] and turns the first unmet
//! condition of its expectation into an assertion failure.

use serde::Serialize;

use crate::common::{AssertionFailure, Result};
use crate::process::Launcher;

use super::config::Scenario;

/// Counts accumulated over a single run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunCounters {
    /// Target binaries whose suites were started
    pub targets: usize,
    /// Scenarios started
    pub scenarios: usize,
    /// Scenarios whose expectation held (one per scenario)
    pub assertions: usize,
}

/// Evaluate a scenario against its target
///
/// Launch failures and assertion failures are returned as-is; the caller
/// is expected to stop the run on either.
pub async fn evaluate(
    scenario: &Scenario,
    launcher: &dyn Launcher,
    failure_code: i32,
    counters: &mut RunCounters,
) -> Result<()> {
    counters.scenarios += 1;
    tracing::debug!(target_name = %scenario.target, scenario = %scenario.name, "Evaluating scenario");

    let result = launcher.execute(&scenario.request).await?;

    scenario
        .expectation
        .check(&result, failure_code)
        .map_err(|m| AssertionFailure {
            scenario: scenario.name.clone(),
            field: m.field,
            expected: m.expected,
            actual: m.actual,
        })?;

    counters.assertions += 1;
    Ok(())
}
