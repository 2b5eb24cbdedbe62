//! CLI command handling
//!
//! Resolves configuration, builds suites and hands them to the aggregator.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::commands::Commands;
use crate::common::config::Config;
use crate::common::{paths, Error, Result};
use crate::process::ProcessLauncher;
use crate::testing::{self, suites, Expectation, RunOptions, RunSummary, Suite, SuiteFile};

/// Dispatch a CLI command
pub async fn dispatch(command: Commands, config_path: Option<&Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match command {
        Commands::Run {
            examples_dir,
            targets,
            verbose,
            json,
        } => {
            let suites = select_suites(&targets)?;
            let examples_dir = examples_dir
                .or_else(|| config.harness.examples_dir.clone())
                .or_else(paths::default_examples_dir)
                .ok_or_else(no_examples_dir)?;

            let options = RunOptions {
                examples_dir,
                failure_code: config.harness.failure_code,
                verbose,
                quiet: json,
                path_lookup: false,
            };
            let summary = testing::run_all(&suites, &ProcessLauncher, options).await?;
            print_json_summary(json, &summary)
        }

        Commands::Test {
            path,
            examples_dir,
            verbose,
            json,
        } => {
            let file = SuiteFile::load(&path)?;
            let suite_dir = path.parent().unwrap_or(Path::new("."));

            if !json {
                println!("{} {}", "Suite:".blue().bold(), file.name.white().bold());
                if let Some(desc) = &file.description {
                    println!("  {}", desc.dimmed());
                }
            }

            let examples_dir = examples_dir
                .or_else(|| {
                    file.examples_dir
                        .as_ref()
                        .map(|dir| paths::resolve_relative(suite_dir, dir))
                })
                .or_else(|| config.harness.examples_dir.clone())
                .or_else(paths::default_examples_dir)
                .ok_or_else(no_examples_dir)?;

            let options = RunOptions {
                examples_dir,
                failure_code: file.failure_code.unwrap_or(config.harness.failure_code),
                verbose,
                quiet: json,
                path_lookup: true,
            };
            let summary = testing::run_all(&file.suites(), &ProcessLauncher, options).await?;
            print_json_summary(json, &summary)
        }

        Commands::List { json } => {
            let listing: Vec<TargetListing> = suites::registered()
                .iter()
                .map(|info| {
                    let suite = info.suite();
                    TargetListing {
                        target: info.id,
                        description: info.description,
                        scenarios: suite
                            .cases
                            .into_iter()
                            .map(|case| ScenarioListing {
                                name: testing::scenario_name(info.id, &case.args),
                                args: case.args,
                                expect: case.expectation,
                            })
                            .collect(),
                    }
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                for target in &listing {
                    println!("{}  {}", target.target.bold(), target.description.dimmed());
                    for scenario in &target.scenarios {
                        println!("  {:<32} {}", scenario.name, describe(&scenario.expect));
                    }
                }
            }
            Ok(())
        }
    }
}

/// Registered suites, optionally restricted to `targets` (registration order kept)
fn select_suites(targets: &[String]) -> Result<Vec<Suite>> {
    if let Some(unknown) = targets.iter().find(|t| suites::find(t).is_none()) {
        return Err(Error::UnknownTarget(unknown.clone()));
    }

    Ok(suites::registered()
        .iter()
        .filter(|info| targets.is_empty() || targets.iter().any(|t| t == info.id))
        .map(|info| info.suite())
        .collect())
}

fn no_examples_dir() -> Error {
    Error::Config("Could not determine the examples directory; pass --examples-dir".to_string())
}

fn print_json_summary(json: bool, summary: &RunSummary) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    }
    Ok(())
}

fn describe(expect: &Expectation) -> String {
    match expect {
        Expectation::ExactSuccess { stdout } => format!("exact {:?}", stdout),
        Expectation::HandledFailure => "handled failure".to_string(),
        Expectation::UncheckedSuccess => "success (output unchecked)".to_string(),
    }
}

#[derive(Serialize)]
struct TargetListing {
    target: &'static str,
    description: &'static str,
    scenarios: Vec<ScenarioListing>,
}

#[derive(Serialize)]
struct ScenarioListing {
    name: String,
    args: Vec<String>,
    expect: Expectation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_suites() {
        let selected = select_suites(&[]).unwrap();
        assert_eq!(selected.len(), suites::registered().len());
    }

    #[test]
    fn test_select_keeps_registration_order() {
        let selected =
            select_suites(&["positional".to_string(), "basic".to_string()]).unwrap();
        let names: Vec<_> = selected.iter().map(|s| s.target.as_str()).collect();
        assert_eq!(names, ["basic", "positional"]);
    }

    #[test]
    fn test_select_unknown_target() {
        let err = select_suites(&["nope".to_string()]).unwrap_err();
        assert!(matches!(err, Error::UnknownTarget(name) if name == "nope"));
    }
}
