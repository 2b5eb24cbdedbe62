//! Scenario data model
//!
//! Defines expectations, scenarios and suites, plus the data structures
//! for deserializing YAML suite files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::common::{Error, Field, Result};
use crate::process::{split_args, ExecutionRequest, ExecutionResult};

/// Outcome shape a scenario checks against
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expectation {
    /// Exit 0, empty stderr, stdout equal to `stdout` after trimming both
    ExactSuccess { stdout: String },
    /// Exit with the failure code, empty stdout, non-empty stderr
    HandledFailure,
    /// Exit 0; output is not checked (help text)
    UncheckedSuccess,
}

/// First condition of an expectation that a result did not meet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub field: Field,
    pub expected: String,
    pub actual: String,
}

impl Mismatch {
    fn new(field: Field, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            field,
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl Expectation {
    /// Check a captured result, in order: exit code, stdout, stderr
    ///
    /// Stops at the first condition that does not hold.
    pub fn check(
        &self,
        result: &ExecutionResult,
        failure_code: i32,
    ) -> std::result::Result<(), Mismatch> {
        match self {
            Expectation::ExactSuccess { stdout } => {
                expect_exit(result, 0)?;
                let expected = trimmed(stdout.as_bytes());
                let actual = trimmed(&result.stdout);
                if actual != expected {
                    let actual = match std::str::from_utf8(actual) {
                        Ok(text) => format!("{:?}", text),
                        Err(_) => format!("invalid UTF-8 {}", lossy(actual)),
                    };
                    return Err(Mismatch::new(Field::Stdout, lossy(expected), actual));
                }
                if !result.stderr.is_empty() {
                    return Err(Mismatch::new(Field::Stderr, "empty", lossy(&result.stderr)));
                }
                Ok(())
            }
            Expectation::HandledFailure => {
                expect_exit(result, failure_code)?;
                if !result.stdout.is_empty() {
                    return Err(Mismatch::new(Field::Stdout, "empty", lossy(&result.stdout)));
                }
                if result.stderr.is_empty() {
                    return Err(Mismatch::new(Field::Stderr, "a diagnostic message", "empty"));
                }
                Ok(())
            }
            Expectation::UncheckedSuccess => expect_exit(result, 0),
        }
    }
}

fn expect_exit(result: &ExecutionResult, code: i32) -> std::result::Result<(), Mismatch> {
    if result.exit_code == code {
        Ok(())
    } else {
        Err(Mismatch::new(
            Field::ExitCode,
            code.to_string(),
            result.exit_code.to_string(),
        ))
    }
}

/// Output with leading and trailing ASCII whitespace removed
///
/// Vertical tab and form feed count as whitespace; non-ASCII spaces such
/// as NBSP do not.
pub fn trimmed(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| !is_trim_space(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&b| !is_trim_space(b))
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

fn is_trim_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn lossy(bytes: &[u8]) -> String {
    format!("{:?}", String::from_utf8_lossy(bytes))
}

/// One fully specified test case bound to a target executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub target: String,
    pub name: String,
    pub request: ExecutionRequest,
    pub expectation: Expectation,
}

/// Arguments plus expectation, not yet bound to an executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub args: Vec<String>,
    pub expectation: Expectation,
}

/// Ordered scenarios for one target binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suite {
    pub target: String,
    pub cases: Vec<Case>,
}

impl Suite {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            cases: Vec::new(),
        }
    }

    /// Expect exit 0, empty stderr and exactly `stdout` (trimmed)
    pub fn exact(self, args: &[&str], stdout: &str) -> Self {
        self.case(
            args,
            Expectation::ExactSuccess {
                stdout: stdout.to_string(),
            },
        )
    }

    /// Expect a cleanly reported argument error
    pub fn handled_failure(self, args: &[&str]) -> Self {
        self.case(args, Expectation::HandledFailure)
    }

    /// Expect exit 0 without pinning the help text
    pub fn help(self, args: &[&str]) -> Self {
        self.case(args, Expectation::UncheckedSuccess)
    }

    pub fn case(mut self, args: &[&str], expectation: Expectation) -> Self {
        self.cases.push(Case {
            args: args.iter().map(|a| a.to_string()).collect(),
            expectation,
        });
        self
    }

    /// Bind every case to the resolved executable path
    pub fn scenarios(&self, program: &Path) -> Vec<Scenario> {
        self.cases
            .iter()
            .map(|case| Scenario {
                target: self.target.clone(),
                name: scenario_name(&self.target, &case.args),
                request: ExecutionRequest::new(program, case.args.iter().cloned()),
                expectation: case.expectation.clone(),
            })
            .collect()
    }
}

/// `"<target> <args>"`, or just the target when there are no arguments
pub fn scenario_name(target: &str, args: &[String]) -> String {
    if args.is_empty() {
        target.to_string()
    } else {
        format!("{} {}", target, args.join(" "))
    }
}

/// A suite file loaded from YAML
#[derive(Deserialize, Debug)]
pub struct SuiteFile {
    /// Name of the suite
    pub name: String,
    /// Optional description of what the suite verifies
    pub description: Option<String>,
    /// Directory holding the targets, relative to the suite file
    pub examples_dir: Option<PathBuf>,
    /// Exit code the targets use for handled argument errors
    pub failure_code: Option<i32>,
    /// Targets in the order they are run
    pub targets: Vec<TargetSpec>,
}

/// Scenarios for one target in a suite file
#[derive(Deserialize, Debug)]
pub struct TargetSpec {
    /// Executable name in the examples directory, or a path
    pub target: String,
    pub scenarios: Vec<CaseSpec>,
}

/// A single scenario in a suite file
#[derive(Deserialize, Debug)]
pub struct CaseSpec {
    /// Argument tokens, as a list or a whitespace-delimited string
    #[serde(default)]
    pub args: Args,
    pub expect: Expectation,
}

/// Argument tokens as written in a suite file
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Args {
    List(Vec<String>),
    Line(String),
}

impl Default for Args {
    fn default() -> Self {
        Args::List(Vec::new())
    }
}

impl Args {
    pub fn tokens(&self) -> Vec<String> {
        match self {
            Args::List(list) => list.clone(),
            Args::Line(line) => split_args(line),
        }
    }
}

impl SuiteFile {
    /// Load and parse a suite file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::SuiteParse(e.to_string()))
    }

    /// Convert to suites in file order
    pub fn suites(&self) -> Vec<Suite> {
        self.targets
            .iter()
            .map(|spec| Suite {
                target: spec.target.clone(),
                cases: spec
                    .scenarios
                    .iter()
                    .map(|case| Case {
                        args: case.args.tokens(),
                        expectation: case.expect.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(exit_code: i32, stdout: &str, stderr: &str) -> ExecutionResult {
        ExecutionResult {
            exit_code,
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    fn exact(stdout: &str) -> Expectation {
        Expectation::ExactSuccess {
            stdout: stdout.to_string(),
        }
    }

    #[test]
    fn test_exact_success_trims_both_sides() {
        assert!(exact("3 + 0 = 3").check(&result(0, "3 + 0 = 3\n", ""), 1).is_ok());
        assert!(exact("  3 + 0 = 3\n").check(&result(0, "3 + 0 = 3", ""), 1).is_ok());
    }

    #[test]
    fn test_exact_success_keeps_inner_newlines() {
        assert!(exact("a\nb\n").check(&result(0, "a\nb\n", ""), 1).is_ok());
        let mismatch = exact("a\nb\n").check(&result(0, "a b\n", ""), 1).unwrap_err();
        assert_eq!(mismatch.field, Field::Stdout);
    }

    #[test]
    fn test_exact_success_blank_output() {
        assert!(exact("\n").check(&result(0, "\n", ""), 1).is_ok());
        assert!(exact("\n").check(&result(0, "", ""), 1).is_ok());
    }

    #[test]
    fn test_exact_success_checks_exit_code_first() {
        let mismatch = exact("0 0").check(&result(2, "1 1", "boom"), 1).unwrap_err();
        assert_eq!(mismatch.field, Field::ExitCode);
        assert_eq!(mismatch.expected, "0");
        assert_eq!(mismatch.actual, "2");
    }

    #[test]
    fn test_exact_success_checks_stdout_before_stderr() {
        let mismatch = exact("0 0").check(&result(0, "1 1", "warn"), 1).unwrap_err();
        assert_eq!(mismatch.field, Field::Stdout);
    }

    #[test]
    fn test_exact_success_requires_empty_stderr() {
        let mismatch = exact("0 0").check(&result(0, "0 0", "warn"), 1).unwrap_err();
        assert_eq!(mismatch.field, Field::Stderr);
    }

    #[test]
    fn test_exact_success_rejects_invalid_utf8() {
        let res = ExecutionResult {
            exit_code: 0,
            stdout: vec![0xff, 0xfe],
            stderr: Vec::new(),
        };
        let mismatch = exact("x").check(&res, 1).unwrap_err();
        assert_eq!(mismatch.field, Field::Stdout);
        assert!(mismatch.actual.contains("invalid UTF-8"));
    }

    #[test]
    fn test_handled_failure() {
        let expect = Expectation::HandledFailure;
        assert!(expect.check(&result(1, "", "Error: bad value"), 1).is_ok());

        let mismatch = expect.check(&result(0, "", "x"), 1).unwrap_err();
        assert_eq!(mismatch.field, Field::ExitCode);

        let mismatch = expect.check(&result(1, "partial", "x"), 1).unwrap_err();
        assert_eq!(mismatch.field, Field::Stdout);

        let mismatch = expect.check(&result(1, "", ""), 1).unwrap_err();
        assert_eq!(mismatch.field, Field::Stderr);
    }

    #[test]
    fn test_handled_failure_uses_configured_code() {
        let expect = Expectation::HandledFailure;
        assert!(expect.check(&result(2, "", "usage"), 2).is_ok());
        assert!(expect.check(&result(1, "", "usage"), 2).is_err());
    }

    #[test]
    fn test_unchecked_success_ignores_output() {
        let expect = Expectation::UncheckedSuccess;
        assert!(expect.check(&result(0, "Usage: ...", "note"), 1).is_ok());
        assert_eq!(
            expect.check(&result(1, "", ""), 1).unwrap_err().field,
            Field::ExitCode
        );
    }

    #[test]
    fn test_exact_success_keeps_unicode_spaces() {
        let mismatch = exact("3 + 0 = 3")
            .check(&result(0, "3 + 0 = 3\u{a0}\u{2003}\n", ""), 1)
            .unwrap_err();
        assert_eq!(mismatch.field, Field::Stdout);

        let mismatch = exact("3 + 0 = 3")
            .check(&result(0, "\u{a0}3 + 0 = 3", ""), 1)
            .unwrap_err();
        assert_eq!(mismatch.field, Field::Stdout);
    }

    #[test]
    fn test_trimmed_strips_ascii_whitespace_only() {
        assert_eq!(trimmed(b" \t\r\n\x0b\x0cb a\n\n"), b"b a");
        assert_eq!(trimmed(b"a\nb"), b"a\nb");
        assert_eq!(trimmed(b" \n\t "), b"");
        assert_eq!(trimmed(b""), b"");
        assert_eq!(
            trimmed("x\u{a0}".as_bytes()),
            "x\u{a0}".as_bytes()
        );
    }

    #[test]
    fn test_trimmed_is_idempotent() {
        let samples: [&[u8]; 6] = [
            b"",
            b"  a b \n",
            b"\n\nx\ny\n\t",
            b"\x0b\x0c",
            "z\u{2003}\n".as_bytes(),
            &[0xff, b' ', 0xfe, b'\n'],
        ];
        for s in samples {
            assert_eq!(trimmed(trimmed(s)), trimmed(s));
        }
    }

    #[test]
    fn test_check_agrees_on_pretrimmed_output() {
        let expect = exact("b\na\n");
        for stdout in ["\n b\na \n\n", "b\na", "b a\n", "b\na\u{a0}\n"] {
            let raw = result(0, stdout, "");
            let pre = ExecutionResult {
                stdout: trimmed(&raw.stdout).to_vec(),
                ..raw.clone()
            };
            assert_eq!(expect.check(&raw, 1), expect.check(&pre, 1));
        }
    }

    #[test]
    fn test_suite_builder_binds_program() {
        let suite = Suite::new("basic")
            .exact(&[], "0 + 0 = 0")
            .handled_failure(&["-x", "test"])
            .help(&["-h"]);
        let scenarios = suite.scenarios(Path::new("/ex/basic"));

        assert_eq!(scenarios.len(), 3);
        assert_eq!(scenarios[0].name, "basic");
        assert_eq!(scenarios[1].name, "basic -x test");
        assert_eq!(scenarios[1].request.program, PathBuf::from("/ex/basic"));
        assert_eq!(scenarios[1].request.args, vec!["-x", "test"]);
        assert_eq!(scenarios[2].expectation, Expectation::UncheckedSuccess);
    }

    #[test]
    fn test_parse_suite_file() {
        let yaml = r#"
name: adder
description: Integer options with defaults
examples_dir: build/examples
failure_code: 2
targets:
  - target: basic
    scenarios:
      - expect:
          kind: exact_success
          stdout: "0 + 0 = 0"
      - args: "-x 3 -y 4"
        expect:
          kind: exact_success
          stdout: "3 + 4 = 7"
      - args: ["-x", "test"]
        expect:
          kind: handled_failure
      - args: -h
        expect:
          kind: unchecked_success
"#;
        let file = SuiteFile::parse(yaml).unwrap();
        assert_eq!(file.name, "adder");
        assert_eq!(file.failure_code, Some(2));
        assert_eq!(file.examples_dir, Some(PathBuf::from("build/examples")));

        let suites = file.suites();
        assert_eq!(suites.len(), 1);
        let cases = &suites[0].cases;
        assert_eq!(cases.len(), 4);
        assert!(cases[0].args.is_empty());
        assert_eq!(cases[1].args, vec!["-x", "3", "-y", "4"]);
        assert_eq!(cases[2].expectation, Expectation::HandledFailure);
        assert_eq!(cases[3].args, vec!["-h"]);
    }

    #[test]
    fn test_parse_suite_file_rejects_unknown_kind() {
        let yaml = r#"
name: broken
targets:
  - target: basic
    scenarios:
      - expect:
          kind: maybe
"#;
        assert!(matches!(
            SuiteFile::parse(yaml).unwrap_err(),
            Error::SuiteParse(_)
        ));
    }
}
