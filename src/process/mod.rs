//! Target process execution
//!
//! Launches a target executable with an explicit argument vector and
//! captures its exit code, stdout and stderr as raw bytes. A non-zero
//! exit is data, not an error; only a failure to start the process is.

mod launcher;

pub use launcher::{Launcher, ProcessLauncher};

use std::path::PathBuf;

/// A program plus the exact argument tokens to pass to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl ExecutionRequest {
    pub fn new<I, S>(program: impl Into<PathBuf>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a request from a whitespace-delimited command line
    ///
    /// No quoting or escaping: a value containing a space cannot be
    /// expressed this way. Use [`ExecutionRequest::new`] for that.
    pub fn from_command_line(program: impl Into<PathBuf>, line: &str) -> Self {
        Self::new(program, split_args(line))
    }
}

/// Captured outcome of one finished process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit code; the negated signal number if the process was killed
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Split a command line into tokens on whitespace
pub fn split_args(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_args() {
        assert_eq!(split_args("-x 3 -y 4"), vec!["-x", "3", "-y", "4"]);
        assert_eq!(split_args("  b   a\t-os "), vec!["b", "a", "-os"]);
    }

    #[test]
    fn test_split_empty_line() {
        assert!(split_args("").is_empty());
        assert!(split_args("   ").is_empty());
    }

    #[test]
    fn test_request_from_command_line() {
        let request = ExecutionRequest::from_command_line("/bin/basic", "-x -3 -y 3");
        assert_eq!(request.program, PathBuf::from("/bin/basic"));
        assert_eq!(request.args, vec!["-x", "-3", "-y", "3"]);
    }

    #[test]
    fn test_request_keeps_tokens_with_spaces() {
        let request = ExecutionRequest::new("/bin/echo", ["hello world"]);
        assert_eq!(request.args, vec!["hello world"]);
    }
}
