//! Error types for the acceptance harness
//!
//! Every error is fatal to a run. Messages name the scenario and the
//! offending field so a failed run can be diagnosed from the last line.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    // === Process Errors ===
    #[error("Failed to launch '{}': {source}", .program.display())]
    Launch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    // === Assertion Errors ===
    #[error("{0}")]
    Assertion(AssertionFailure),

    // === Registry Errors ===
    #[error("Unknown target '{0}'. Use 'argcheck list' to see registered targets")]
    UnknownTarget(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    #[error("Invalid suite file: {0}")]
    SuiteParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Internal Errors ===
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a launch error for a program that could not be started
    pub fn launch(program: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Launch {
            program: program.into(),
            source,
        }
    }

    /// Create a file read error
    pub fn file_read(path: &std::path::Path, error: impl fmt::Display) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }

    /// Whether this error came from a failed expectation rather than the harness itself
    pub fn is_assertion(&self) -> bool {
        matches!(self, Self::Assertion(_))
    }
}

/// Observable field of a finished process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ExitCode,
    Stdout,
    Stderr,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::ExitCode => write!(f, "exit code"),
            Field::Stdout => write!(f, "stdout"),
            Field::Stderr => write!(f, "stderr"),
        }
    }
}

/// A scenario whose captured result did not match its expectation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    pub scenario: String,
    pub field: Field,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scenario '{}' failed on {}. Expected: {}, got: {}",
            self.scenario, self.field, self.expected, self.actual
        )
    }
}

impl From<AssertionFailure> for Error {
    fn from(failure: AssertionFailure) -> Self {
        Self::Assertion(failure)
    }
}
