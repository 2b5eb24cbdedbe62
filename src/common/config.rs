//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::paths::config_path;
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Harness settings
    #[serde(default)]
    pub harness: HarnessConfig,
}

/// Harness settings
#[derive(Debug, Deserialize)]
pub struct HarnessConfig {
    /// Directory holding the target binaries
    #[serde(default)]
    pub examples_dir: Option<PathBuf>,

    /// Exit code the targets use for a handled argument error
    #[serde(default = "default_failure_code")]
    pub failure_code: i32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            examples_dir: None,
            failure_code: default_failure_code(),
        }
    }
}

/// Exit code for a recognized argument error
pub const DEFAULT_FAILURE_CODE: i32 = 1;

fn default_failure_code() -> i32 {
    DEFAULT_FAILURE_CODE
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| super::Error::file_read(path, e))?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| super::Error::ConfigParse(e.to_string()))
    }
}
