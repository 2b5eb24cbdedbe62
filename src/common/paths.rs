//! Configuration and examples directory paths

use std::path::{Path, PathBuf};

/// Application name used for platform directories
const APP_NAME: &str = "argcheck";

/// Directory (next to the harness executable) holding the target binaries
const EXAMPLES_DIR_NAME: &str = "examples";

/// Get the configuration directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/argcheck/`
/// - macOS: `~/Library/Application Support/argcheck/`
/// - Windows: `%APPDATA%\argcheck\`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Default examples directory: `examples/` beside the running executable
pub fn default_examples_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(|dir| dir.join(EXAMPLES_DIR_NAME))
}

/// Resolve `path` against `base` unless it is already absolute
pub fn resolve_relative(base: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_toml() {
        if let Some(path) = config_path() {
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("config.toml"));
        }
    }

    #[test]
    fn test_default_examples_dir_ends_in_examples() {
        let dir = default_examples_dir().expect("current exe has a parent");
        assert!(dir.ends_with("examples"));
    }

    #[test]
    fn test_resolve_relative() {
        let base = Path::new("/suites");
        assert_eq!(
            resolve_relative(base, Path::new("bin")),
            PathBuf::from("/suites/bin")
        );
        assert_eq!(
            resolve_relative(base, Path::new("/opt/bin")),
            PathBuf::from("/opt/bin")
        );
    }
}
