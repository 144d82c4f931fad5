//! Configuration file reading and writing.
//!
//! Files are read with the JSON5 parser, which also accepts plain JSON, and
//! written back as pretty-printed JSON.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./kancli.json5` or `./kancli.json`
//! 2. User: `<config_dir>/kancli/config.json5` or `<config_dir>/kancli/config.json`
//!
//! `<config_dir>` is `~/.config` on Linux; see [`dirs::config_dir`].

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Local configuration file names, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["kancli.json5", "kancli.json"];

/// Directory name used under the platform config and data directories.
const APP_DIR: &str = "kancli";

/// User configuration file names, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Default log file name.
const LOG_FILE_NAME: &str = "kancli.log";

/// Finds the configuration file path.
///
/// Returns `None` if no configuration file exists in any searched location.
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_in(Path::new("."), LOCAL_FILE_NAMES)
        .or_else(|| dirs::config_dir().and_then(|d| find_in(&d.join(APP_DIR), USER_FILE_NAMES)))
}

/// Returns the first of `names` that exists in `dir`.
fn find_in(dir: &Path, names: &[&str]) -> Option<PathBuf> {
    names.iter().map(|name| dir.join(name)).find(|p| p.exists())
}

/// Returns the user configuration directory, e.g. `~/.config/kancli/`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the default user configuration file path.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join("config.json5"))
}

/// Returns the default log file path, e.g. `~/.local/share/kancli/kancli.log`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_log_path() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR).join(LOG_FILE_NAME))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed into `T`.
///
/// # Examples
///
/// ```no_run
/// use kancli_config::persistence::read_config_file;
/// use kancli_config::Config;
///
/// # fn main() -> kancli_config::Result<()> {
/// let config: Config = read_config_file("kancli.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a value to a file as pretty-printed JSON.
///
/// Parent directories are created when missing.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written or the value
/// cannot be serialized.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        value: i32,
    }

    #[test]
    fn read_json5_with_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.json5");
        std::fs::write(
            &path,
            r#"
            {
                // comment
                name: "board",
                value: 3,
            }
            "#,
        )
        .unwrap();

        let sample: Sample = read_config_file(&path).unwrap();
        assert_eq!(sample.name, "board");
        assert_eq!(sample.value, 3);
    }

    #[test]
    fn read_missing_file_reports_path() {
        let err = read_config_file::<Sample>("/nonexistent/kancli.json").unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
        assert!(err.to_string().contains("/nonexistent/kancli.json"));
    }

    #[test]
    fn read_invalid_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = read_config_file::<Sample>(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseJson5(_)));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("config.json");

        let sample = Sample {
            name: "x".to_string(),
            value: 1,
        };
        write_config_file(&path, &sample).unwrap();

        let loaded: Sample = read_config_file(&path).unwrap();
        assert_eq!(loaded, sample);
    }

    #[test]
    fn find_in_respects_priority() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("kancli.json"), "{}").unwrap();
        assert_eq!(
            find_in(dir.path(), LOCAL_FILE_NAMES),
            Some(dir.path().join("kancli.json"))
        );

        std::fs::write(dir.path().join("kancli.json5"), "{}").unwrap();
        assert_eq!(
            find_in(dir.path(), LOCAL_FILE_NAMES),
            Some(dir.path().join("kancli.json5"))
        );
    }

    #[test]
    fn find_in_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert_eq!(find_in(dir.path(), USER_FILE_NAMES), None);
    }

    #[test]
    fn default_log_path_ends_with_file_name() {
        // Environments without a home directory have no data dir.
        if dirs::data_dir().is_some() {
            let path = default_log_path().unwrap();
            assert!(path.ends_with(Path::new(APP_DIR).join(LOG_FILE_NAME)));
        }
    }
}
