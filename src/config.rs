//! Environment-backed configuration.
//!
//! The only setting is an optional API key read from the `API_KEY` variable.
//! [`Config::load`] searches upward from the working directory for a `.env`
//! file so it works no matter where the process was started from; values
//! already present in the process environment take precedence over the file.

use std::path::{Path, PathBuf};

use crate::error::DataResult;

/// Runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// API key from the `API_KEY` environment variable, if set.
    pub api_key: Option<String>,
}

impl Config {
    /// Load configuration from the process environment, falling back to the
    /// nearest `.env` file (searching upward from the working directory).
    pub fn load() -> Self {
        if let Some(path) = find_dotenv() {
            // Existing process variables win over file entries.
            let _ = dotenvy::from_path(&path);
        }
        Self {
            api_key: std::env::var("API_KEY").ok(),
        }
    }

    /// Load configuration from a specific env-definition file.
    ///
    /// Reads the file directly without touching the process environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> DataResult<Self> {
        let mut api_key = None;
        for item in dotenvy::from_path_iter(path.as_ref())? {
            let (key, value) = item?;
            if key == "API_KEY" {
                api_key = Some(value);
                break;
            }
        }
        Ok(Self { api_key })
    }
}

/// Find the nearest `.env` by walking from the working directory toward the root.
fn find_dotenv() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(".env"))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn from_env_file_reads_api_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "# local secrets").unwrap();
        writeln!(f, "API_KEY=abc123").unwrap();

        let cfg = Config::from_env_file(&path).unwrap();
        assert_eq!(cfg.api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn from_env_file_without_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "OTHER=1\n").unwrap();

        let cfg = Config::from_env_file(&path).unwrap();
        assert_eq!(cfg.api_key, None);
    }

    #[test]
    fn from_env_file_errors_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_env_file(dir.path().join("absent.env")).unwrap_err();
        assert!(err.to_string().contains("env error"));
    }
}
