//! Credential loading for vidf.
//!
//! Reads the YouTube API key from a dotenv-style file, by default
//! `~/.config/fabric/.env`. The process environment is never modified.
//! Unquoted and double-quoted values go through dotenv `${VAR}` substitution,
//! which resolves from the process environment first, then from keys defined
//! earlier in the file; single-quoted values are taken literally.

use crate::error::ConfigError;
use dirs::home_dir;
use std::path::{Path, PathBuf};

/// Key holding the YouTube Data API v3 key.
pub const API_KEY_VAR: &str = "YOUTUBE_API_KEY";

/// Loaded credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// YouTube Data API v3 key, never empty
    pub api_key: String,
}

impl Config {
    /// Load credentials from a `.env` file.
    ///
    /// # Arguments
    /// * `path` - Optional path to the file. If None, uses the default location.
    ///
    /// # Returns
    /// * `Result<Config, ConfigError>` - Loaded credentials or error
    ///
    /// # Details
    /// Parses `KEY=VALUE` lines (dotenv syntax, comments and quoting allowed).
    /// If the key is repeated the last binding wins. An absent, empty or
    /// whitespace-only key is an error. `${VAR}` references are expanded
    /// unless the value is single-quoted.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        log::debug!("Reading credentials from {}", config_path.display());

        let read_err = |source: dotenvy::Error| ConfigError::Read {
            path: config_path.clone(),
            source,
        };

        let mut api_key = None;
        for entry in dotenvy::from_path_iter(&config_path).map_err(read_err)? {
            let (key, value) = entry.map_err(read_err)?;
            if key == API_KEY_VAR {
                api_key = Some(value);
            }
        }

        match api_key {
            Some(key) if !key.trim().is_empty() => Ok(Self { api_key: key }),
            _ => Err(ConfigError::MissingApiKey { path: config_path }),
        }
    }

    /// Get default credential file path.
    ///
    /// # Returns
    /// * `Result<PathBuf, ConfigError>` - `~/.config/fabric/.env` or error
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let home = home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
        Ok(home.join(".config").join("fabric").join(".env"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_env(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, content).unwrap();
        (temp_dir, path)
    }

    #[test]
    fn test_load_returns_exact_key() {
        let (_dir, path) = write_env("YOUTUBE_API_KEY=AIzaTestKey123\n");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.api_key, "AIzaTestKey123");
    }

    #[test]
    fn test_load_ignores_other_keys_and_comments() {
        let (_dir, path) = write_env(
            "# fabric settings\nOPENAI_API_KEY=sk-other\nYOUTUBE_API_KEY=\"quoted-key\"\nDEFAULT_MODEL=gpt\n",
        );
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.api_key, "quoted-key");
    }

    #[test]
    fn test_load_last_binding_wins() {
        let (_dir, path) = write_env("YOUTUBE_API_KEY=first\nYOUTUBE_API_KEY=second\n");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.api_key, "second");
    }

    #[test]
    fn test_load_missing_key() {
        let (_dir, path) = write_env("OPENAI_API_KEY=sk-other\n");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey { .. }));
    }

    #[test]
    fn test_load_empty_key() {
        let (_dir, path) = write_env("YOUTUBE_API_KEY=\n");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.env");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("nope.env"));
    }

    #[test]
    fn test_load_expands_earlier_file_keys() {
        let (_dir, path) = write_env(
            "VIDF_TEST_KEY_PREFIX=AIza\nYOUTUBE_API_KEY=${VIDF_TEST_KEY_PREFIX}Rest\n",
        );
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.api_key, "AIzaRest");
    }

    #[test]
    fn test_load_expands_process_env() {
        let Ok(path_var) = std::env::var("PATH") else {
            return;
        };
        let (_dir, path) = write_env("YOUTUBE_API_KEY=abc${PATH}def\n");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.api_key, format!("abc{}def", path_var));
    }

    #[test]
    fn test_load_single_quoted_is_literal() {
        let (_dir, path) = write_env("YOUTUBE_API_KEY='abc${PATH}def'\n");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.api_key, "abc${PATH}def");
    }

    #[test]
    fn test_default_config_path_layout() {
        if let Ok(path) = Config::default_config_path() {
            assert!(path.ends_with(".config/fabric/.env"));
        }
    }
}
