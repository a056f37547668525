//! Configuration loading.
//!
//! The journal reads an optional `config.toml`:
//!
//! ```toml
//! site_name = "My Tea Journal"
//! welcome = "Brew, sip, write it down."
//! default_language = "fr"
//! log_level = "debug"
//! data_dir = "/home/me/tea"
//! max_suggestions = 8
//! ```
//!
//! Lookup order for the file: `--config`, then `TEAJOURNAL_CONFIG`, then
//! `config.toml` in the journal config directory. A missing file means
//! defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use teajournal_storage::paths::CONFIG_FILE;
use teajournal_storage::journal_config_dir;

/// Environment variable for a custom config file path.
pub const CONFIG_ENV: &str = "TEAJOURNAL_CONFIG";

/// Parsed `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JournalConfig {
    /// Title shown in the header.
    pub site_name: String,
    /// Welcome line under the title. Empty means the localized default.
    pub welcome: String,
    /// Language used until the user picks one (`en` or `fr`).
    pub default_language: String,
    /// Log level for the log file (error, warn, info, debug, trace).
    pub log_level: Option<String>,
    /// Overrides the platform data directory.
    pub data_dir: Option<PathBuf>,
    /// Suggestion rows shown at once in the ingredients picker.
    pub max_suggestions: usize,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            site_name: "Tea Journal".to_string(),
            welcome: String::new(),
            default_language: "en".to_string(),
            log_level: None,
            data_dir: None,
            max_suggestions: 5,
        }
    }
}

/// Where the config file is looked up, without touching the disk.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Ok(val) = std::env::var(CONFIG_ENV)
        && !val.is_empty()
    {
        debug!(path = %val, "Using TEAJOURNAL_CONFIG");
        return Ok(PathBuf::from(val));
    }
    Ok(journal_config_dir()?.join(CONFIG_FILE))
}

/// Load the configuration from `path`; a missing file yields defaults.
pub fn load_config_from_path(path: &Path) -> Result<JournalConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file not found, using defaults");
        return Ok(JournalConfig::default());
    }

    debug!(path = %path.display(), "Loading config file");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Resolve the config path and load it.
pub fn load_config(explicit: Option<&Path>) -> Result<JournalConfig> {
    let path = config_path(explicit)?;
    load_config_from_path(&path)
}

/// Parse TOML config content.
pub fn parse_config(content: &str) -> Result<JournalConfig> {
    let mut config: JournalConfig = toml::from_str(content)?;
    if config.max_suggestions == 0 {
        config.max_suggestions = JournalConfig::default().max_suggestions;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), JournalConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config("site_name = \"Chez Moi\"\nmax_suggestions = 8\n").unwrap();
        assert_eq!(config.site_name, "Chez Moi");
        assert_eq!(config.max_suggestions, 8);
        assert_eq!(config.default_language, "en");
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_zero_suggestions_falls_back() {
        let config = parse_config("max_suggestions = 0").unwrap();
        assert_eq!(config.max_suggestions, 5);
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        assert!(parse_config("colour = \"green\"").is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = load_config_from_path(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, JournalConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_language = \"fr\"\ndata_dir = \"/tmp/tea\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.default_language, "fr");
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/tea")));
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "site_name = ").unwrap();

        let err = load_config_from_path(&path).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = config_path(Some(Path::new("/etc/tea.toml"))).unwrap();
        assert_eq!(path, PathBuf::from("/etc/tea.toml"));
    }
}
