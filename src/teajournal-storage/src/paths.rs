//! OS-aware path detection for journal storage.
//!
//! - **Windows**: `%APPDATA%\TeaJournal\`
//! - **macOS**: `~/Library/Application Support/TeaJournal/`
//! - **Linux**: `~/.local/share/TeaJournal/`
//!
//! Both the data and config locations can be redirected with
//! `TEAJOURNAL_DATA_DIR` and `TEAJOURNAL_CONFIG_DIR`.

use std::path::PathBuf;
use tracing::debug;

use crate::error::{Result, StorageError};

/// Application name used for storage directories.
pub const APP_NAME: &str = "TeaJournal";

/// Key/value store file name.
pub const STORE_FILE: &str = "store.json";
pub const LOGS_DIR: &str = "logs";
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "TEAJOURNAL_DATA_DIR";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "TEAJOURNAL_CONFIG_DIR";

/// Journal storage paths container.
#[derive(Debug, Clone)]
pub struct JournalPaths {
    /// Root data directory (platform-specific).
    pub data_dir: PathBuf,
    /// Key/value store file.
    pub store_file: PathBuf,
    /// Log files directory.
    pub logs_dir: PathBuf,
}

impl JournalPaths {
    /// Create JournalPaths with automatic OS detection.
    pub fn new() -> Result<Self> {
        let data_dir = journal_data_dir()?;
        Ok(Self::from_root(data_dir))
    }

    /// Create JournalPaths from a custom root directory.
    pub fn from_root(data_dir: PathBuf) -> Self {
        Self {
            store_file: data_dir.join(STORE_FILE),
            logs_dir: data_dir.join(LOGS_DIR),
            data_dir,
        }
    }

    /// Ensure all directories exist.
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.logs_dir)?;
        debug!(data_dir = %self.data_dir.display(), "Journal storage directories initialized");
        Ok(())
    }
}

/// Get the journal data directory based on the current OS.
pub fn journal_data_dir() -> Result<PathBuf> {
    if let Ok(val) = std::env::var(DATA_DIR_ENV)
        && !val.is_empty()
    {
        let path = PathBuf::from(val);
        debug!(path = %path.display(), "Using TEAJOURNAL_DATA_DIR override");
        return Ok(path);
    }

    let base = dirs::data_dir().ok_or(StorageError::HomeDirNotFound)?;
    Ok(base.join(APP_NAME))
}

/// Get the journal config directory based on the current OS.
///
/// Returns:
/// - **Windows**: `%APPDATA%\TeaJournal\`
/// - **macOS**: `~/Library/Application Support/TeaJournal/`
/// - **Linux**: `~/.config/TeaJournal/`
pub fn journal_config_dir() -> Result<PathBuf> {
    if let Ok(val) = std::env::var(CONFIG_DIR_ENV)
        && !val.is_empty()
    {
        let path = PathBuf::from(val);
        debug!(path = %path.display(), "Using TEAJOURNAL_CONFIG_DIR override");
        return Ok(path);
    }

    let base = dirs::config_dir().ok_or(StorageError::HomeDirNotFound)?;
    Ok(base.join(APP_NAME))
}
