//! Tea Journal Storage - local persistence for the tea journal.
//!
//! The journal keeps everything in a single key/value file, mirroring the
//! way a browser page would use local storage:
//!
//! - **Windows**: `%APPDATA%\TeaJournal\store.json`
//! - **macOS**: `~/Library/Application Support/TeaJournal/store.json`
//! - **Linux**: `~/.local/share/TeaJournal/store.json`
//!
//! # Features
//!
//! - String values addressed by key ([`ListStore`])
//! - Tolerant list reads: missing or malformed values read as empty lists
//! - Tea records and the "available choices" lists that feed autocomplete
//!   ([`TeaJournal`])
//!
//! # Usage
//!
//! ```rust,no_run
//! use teajournal_storage::{JournalPaths, ListStore, TeaEntry, TeaJournal};
//!
//! fn main() -> teajournal_storage::Result<()> {
//!     let paths = JournalPaths::new()?;
//!     paths.ensure_dirs()?;
//!
//!     let mut journal = TeaJournal::new(ListStore::open(&paths.store_file)?);
//!     journal.save_tea(TeaEntry::new("Sencha", "Green", "Kusmi", vec!["Menthe".into()], ""))?;
//!
//!     for tea in journal.teas() {
//!         println!("{} ({})", tea.name, tea.kind);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod journal;
pub mod keys;
pub mod paths;
pub mod store;

// Re-export main types at crate root
pub use error::{Result, StorageError};
pub use journal::{ChoiceKind, TeaEntry, TeaJournal};
pub use paths::{JournalPaths, journal_config_dir, journal_data_dir};
pub use store::{ListSource, ListStore};
