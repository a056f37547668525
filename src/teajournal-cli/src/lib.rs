//! Tea Journal CLI library.
//!
//! - `cli` - argument parsing and command dispatch
//! - `app` - the interactive journal (form, list, terminal handling)
//! - `config` - `config.toml` loading
//! - `labels` - English and French interface text
//! - `logging` - tracing subscriber setup

pub mod app;
pub mod cli;
pub mod config;
pub mod labels;
pub mod logging;

pub use cli::{Cli, Commands, LogLevel, dispatch_command};
