//! CLI argument structures and parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use teajournal_storage::ChoiceKind;

use super::styles::{AFTER_HELP, get_styles};
use crate::labels::Language;

/// Environment variable for the log level.
pub const LOG_LEVEL_ENV: &str = "TEAJOURNAL_LOG_LEVEL";

/// Log verbosity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors
    Warn,
    /// Show informational messages, warnings, and errors (default)
    #[default]
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Tea Journal - keep track of the teas you drink
///
/// Without a subcommand, opens the interactive journal.
#[derive(Debug, Parser)]
#[command(name = "teajournal")]
#[command(author, version)]
#[command(about = "Tea Journal - keep track of the teas you drink", long_about = None)]
#[command(styles = get_styles(), after_help = AFTER_HELP)]
pub struct Cli {
    /// Directory holding the store and logs
    #[arg(long = "data-dir", global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path to config.toml
    #[arg(long = "config", short = 'c', global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Interface language, overrides the saved choice
    #[arg(long = "lang", short = 'l', global = true, value_enum)]
    pub lang: Option<Language>,

    /// Log verbosity
    #[arg(long = "log-level", global = true, value_enum, env = LOG_LEVEL_ENV)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Non-interactive commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the saved teas
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Print the known types, brands or ingredients
    Choices(ChoicesArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ChoicesArgs {
    /// Which list to print
    #[arg(value_enum)]
    pub kind: ChoiceArg,
}

/// Choice list selector for `choices`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ChoiceArg {
    Types,
    Brands,
    Ingredients,
}

impl From<ChoiceArg> for ChoiceKind {
    fn from(arg: ChoiceArg) -> Self {
        match arg {
            ChoiceArg::Types => ChoiceKind::Types,
            ChoiceArg::Brands => ChoiceKind::Brands,
            ChoiceArg::Ingredients => ChoiceKind::Ingredients,
        }
    }
}
