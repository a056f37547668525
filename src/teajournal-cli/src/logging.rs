//! Tracing subscriber setup.
//!
//! The journal owns the terminal while it runs, so interactive sessions log
//! to a daily-rolling file under the data directory. Subcommands log to
//! stderr. `RUST_LOG` always wins over the configured level.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::LogLevel;

/// Prefix of the rolling log files.
pub const LOG_FILE_PREFIX: &str = "teajournal.log";

const JOURNAL_CRATES: [&str; 3] = [
    "teajournal_cli",
    "teajournal_storage",
    "teajournal_tui_components",
];

/// Filter directives: `level` for the journal crates, warnings elsewhere.
pub fn filter_directives(level: LogLevel) -> String {
    let mut directives = String::from("warn");
    for name in JOURNAL_CRATES {
        directives.push_str(&format!(",{name}={}", level.as_filter_str()));
    }
    directives
}

fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directives(level)))
}

/// Log to `logs_dir/teajournal.log.YYYY-MM-DD`.
///
/// Keep the returned guard alive until exit so buffered lines get flushed.
pub fn init_file_logging(logs_dir: &Path, level: LogLevel) -> Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(file_layer)
        .try_init()
        .context("Failed to initialize file logging")?;

    Ok(guard)
}

/// Log to stderr, for subcommands.
pub fn init_stderr_logging(level: LogLevel) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filter_directives_scope_journal_crates() {
        assert_eq!(
            filter_directives(LogLevel::Debug),
            "warn,teajournal_cli=debug,teajournal_storage=debug,teajournal_tui_components=debug"
        );
    }

    #[test]
    fn test_filter_directives_parse() {
        for level in [LogLevel::Error, LogLevel::Info, LogLevel::Trace] {
            assert!(EnvFilter::try_new(filter_directives(level)).is_ok());
        }
    }
}
