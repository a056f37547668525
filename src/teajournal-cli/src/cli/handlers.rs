//! Command dispatch and execution handlers.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use teajournal_storage::paths::DATA_DIR_ENV;
use teajournal_storage::{ChoiceKind, JournalPaths, ListStore, TeaEntry, TeaJournal};

use super::args::*;
use crate::app::terminal::{JournalTerminal, TerminalOptions};
use crate::app::{self, App};
use crate::config::{JournalConfig, load_config};
use crate::labels::{LabelSet, Language};
use crate::logging::{init_file_logging, init_stderr_logging};

/// Dispatch a CLI command to its handler.
pub fn dispatch_command(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let level = resolve_log_level(cli.log_level, &config);
    let paths = resolve_paths(cli.data_dir.as_deref(), &config)?;

    match cli.command {
        None => run_tui(&paths, config, cli.lang, level),
        Some(Commands::List(args)) => {
            init_stderr_logging(level)?;
            run_list(&paths, &args)
        }
        Some(Commands::Choices(args)) => {
            init_stderr_logging(level)?;
            run_choices(&paths, args.kind.into())
        }
    }
}

/// `--log-level` (or its env var), then the config file, then the default.
pub fn resolve_log_level(cli: Option<LogLevel>, config: &JournalConfig) -> LogLevel {
    cli.or_else(|| config.log_level.as_deref().and_then(LogLevel::from_str_loose))
        .unwrap_or_default()
}

/// `--data-dir`, then `TEAJOURNAL_DATA_DIR`, then `data_dir` from the
/// config file, then the platform data directory.
pub fn resolve_paths(explicit: Option<&Path>, config: &JournalConfig) -> Result<JournalPaths> {
    if let Some(dir) = explicit {
        return Ok(JournalPaths::from_root(dir.to_path_buf()));
    }
    let env_set = std::env::var_os(DATA_DIR_ENV).is_some_and(|v| !v.is_empty());
    if !env_set && let Some(dir) = &config.data_dir {
        return Ok(JournalPaths::from_root(dir.clone()));
    }
    JournalPaths::new().context("Failed to locate the data directory")
}

/// `--lang`, then the saved choice, then `default_language`, then English.
pub fn resolve_language(
    cli: Option<Language>,
    store: &ListStore,
    config: &JournalConfig,
) -> Language {
    if let Some(language) = cli {
        return language;
    }
    let fallback = Language::from_code(&config.default_language).unwrap_or_default();
    Language::from_store(store, fallback)
}

fn open_journal(paths: &JournalPaths) -> Result<TeaJournal> {
    let store = ListStore::open(&paths.store_file)
        .with_context(|| format!("Failed to open {}", paths.store_file.display()))?;
    Ok(TeaJournal::new(store))
}

/// Run the interactive journal.
fn run_tui(
    paths: &JournalPaths,
    config: JournalConfig,
    lang: Option<Language>,
    level: LogLevel,
) -> Result<()> {
    if !io::stdout().is_terminal() {
        bail!("The journal needs an interactive terminal. Use `teajournal list` to print saved teas.");
    }

    paths.ensure_dirs()?;
    let _log_guard = init_file_logging(&paths.logs_dir, level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        data_dir = %paths.data_dir.display(),
        "Starting tea journal"
    );

    let journal = open_journal(paths)?;
    let language = resolve_language(lang, journal.store(), &config);
    let label_set = LabelSet::embedded()?;
    debug!(language = language.code(), "Language resolved");

    let title = config.site_name.clone();
    let mut app = App::new(journal, config, label_set, language);
    let mut terminal = JournalTerminal::new(TerminalOptions::new().title(title))?;
    app::run(&mut app, &mut terminal)
}

/// One line per tea for `list`.
pub fn format_tea_line(tea: &TeaEntry) -> String {
    let mut line = format!("{} ({})", tea.name, tea.kind);
    if !tea.brand.is_empty() {
        line.push_str(&format!(" - {}", tea.brand));
    }
    if !tea.ingredients.is_empty() {
        line.push_str(&format!(": {}", tea.ingredients.join(", ")));
    }
    line
}

fn run_list(paths: &JournalPaths, args: &ListArgs) -> Result<()> {
    let teas = open_journal(paths)?.teas();
    let mut out = io::stdout().lock();

    if args.json {
        serde_json::to_writer_pretty(&mut out, &teas)?;
        writeln!(out)?;
        return Ok(());
    }

    if teas.is_empty() {
        writeln!(out, "No tea saved yet.")?;
        return Ok(());
    }
    for tea in &teas {
        writeln!(out, "{}", format_tea_line(tea))?;
        if !tea.comment.is_empty() {
            writeln!(out, "    {}", tea.comment)?;
        }
    }
    Ok(())
}

fn run_choices(paths: &JournalPaths, kind: ChoiceKind) -> Result<()> {
    let values = open_journal(paths)?.choices(kind);
    let mut out = io::stdout().lock();
    for value in values {
        writeln!(out, "{value}")?;
    }
    Ok(())
}
