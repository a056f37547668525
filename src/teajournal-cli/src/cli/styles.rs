//! CLI styling and formatting.

use clap::builder::styling::{AnsiColor, Effects, Styles};

/// Help output theme.
pub fn get_styles() -> Styles {
    Styles::styled()
        // Headers (USAGE, COMMANDS, OPTIONS)
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        // Command and flag names
        .literal(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Yellow.on_default())
}

/// After-help section with environment variables and paths.
pub const AFTER_HELP: &str = color_print::cstr!(
    r#"<green,bold>QUICK START</>
    <yellow,bold>teajournal</>                        Open the journal
    <yellow,bold>teajournal --lang fr</>              Open the journal in French
    <yellow,bold>teajournal list --json</>            Print saved teas as JSON
    <yellow,bold>teajournal choices ingredients</>    Print known ingredients

<green,bold>IN THE JOURNAL</>
    <dim>F2</>        Switch between the form and the list
    <dim>F3</>        Switch language
    <dim>Tab</>       Next field
    <dim>Ctrl+A</>    Add the typed ingredient
    <dim>Ctrl+Q</>    Quit

<green,bold>ENVIRONMENT VARIABLES</>
    <yellow>TEAJOURNAL_DATA_DIR</>      Override the data directory
    <yellow>TEAJOURNAL_CONFIG_DIR</>    Override the config directory
    <yellow>TEAJOURNAL_CONFIG</>        Path to a config file
    <yellow>TEAJOURNAL_LOG_LEVEL</>     Log verbosity (error, warn, info, debug, trace)
    <yellow>RUST_LOG</>                 Full tracing filter, wins over the log level

<green,bold>PATHS</>
    <dim>Config</>    ~/.config/TeaJournal/config.toml
    <dim>Store</>     ~/.local/share/TeaJournal/store.json
    <dim>Logs</>      ~/.local/share/TeaJournal/logs/"#
);
