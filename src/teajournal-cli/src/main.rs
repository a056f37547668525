//! Tea Journal - main entry point.
//!
//! Without a subcommand this opens the interactive journal; `list` and
//! `choices` print stored data for scripts.

use anyhow::Result;
use clap::Parser;

use teajournal_cli::{Cli, dispatch_command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    dispatch_command(cli)
}
