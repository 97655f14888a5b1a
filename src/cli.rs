//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};

/// Manage tmux sessions from a small terminal UI.
#[derive(Debug, Parser)]
#[command(name = "tsm", disable_version_flag = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to config file (default: ./tsm.toml or ~/.config/tsm/tsm.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Print version information.
    #[arg(short = 'V', long = "version")]
    pub version: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Open the session manager directly.
    Sessions,
    /// Print version information.
    Version,
}
