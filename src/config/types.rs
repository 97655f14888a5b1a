//! Configuration data model.
//!
//! Struct definitions plus default values. Source discovery and env
//! overrides live in sibling modules.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults::{DEFAULT_LOG_LEVEL, DEFAULT_MAX_NAME_LEN, DEFAULT_TMUX_BINARY};
use super::sources::ConfigSource;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tmux: TmuxConfig,
    pub display: DisplayConfig,
    pub input: InputConfig,
    pub log: LogConfig,
}

/// How the multiplexer is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TmuxConfig {
    /// Program name or path of the tmux binary.
    pub binary: String,
    /// Optional named server socket (`tmux -L <socket>`).
    pub socket: Option<String>,
}

impl Default for TmuxConfig {
    fn default() -> Self {
        Self {
            binary: DEFAULT_TMUX_BINARY.to_string(),
            socket: None,
        }
    }
}

/// Display / rendering preferences.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Text prompt limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Maximum characters accepted by the create/rename prompts.
    pub max_name_len: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
        }
    }
}

/// File logging settings. The TUI owns the terminal, so logs never go to it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    /// `tracing_subscriber::EnvFilter` directive string.
    pub level: String,
    /// Log file path. Defaults to `<state dir>/tsm/tsm.log`.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

/// Resolved config plus the source it was read from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}
