//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`TSM_TMUX_BIN`, `TSM_TMUX_SOCKET`,
//!    `TSM_MAX_NAME_LEN`, `TSM_LOG`, `NO_COLOR`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./tsm.toml in the current directory
//! 4. $XDG_CONFIG_HOME/tsm/tsm.toml (or ~/.config/tsm/tsm.toml)
//! 5. Built-in defaults

mod defaults;
mod env;
mod init;
mod loader;
mod sources;
mod types;

pub use init::{config_root_dir, default_log_path, state_root_dir};
pub use loader::{load_config, load_config_with_source};
pub use sources::ConfigSource;
pub use types::{Config, DisplayConfig, InputConfig, LoadedConfig, LogConfig, TmuxConfig};
