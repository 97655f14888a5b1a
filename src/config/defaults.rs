//! Default configuration constants.

/// tmux binary resolved through `PATH` when nothing else is configured.
pub(super) const DEFAULT_TMUX_BINARY: &str = "tmux";
/// Character cap for create/rename prompts.
pub(super) const DEFAULT_MAX_NAME_LEN: usize = 20;
/// Default tracing filter when logging is enabled without an explicit level.
pub(super) const DEFAULT_LOG_LEVEL: &str = "warn";
/// Config file name looked up locally and under the config root.
pub(super) const CONFIG_FILE_NAME: &str = "tsm.toml";
/// Per-user directory name under config/state roots.
pub(super) const APP_DIR_NAME: &str = "tsm";
/// Log file name under the state directory.
pub(super) const LOG_FILE_NAME: &str = "tsm.log";
