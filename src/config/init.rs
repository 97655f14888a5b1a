//! Per-user config and state path helpers.

use std::path::PathBuf;

use super::defaults::{APP_DIR_NAME, LOG_FILE_NAME};

/// Return the default log path (`~/.local/state/tsm/tsm.log`).
pub fn default_log_path() -> Option<PathBuf> {
    state_root_dir().map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Resolve the base config directory from env/home conventions.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Some(path) = xdg_dir("XDG_CONFIG_HOME") {
        return Some(path);
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

/// Resolve the base state directory from env/home conventions.
pub fn state_root_dir() -> Option<PathBuf> {
    if let Some(path) = xdg_dir("XDG_STATE_HOME") {
        return Some(path);
    }
    dirs::state_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("state")))
        .or_else(dirs::cache_dir)
}

fn xdg_dir(var: &str) -> Option<PathBuf> {
    let raw = std::env::var(var).ok()?;
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}
