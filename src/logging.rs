//! Logging initialization.
//!
//! The TUI owns the terminal, so log output goes to a file and only when
//! enabled by config or `TSM_LOG`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{default_log_path, LogConfig};

/// Install the file subscriber described by `config`.
///
/// Returns the log path when logging was enabled. An invalid filter
/// directive falls back to `warn`. Fails if a global subscriber is already
/// installed.
pub fn init(config: &LogConfig) -> std::io::Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }
    let Some(path) = config.file.clone().or_else(default_log_path) else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::registry()
        .with(filter_for(&config.level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(std::io::Error::other)?;
    Ok(Some(path))
}

fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
}
