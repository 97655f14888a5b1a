//! Unified error types for tsm.

use std::fmt;

// ---------------------------------------------------------------------------
// BackendError
// ---------------------------------------------------------------------------

/// Errors arising from multiplexer invocations.
#[derive(Debug)]
pub enum BackendError {
    /// The multiplexer process could not be started.
    Spawn {
        program: String,
        source: std::io::Error,
    },
    /// The multiplexer ran but exited with a failure status.
    Failed { context: String, details: String },
}

impl BackendError {
    /// Build a failure error from a context line and process output details.
    pub fn failed(context: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Failed {
            context: context.into(),
            details: details.into(),
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn { program, source } => write!(f, "failed to start {program}: {source}"),
            Self::Failed { context, details } => write!(f, "{context}: {details}"),
        }
    }
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
            Self::Failed { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// Input rejected before any backend round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "session name cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// AppError — top-level
// ---------------------------------------------------------------------------

/// Fatal errors that end the program with a non-zero status.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    /// Backend failure outside the interactive loop (startup listing, attach).
    Backend(BackendError),
    /// Terminal setup, drawing, or event reading failed.
    Terminal(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Backend(e) => write!(f, "tmux: {e}"),
            Self::Terminal(e) => write!(f, "terminal: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<BackendError> for AppError {
    fn from(e: BackendError) -> Self {
        Self::Backend(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Terminal(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_display() {
        assert_eq!(
            BackendError::failed("failed to kill session `a`", "can't find session: a")
                .to_string(),
            "failed to kill session `a`: can't find session: a"
        );
        let spawn = BackendError::Spawn {
            program: "tmux".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(spawn.to_string(), "failed to start tmux: not found");
    }

    #[test]
    fn validation_error_message() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "session name cannot be empty"
        );
    }

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let s = ConfigError::from(io_err).to_string();
        assert!(s.starts_with("io:"), "got: {s}");
        assert!(s.contains("file not found"));
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        assert!(ConfigError::from(toml_err).to_string().starts_with("toml:"));
    }

    #[test]
    fn app_error_wraps_sources() {
        let ae = AppError::from(BackendError::failed("failed to list sessions", "boom"));
        assert_eq!(ae.to_string(), "tmux: failed to list sessions: boom");
        let ae = AppError::from(ConfigError::Invalid("bad".into()));
        assert_eq!(ae.to_string(), "config: invalid config: bad");
    }
}
