//! Environment overrides applied after the config file is parsed.
//!
//! Supported variables: `TSM_TMUX_BIN`, `TSM_TMUX_SOCKET`,
//! `TSM_MAX_NAME_LEN`, `TSM_LOG`, and the `NO_COLOR` convention.

use crate::error::ConfigError;

use super::Config;

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(binary) = non_empty(env_lookup, "TSM_TMUX_BIN") {
        config.tmux.binary = binary;
    }
    if let Some(socket) = non_empty(env_lookup, "TSM_TMUX_SOCKET") {
        config.tmux.socket = Some(socket);
    }
    if let Some(raw) = non_empty(env_lookup, "TSM_MAX_NAME_LEN") {
        let parsed = raw.parse::<usize>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid TSM_MAX_NAME_LEN value `{raw}`: expected positive integer"
            ))
        })?;
        config.input.max_name_len = parsed;
    }
    // Setting a filter directive implies the user wants logs.
    if let Some(level) = non_empty(env_lookup, "TSM_LOG") {
        config.log.enabled = true;
        config.log.level = level;
    }
    if non_empty(env_lookup, "NO_COLOR").is_some() {
        config.display.color = false;
    }
    Ok(())
}

/// Reject values that would leave the UI unusable.
pub(super) fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.tmux.binary.trim().is_empty() {
        return Err(ConfigError::Invalid("tmux.binary must not be empty".into()));
    }
    if config.input.max_name_len == 0 {
        return Err(ConfigError::Invalid(
            "input.max_name_len must be at least 1".into(),
        ));
    }
    Ok(())
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
