//! Blocking process helpers shared by the tmux backend.

use crate::error::BackendError;
use std::process::{Command, Stdio};

/// Captured result of one finished child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProcessOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Spawn a process, wait for it to exit, and capture both output streams.
pub(crate) fn run_process(program: &str, args: &[String]) -> Result<ProcessOutput, BackendError> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| BackendError::Spawn {
            program: program.to_string(),
            source,
        })?;

    Ok(ProcessOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

/// Run a process with the terminal's own stdio and wait for it.
pub(crate) fn run_interactive(program: &str, args: &[String]) -> Result<i32, BackendError> {
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| BackendError::Spawn {
            program: program.to_string(),
            source,
        })?;
    Ok(status.code().unwrap_or(-1))
}

/// Convert a non-zero exit status into a contextual backend error.
pub(crate) fn ensure_success(
    output: ProcessOutput,
    context: String,
) -> Result<ProcessOutput, BackendError> {
    if output.exit_code == 0 {
        return Ok(output);
    }

    let mut details = if output.stderr.trim().is_empty() {
        output.stdout.trim().to_string()
    } else {
        output.stderr.trim().to_string()
    };
    if details.is_empty() {
        details = format!("command exited with {}", output.exit_code);
    }

    Err(BackendError::failed(context, details))
}
