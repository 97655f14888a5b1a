//! tmux-backed session lifecycle commands and list-output parsing.

use crate::config::TmuxConfig;
use crate::error::BackendError;
use tracing::{debug, warn};

use super::process::{ensure_success, run_interactive, run_process};
use super::SessionBackend;

/// Environment variable tmux sets inside every client shell.
const TMUX_ENV: &str = "TMUX";

/// stderr tmux prints when no server is running yet.
const NO_SERVER_MARKER: &str = "no server running";

/// A failed socket connect only means "no server" when the socket is
/// missing or stale; other causes are real failures.
const CONNECT_ERROR_MARKER: &str = "error connecting to";
const MISSING_SOCKET_CAUSES: [&str; 2] = ["No such file or directory", "Connection refused"];

/// Whether `tsm` itself runs inside a tmux client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientContext {
    /// Inside tmux: switching moves the current client.
    Attached,
    /// Outside tmux: switching validates the target and attaches after exit.
    Detached,
}

impl ClientContext {
    /// Detect the client context from the process environment.
    pub fn detect() -> Self {
        match std::env::var(TMUX_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::Attached,
            _ => Self::Detached,
        }
    }
}

/// Session backend that shells out to the `tmux` binary.
#[derive(Debug, Clone)]
pub struct TmuxBackend {
    binary: String,
    socket: Option<String>,
    client: ClientContext,
}

impl TmuxBackend {
    pub fn new(binary: impl Into<String>, socket: Option<String>, client: ClientContext) -> Self {
        Self {
            binary: binary.into(),
            socket: socket.filter(|s| !s.trim().is_empty()),
            client,
        }
    }

    /// Build a backend from config, detecting the client context from env.
    pub fn from_config(config: &TmuxConfig) -> Self {
        Self::new(
            config.binary.clone(),
            config.socket.clone(),
            ClientContext::detect(),
        )
    }

    pub fn client(&self) -> ClientContext {
        self.client
    }

    /// Attach the controlling terminal to `name`.
    ///
    /// Only meaningful after the UI has released the terminal.
    pub fn attach_session(&self, name: &str) -> Result<(), BackendError> {
        let args = self.args(&["attach-session", "-t", &exact_target(name)]);
        debug!(session = name, "attaching to tmux session");
        let code = run_interactive(&self.binary, &args)?;
        if code == 0 {
            Ok(())
        } else {
            Err(BackendError::failed(
                format!("failed to attach to session `{name}`"),
                format!("command exited with {code}"),
            ))
        }
    }

    /// Prefix subcommand arguments with the configured socket selector.
    fn args(&self, subcommand: &[&str]) -> Vec<String> {
        let mut out = Vec::with_capacity(subcommand.len() + 2);
        if let Some(socket) = &self.socket {
            out.push("-L".to_string());
            out.push(socket.clone());
        }
        out.extend(subcommand.iter().map(|arg| arg.to_string()));
        out
    }

    fn run_checked(&self, subcommand: &[&str], context: String) -> Result<String, BackendError> {
        let args = self.args(subcommand);
        debug!(binary = %self.binary, ?args, "running tmux");
        let output = run_process(&self.binary, &args)?;
        match ensure_success(output, context) {
            Ok(output) => Ok(output.stdout),
            Err(err) => {
                warn!(error = %err, "tmux command failed");
                Err(err)
            }
        }
    }
}

impl SessionBackend for TmuxBackend {
    fn list_sessions(&mut self) -> Result<Vec<String>, BackendError> {
        let args = self.args(&["list-sessions"]);
        debug!(binary = %self.binary, ?args, "listing tmux sessions");
        let output = run_process(&self.binary, &args)?;
        if output.exit_code != 0 && is_no_server_output(&output.stderr) {
            debug!("tmux server not running; treating as empty session list");
            return Ok(Vec::new());
        }
        let output = ensure_success(output, "failed to list sessions".to_string())?;
        Ok(parse_session_list(&output.stdout))
    }

    fn kill_session(&mut self, name: &str) -> Result<(), BackendError> {
        self.run_checked(
            &["kill-session", "-t", &exact_target(name)],
            format!("failed to kill session `{name}`"),
        )?;
        Ok(())
    }

    fn switch_session(&mut self, name: &str) -> Result<(), BackendError> {
        let target = exact_target(name);
        match self.client {
            ClientContext::Attached => self.run_checked(
                &["switch-client", "-t", &target],
                format!("failed to switch to session `{name}`"),
            )?,
            ClientContext::Detached => self.run_checked(
                &["has-session", "-t", &target],
                format!("session `{name}` is not available"),
            )?,
        };
        Ok(())
    }

    fn create_session(&mut self, name: &str) -> Result<(), BackendError> {
        self.run_checked(
            &["new-session", "-d", "-s", name],
            format!("failed to create session `{name}`"),
        )?;
        Ok(())
    }

    fn rename_session(&mut self, old: &str, new: &str) -> Result<(), BackendError> {
        self.run_checked(
            &["rename-session", "-t", &exact_target(old), new],
            format!("failed to rename session `{old}` to `{new}`"),
        )?;
        Ok(())
    }
}

/// Parse `tmux list-sessions` output into session names.
///
/// Each name is the text before the first `:` of its line; blank names are
/// dropped. Names that themselves contain `:` come back truncated.
pub fn parse_session_list(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.split(':').next())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// tmux target that only matches a session with exactly this name.
fn exact_target(name: &str) -> String {
    format!("={name}")
}

fn is_no_server_output(stderr: &str) -> bool {
    if stderr.contains(NO_SERVER_MARKER) {
        return true;
    }
    stderr.contains(CONNECT_ERROR_MARKER)
        && MISSING_SOCKET_CAUSES
            .iter()
            .any(|cause| stderr.contains(cause))
}
