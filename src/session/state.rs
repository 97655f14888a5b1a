//! Session list state shared by the transition function and the view.

use crate::error::BackendError;
use crate::tmux::SessionBackend;

/// Which sub-state governs key interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Managing,
    Filtering,
    Creating,
    Renaming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// One-line feedback shown under the list until the next key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

/// The session manager's complete UI state.
///
/// `cursor` always indexes into `sessions` when the list is non-empty and is
/// `0` otherwise. Mutation goes through [`super::handle_key`]; renderers use
/// the read-only accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionListState {
    pub(super) sessions: Vec<String>,
    pub(super) cursor: usize,
    pub(super) mode: Mode,
    pub(super) filter_query: String,
    pub(super) input: String,
    pub(super) status: Option<StatusMessage>,
    pub(super) max_name_len: usize,
}

impl SessionListState {
    /// Build a state in `Managing` mode over an already-fetched list.
    pub fn new(sessions: Vec<String>, max_name_len: usize) -> Self {
        Self {
            sessions,
            cursor: 0,
            mode: Mode::Managing,
            filter_query: String::new(),
            input: String::new(),
            status: None,
            max_name_len: max_name_len.max(1),
        }
    }

    /// Fetch the initial list from the backend.
    pub fn load(
        backend: &mut dyn SessionBackend,
        max_name_len: usize,
    ) -> Result<Self, BackendError> {
        Ok(Self::new(backend.list_sessions()?, max_name_len))
    }

    pub fn sessions(&self) -> &[String] {
        &self.sessions
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn filter_query(&self) -> &str {
        &self.filter_query
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }

    /// Name under the cursor, if any.
    pub fn selected(&self) -> Option<&str> {
        self.sessions.get(self.cursor).map(String::as_str)
    }

    pub(super) fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(super) fn move_down(&mut self) {
        if self.cursor + 1 < self.sessions.len() {
            self.cursor += 1;
        }
    }

    pub(super) fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.sessions.len().saturating_sub(1));
    }

    /// Append to the create/rename buffer, respecting the length cap.
    pub(super) fn push_input(&mut self, ch: char) {
        if self.input.chars().count() < self.max_name_len {
            self.input.push(ch);
        }
    }

    pub(super) fn set_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::info(text));
    }

    pub(super) fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::error(text));
    }
}
