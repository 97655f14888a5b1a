//! Key-driven transitions of [`SessionListState`].
//!
//! Backend calls happen synchronously inside a transition. The list, cursor
//! and mode only change after a call has succeeded; failures leave them as
//! they were and become an error status.

use crossterm::event::KeyEvent;
use tracing::debug;

use crate::error::ValidationError;
use crate::tmux::SessionBackend;

use super::keymap::{action_for, Action};
use super::{Mode, SessionListState};

/// Why the interactive loop should stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    /// The backend accepted a switch to `session`.
    Switched { session: String },
}

/// Outcome of handling one key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Exit(ExitReason),
}

/// Apply one key event to `state`, calling `backend` as needed.
pub fn handle_key(
    state: &mut SessionListState,
    key: KeyEvent,
    backend: &mut dyn SessionBackend,
) -> Transition {
    state.status = None;
    let Some(action) = action_for(state.mode, &key) else {
        return Transition::Continue;
    };
    debug!(mode = ?state.mode, ?action, "session key");
    match state.mode {
        Mode::Managing => managing(state, action, backend),
        Mode::Filtering => filtering(state, action),
        Mode::Creating | Mode::Renaming => prompting(state, action, backend),
    }
}

fn managing(
    state: &mut SessionListState,
    action: Action,
    backend: &mut dyn SessionBackend,
) -> Transition {
    match action {
        Action::CursorUp => state.move_up(),
        Action::CursorDown => state.move_down(),
        Action::Kill => kill_selected(state, backend),
        Action::Switch => return switch_selected(state, backend),
        Action::StartCreate => {
            state.input.clear();
            state.mode = Mode::Creating;
        }
        Action::StartRename => {
            if state.selected().is_none() {
                state.set_info("no session to rename");
            } else {
                state.input.clear();
                state.mode = Mode::Renaming;
            }
        }
        Action::StartFilter => {
            state.filter_query.clear();
            state.mode = Mode::Filtering;
        }
        Action::Refresh => match backend.list_sessions() {
            Ok(sessions) => {
                state.sessions = sessions;
                state.cursor = 0;
            }
            Err(err) => state.set_error(err.to_string()),
        },
        Action::Quit => return Transition::Exit(ExitReason::Quit),
        Action::Insert(_) | Action::Backspace | Action::Submit | Action::Cancel => {}
    }
    Transition::Continue
}

fn kill_selected(state: &mut SessionListState, backend: &mut dyn SessionBackend) {
    let Some(name) = state.selected().map(str::to_string) else {
        state.set_info("no session to delete");
        return;
    };
    match backend.kill_session(&name) {
        Ok(()) => {
            state.sessions.remove(state.cursor);
            state.clamp_cursor();
            state.set_info(format!("killed session `{name}`"));
        }
        Err(err) => state.set_error(err.to_string()),
    }
}

fn switch_selected(state: &mut SessionListState, backend: &mut dyn SessionBackend) -> Transition {
    let Some(name) = state.selected().map(str::to_string) else {
        state.set_info("no session to switch to");
        return Transition::Continue;
    };
    match backend.switch_session(&name) {
        Ok(()) => Transition::Exit(ExitReason::Switched { session: name }),
        Err(err) => {
            state.set_error(err.to_string());
            Transition::Continue
        }
    }
}

fn filtering(state: &mut SessionListState, action: Action) -> Transition {
    match action {
        Action::Insert(ch) => state.filter_query.push(ch),
        Action::Backspace => {
            state.filter_query.pop();
        }
        Action::Submit => {
            let query = std::mem::take(&mut state.filter_query);
            if !query.is_empty() {
                state.sessions.retain(|name| name.starts_with(&query));
            }
            state.clamp_cursor();
            state.mode = Mode::Managing;
        }
        Action::Cancel => {
            state.filter_query.clear();
            state.mode = Mode::Managing;
        }
        Action::Quit => return Transition::Exit(ExitReason::Quit),
        _ => {}
    }
    Transition::Continue
}

fn prompting(
    state: &mut SessionListState,
    action: Action,
    backend: &mut dyn SessionBackend,
) -> Transition {
    match action {
        Action::Insert(ch) => state.push_input(ch),
        Action::Backspace => {
            state.input.pop();
        }
        Action::Cancel => {
            state.input.clear();
            state.mode = Mode::Managing;
        }
        Action::Submit => submit_name(state, backend),
        Action::Quit => return Transition::Exit(ExitReason::Quit),
        _ => {}
    }
    Transition::Continue
}

fn submit_name(state: &mut SessionListState, backend: &mut dyn SessionBackend) {
    let name = state.input.trim().to_string();
    if name.is_empty() {
        state.set_error(ValidationError::EmptyName.to_string());
        return;
    }

    let result = match state.mode {
        Mode::Creating => backend
            .create_session(&name)
            .map(|()| format!("created session `{name}`")),
        Mode::Renaming => {
            let Some(old) = state.selected().map(str::to_string) else {
                state.input.clear();
                state.mode = Mode::Managing;
                state.set_info("no session to rename");
                return;
            };
            backend
                .rename_session(&old, &name)
                .map(|()| format!("renamed `{old}` to `{name}`"))
        }
        Mode::Managing | Mode::Filtering => return,
    };

    match result {
        Ok(done) => {
            state.input.clear();
            state.mode = Mode::Managing;
            refresh_after_mutation(state, backend, done);
        }
        Err(err) => state.set_error(err.to_string()),
    }
}

/// Re-read the list after a successful create or rename.
fn refresh_after_mutation(
    state: &mut SessionListState,
    backend: &mut dyn SessionBackend,
    done: String,
) {
    match backend.list_sessions() {
        Ok(sessions) => {
            state.sessions = sessions;
            state.clamp_cursor();
            state.set_info(done);
        }
        Err(err) => state.set_error(format!("{done}, but refreshing the list failed: {err}")),
    }
}
