//! Root screen: pick what to manage before entering a manager.
//!
//! Only session management exists; windows and panes answer with a status
//! message.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::session::{self, ExitReason, SessionListState, StatusMessage, Transition};
use crate::tmux::SessionBackend;

/// Entries shown on the chooser, in display order.
pub const CHOICES: &[(&str, &str)] = &[("s", "sessions"), ("w", "windows"), ("p", "panes")];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Choosing,
    Sessions(SessionListState),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooserState {
    screen: Screen,
    status: Option<StatusMessage>,
    max_name_len: usize,
}

impl ChooserState {
    pub fn new(max_name_len: usize) -> Self {
        Self {
            screen: Screen::Choosing,
            status: None,
            max_name_len,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }
}

/// Apply one key event to the chooser or the manager it has opened.
pub fn handle_key(
    state: &mut ChooserState,
    key: KeyEvent,
    backend: &mut dyn SessionBackend,
) -> Transition {
    if let Screen::Sessions(sessions) = &mut state.screen {
        return session::handle_key(sessions, key, backend);
    }

    state.status = None;
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Transition::Exit(ExitReason::Quit),
            _ => Transition::Continue,
        };
    }
    match key.code {
        KeyCode::Char('s') => match SessionListState::load(backend, state.max_name_len) {
            Ok(sessions) => {
                debug!(count = sessions.sessions().len(), "opening session manager");
                state.screen = Screen::Sessions(sessions);
            }
            Err(err) => state.status = Some(StatusMessage::error(err.to_string())),
        },
        KeyCode::Char('w') => {
            state.status = Some(StatusMessage::info("window management is not implemented"));
        }
        KeyCode::Char('p') => {
            state.status = Some(StatusMessage::info("pane management is not implemented"));
        }
        KeyCode::Char('q') => return Transition::Exit(ExitReason::Quit),
        _ => {}
    }
    Transition::Continue
}
