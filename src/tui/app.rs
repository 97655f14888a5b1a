//! Blocking event loop: read a key, apply it, redraw.

use std::io;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::debug;

use crate::chooser::{self, ChooserState};
use crate::error::AppError;
use crate::session::{self, ExitReason, SessionListState, Transition};
use crate::tmux::SessionBackend;

use super::terminal::{paint, TerminalGuard};
use super::view::{chooser_frame, session_frame, Frame};

/// A state the event loop can drive.
pub trait Interactive {
    fn frame(&self, color: bool) -> Frame;
    fn on_key(&mut self, key: KeyEvent, backend: &mut dyn SessionBackend) -> Transition;
}

impl Interactive for SessionListState {
    fn frame(&self, color: bool) -> Frame {
        session_frame(self, color)
    }

    fn on_key(&mut self, key: KeyEvent, backend: &mut dyn SessionBackend) -> Transition {
        session::handle_key(self, key, backend)
    }
}

impl Interactive for ChooserState {
    fn frame(&self, color: bool) -> Frame {
        chooser_frame(self, color)
    }

    fn on_key(&mut self, key: KeyEvent, backend: &mut dyn SessionBackend) -> Transition {
        chooser::handle_key(self, key, backend)
    }
}

/// Take over the terminal and run until the state asks to exit.
///
/// The terminal is restored before this returns, on success and on error.
pub fn run<S: Interactive>(
    state: &mut S,
    backend: &mut dyn SessionBackend,
    color: bool,
) -> Result<ExitReason, AppError> {
    let _guard = TerminalGuard::acquire()?;
    let mut out = io::stderr();
    paint(&mut out, &state.frame(color), color)?;

    loop {
        let key = match event::read()? {
            Event::Key(key) => key,
            Event::Resize(..) => {
                paint(&mut out, &state.frame(color), color)?;
                continue;
            }
            _ => continue,
        };
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            continue;
        }

        match state.on_key(key, backend) {
            Transition::Continue => paint(&mut out, &state.frame(color), color)?,
            Transition::Exit(reason) => {
                debug!(?reason, "leaving interactive loop");
                return Ok(reason);
            }
        }
    }
}
