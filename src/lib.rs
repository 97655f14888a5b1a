//! tsm: a terminal front-end for managing tmux sessions.
//!
//! The core is the session state machine in [`session`]: it owns the list,
//! cursor and mode, and turns key presses into calls on a
//! [`tmux::SessionBackend`]. [`tui`] projects that state onto the terminal.
//!
//! # Quick start
//!
//! ```no_run
//! use tsm::config::load_config;
//! use tsm::session::SessionListState;
//! use tsm::tmux::TmuxBackend;
//!
//! let config = load_config(None).unwrap();
//! let mut backend = TmuxBackend::from_config(&config.tmux);
//! let mut state = SessionListState::load(&mut backend, config.input.max_name_len).unwrap();
//! let reason = tsm::tui::run(&mut state, &mut backend, config.display.color).unwrap();
//! println!("{reason:?}");
//! ```

pub mod build_info;
pub mod chooser;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;
#[cfg(test)]
pub mod testsupport;
pub mod tmux;
pub mod tui;
