//! Session management state machine.
//!
//! [`SessionListState`] holds the list, cursor, mode and text buffers;
//! [`handle_key`] is the only way it changes in response to input.

pub mod keymap;
mod state;
mod update;

pub use keymap::{help_for, HelpEntry};
pub use state::{Mode, SessionListState, StatusLevel, StatusMessage};
pub use update::{handle_key, ExitReason, Transition};
