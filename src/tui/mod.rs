//! Terminal user-interface building blocks.
//!
//! `view` turns state into styled lines, `terminal` owns the screen and
//! paints those lines, and `app` runs the read/apply/redraw loop.

pub mod app;
pub mod settings;
pub mod terminal;
pub mod view;

pub use app::{run, Interactive};
pub use terminal::print_error;
pub use view::{chooser_frame, session_frame, Frame};
