//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! This is the single place to tweak titles, glyphs, placeholders and colors.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout / indentation
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";
pub const HELP_SEPARATOR: &str = " • ";

// ---------------------------------------------------------------------------
// Titles / prompts
// ---------------------------------------------------------------------------

pub const TITLE_CHOOSER: &str = "Choose an action:";
pub const TITLE_SESSIONS: &str = "Sessions:";
pub const TITLE_CREATE: &str = "Create session:";
pub const TITLE_RENAME: &str = "Rename session:";

pub const PROMPT_GLYPH: &str = "➤ ";
pub const PROMPT_GLYPH_PLAIN: &str = "> ";

pub const PLACEHOLDER_FILTER: &str = "type to filter";
pub const PLACEHOLDER_CREATE: &str = "New session name";
pub const PLACEHOLDER_RENAME: &str = "Rename session";
pub const PLACEHOLDER_EMPTY_LIST: &str = "(no sessions)";

// ---------------------------------------------------------------------------
// Labels / glyphs
// ---------------------------------------------------------------------------

pub const LABEL_ERROR: &str = "error:";

pub const MARKER_SELECTED_COLOR: &str = "▶";
pub const MARKER_UNSELECTED_COLOR: &str = "·";
pub const MARKER_SELECTED_PLAIN: &str = ">";
pub const MARKER_UNSELECTED_PLAIN: &str = " ";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_TITLE: Color = Color::Cyan;
pub const COLOR_SELECTED_MARKER: Color = Color::DarkYellow;
pub const COLOR_SELECTED_TEXT: Color = Color::Magenta;
pub const COLOR_UNSELECTED_MARKER: Color = Color::DarkGrey;
pub const COLOR_ITEM: Color = Color::White;
pub const COLOR_PROMPT: Color = Color::Cyan;
pub const COLOR_INPUT: Color = Color::White;
pub const COLOR_PLACEHOLDER: Color = Color::DarkGrey;
pub const COLOR_INFO: Color = Color::Green;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_HELP_KEY: Color = Color::Green;
pub const COLOR_HELP_TEXT: Color = Color::DarkGrey;

// ---------------------------------------------------------------------------
// Small helpers
// ---------------------------------------------------------------------------

pub fn list_marker(is_selected: bool, color: bool) -> &'static str {
    match (is_selected, color) {
        (true, true) => MARKER_SELECTED_COLOR,
        (false, true) => MARKER_UNSELECTED_COLOR,
        (true, false) => MARKER_SELECTED_PLAIN,
        (false, false) => MARKER_UNSELECTED_PLAIN,
    }
}

pub fn prompt_glyph(color: bool) -> &'static str {
    if color {
        PROMPT_GLYPH
    } else {
        PROMPT_GLYPH_PLAIN
    }
}
