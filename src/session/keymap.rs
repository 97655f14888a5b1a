//! Key bindings per mode, plus the help entries the view renders.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Mode;

/// Mode-independent meaning of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CursorUp,
    CursorDown,
    Kill,
    Switch,
    StartCreate,
    StartRename,
    StartFilter,
    Refresh,
    Quit,
    Insert(char),
    Backspace,
    Submit,
    Cancel,
}

/// One row of help text: the keys as the user types them and what they do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    pub keys: &'static str,
    pub description: &'static str,
}

const fn entry(keys: &'static str, description: &'static str) -> HelpEntry {
    HelpEntry { keys, description }
}

pub const MANAGING_HELP: &[HelpEntry] = &[
    entry("ctrl+p/k", "move up"),
    entry("ctrl+n/j", "move down"),
    entry("c", "create session"),
    entry("d", "delete"),
    entry("enter", "switch session"),
    entry("r", "rename session"),
    entry("/", "search"),
    entry("esc", "reset search"),
    entry("ctrl+c/q", "quit"),
];

pub const FILTERING_HELP: &[HelpEntry] = &[
    entry("enter", "apply filter"),
    entry("esc", "cancel search"),
    entry("ctrl+c", "quit"),
];

pub const CREATING_HELP: &[HelpEntry] = &[
    entry("enter", "create"),
    entry("esc", "cancel"),
    entry("ctrl+c", "quit"),
];

pub const RENAMING_HELP: &[HelpEntry] = &[
    entry("enter", "rename"),
    entry("esc", "cancel"),
    entry("ctrl+c", "quit"),
];

/// Help entries for the bindings active in `mode`.
pub fn help_for(mode: Mode) -> &'static [HelpEntry] {
    match mode {
        Mode::Managing => MANAGING_HELP,
        Mode::Filtering => FILTERING_HELP,
        Mode::Creating => CREATING_HELP,
        Mode::Renaming => RENAMING_HELP,
    }
}

/// Resolve a key press to an action in the given mode.
///
/// Returns `None` for keys with no binding; they are ignored.
pub fn action_for(mode: Mode, key: &KeyEvent) -> Option<Action> {
    if is_ctrl(key, 'c') {
        return Some(Action::Quit);
    }
    match mode {
        Mode::Managing => managing_action(key),
        Mode::Filtering | Mode::Creating | Mode::Renaming => text_entry_action(key),
    }
}

fn managing_action(key: &KeyEvent) -> Option<Action> {
    if is_ctrl(key, 'p') {
        return Some(Action::CursorUp);
    }
    if is_ctrl(key, 'n') {
        return Some(Action::CursorDown);
    }
    if has_command_modifier(key) {
        return None;
    }
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => Some(Action::CursorUp),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::CursorDown),
        KeyCode::Char('d') => Some(Action::Kill),
        KeyCode::Enter => Some(Action::Switch),
        KeyCode::Char('c') => Some(Action::StartCreate),
        KeyCode::Char('r') => Some(Action::StartRename),
        KeyCode::Char('/') => Some(Action::StartFilter),
        KeyCode::Esc => Some(Action::Refresh),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

fn text_entry_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(ch) if !has_command_modifier(key) => Some(Action::Insert(ch)),
        _ => None,
    }
}

fn is_ctrl(key: &KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

/// Control/alt chords never produce text.
fn has_command_modifier(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
