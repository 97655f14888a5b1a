//! Pure projection from UI state to styled lines.
//!
//! Nothing here touches the terminal or the backend; [`super::terminal`]
//! paints whatever [`Frame`] these functions return.

use crate::chooser::{ChooserState, Screen, CHOICES};
use crate::session::{help_for, HelpEntry, Mode, SessionListState, StatusLevel, StatusMessage};

use super::settings;

/// Semantic style of a span; the painter maps tones to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Title,
    SelectedMarker,
    UnselectedMarker,
    Selected,
    Item,
    Prompt,
    Input,
    Placeholder,
    Info,
    Error,
    HelpKey,
    HelpText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    fn push(mut self, text: impl Into<String>, tone: Tone) -> Self {
        self.spans.push(Span::new(text, tone));
        self
    }

    /// Unstyled text of the whole line.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// One full screen of output, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<Line>,
}

impl Frame {
    /// Unstyled text, one entry per line.
    pub fn text_lines(&self) -> Vec<String> {
        self.lines.iter().map(Line::text).collect()
    }
}

/// Project the session manager.
pub fn session_frame(state: &SessionListState, color: bool) -> Frame {
    let mut lines = vec![Line::default().push(settings::TITLE_SESSIONS, Tone::Title)];

    if state.sessions().is_empty() {
        lines.push(
            Line::default()
                .push(settings::INDENT_1, Tone::Plain)
                .push(settings::PLACEHOLDER_EMPTY_LIST, Tone::Placeholder),
        );
    }
    for (idx, name) in state.sessions().iter().enumerate() {
        let active = idx == state.cursor();
        let (marker_tone, text_tone) = if active {
            (Tone::SelectedMarker, Tone::Selected)
        } else {
            (Tone::UnselectedMarker, Tone::Item)
        };
        lines.push(
            Line::default()
                .push(settings::INDENT_1, Tone::Plain)
                .push(settings::list_marker(active, color), marker_tone)
                .push(" ", Tone::Plain)
                .push(name.as_str(), text_tone),
        );
    }

    lines.push(Line::default());
    match state.mode() {
        Mode::Managing => {}
        Mode::Filtering => {
            lines.push(prompt_line(
                color,
                state.filter_query(),
                settings::PLACEHOLDER_FILTER,
            ));
        }
        Mode::Creating => {
            lines.push(Line::default().push(settings::TITLE_CREATE, Tone::Title));
            lines.push(prompt_line(color, state.input(), settings::PLACEHOLDER_CREATE));
        }
        Mode::Renaming => {
            let mut title = Line::default().push(settings::TITLE_RENAME, Tone::Title);
            if let Some(old) = state.selected() {
                title = title.push(" ", Tone::Plain).push(old, Tone::Selected);
            }
            lines.push(title);
            lines.push(prompt_line(color, state.input(), settings::PLACEHOLDER_RENAME));
        }
    }

    if let Some(status) = state.status() {
        lines.push(status_line(status));
    }
    lines.push(help_line(help_for(state.mode())));
    Frame { lines }
}

/// Project the chooser, or the manager it has opened.
pub fn chooser_frame(state: &ChooserState, color: bool) -> Frame {
    if let Screen::Sessions(sessions) = state.screen() {
        return session_frame(sessions, color);
    }

    let mut lines = vec![Line::default().push(settings::TITLE_CHOOSER, Tone::Title)];
    let mut choices = Line::default().push(settings::INDENT_1, Tone::Plain);
    for (idx, (key, label)) in CHOICES.iter().enumerate() {
        if idx > 0 {
            choices = choices.push(settings::HELP_SEPARATOR, Tone::HelpText);
        }
        choices = choices
            .push(*key, Tone::HelpKey)
            .push(format!(": {label}"), Tone::HelpText);
    }
    lines.push(choices);
    lines.push(
        Line::default()
            .push(settings::INDENT_1, Tone::Plain)
            .push("q", Tone::HelpKey)
            .push(": quit", Tone::HelpText),
    );
    if let Some(status) = state.status() {
        lines.push(Line::default());
        lines.push(status_line(status));
    }
    Frame { lines }
}

fn prompt_line(color: bool, value: &str, placeholder: &str) -> Line {
    let line = Line::default().push(settings::prompt_glyph(color), Tone::Prompt);
    if value.is_empty() {
        line.push(placeholder, Tone::Placeholder)
    } else {
        line.push(value, Tone::Input)
    }
}

fn status_line(status: &StatusMessage) -> Line {
    match status.level {
        StatusLevel::Info => Line::default().push(status.text.as_str(), Tone::Info),
        StatusLevel::Error => Line::default()
            .push(settings::LABEL_ERROR, Tone::Error)
            .push(" ", Tone::Plain)
            .push(status.text.as_str(), Tone::Error),
    }
}

fn help_line(entries: &[HelpEntry]) -> Line {
    let mut line = Line::default();
    for (idx, entry) in entries.iter().enumerate() {
        if idx > 0 {
            line = line.push(settings::HELP_SEPARATOR, Tone::HelpText);
        }
        line = line
            .push(entry.keys, Tone::HelpKey)
            .push(" ", Tone::Plain)
            .push(entry.description, Tone::HelpText);
    }
    line
}
