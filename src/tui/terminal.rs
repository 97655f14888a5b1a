//! Terminal ownership and frame painting.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color, Print, PrintStyledContent, Stylize};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, QueueableCommand};

use super::settings;
use super::view::{Frame, Tone};

/// Raw mode plus alternate screen for as long as the guard lives.
pub struct TerminalGuard;

impl TerminalGuard {
    /// Enable raw mode, switch to the alternate screen and hide the cursor.
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(io::stderr(), EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stderr(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Clear the screen and paint `frame` from the top-left corner.
pub fn paint<W: Write>(out: &mut W, frame: &Frame, color: bool) -> io::Result<()> {
    out.queue(MoveTo(0, 0))?;
    out.queue(Clear(ClearType::All))?;
    for (row, line) in frame.lines.iter().enumerate() {
        out.queue(MoveTo(0, row.min(u16::MAX as usize) as u16))?;
        for span in &line.spans {
            match tone_color(span.tone).filter(|_| color) {
                Some(fg) => {
                    let styled = span.text.as_str().with(fg);
                    let styled = if is_emphasized(span.tone) {
                        styled.bold()
                    } else {
                        styled
                    };
                    out.queue(PrintStyledContent(styled))?;
                }
                None => {
                    out.queue(Print(span.text.as_str()))?;
                }
            }
        }
    }
    out.flush()
}

/// Print a fatal error to stderr once the terminal is restored.
pub fn print_error(msg: &str, color: bool) {
    if color {
        eprintln!(
            "{} {msg}",
            settings::LABEL_ERROR.with(settings::COLOR_ERROR).bold()
        );
    } else {
        eprintln!("{} {msg}", settings::LABEL_ERROR);
    }
}

fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Plain => None,
        Tone::Title => Some(settings::COLOR_TITLE),
        Tone::SelectedMarker => Some(settings::COLOR_SELECTED_MARKER),
        Tone::UnselectedMarker => Some(settings::COLOR_UNSELECTED_MARKER),
        Tone::Selected => Some(settings::COLOR_SELECTED_TEXT),
        Tone::Item => Some(settings::COLOR_ITEM),
        Tone::Prompt => Some(settings::COLOR_PROMPT),
        Tone::Input => Some(settings::COLOR_INPUT),
        Tone::Placeholder => Some(settings::COLOR_PLACEHOLDER),
        Tone::Info => Some(settings::COLOR_INFO),
        Tone::Error => Some(settings::COLOR_ERROR),
        Tone::HelpKey => Some(settings::COLOR_HELP_KEY),
        Tone::HelpText => Some(settings::COLOR_HELP_TEXT),
    }
}

fn is_emphasized(tone: Tone) -> bool {
    matches!(tone, Tone::Title | Tone::Selected | Tone::Error)
}
