//! End-to-end state machine scenarios through the public API.
//!
//! A small in-memory backend stands in for tmux so every transition can be
//! observed without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tsm::chooser::{self, ChooserState, Screen};
use tsm::error::BackendError;
use tsm::session::{handle_key, ExitReason, Mode, SessionListState, StatusLevel, Transition};
use tsm::tmux::SessionBackend;
use tsm::tui::{chooser_frame, session_frame};

#[derive(Default)]
struct FakeTmux {
    sessions: Vec<String>,
    attached: Option<String>,
    down: bool,
}

impl FakeTmux {
    fn new(names: &[&str]) -> Self {
        Self {
            sessions: names.iter().map(|n| n.to_string()).collect(),
            ..Self::default()
        }
    }

    fn check_up(&self) -> Result<(), BackendError> {
        if self.down {
            Err(BackendError::failed("tmux unavailable", "server exited"))
        } else {
            Ok(())
        }
    }

    fn find(&self, name: &str) -> Result<usize, BackendError> {
        self.sessions
            .iter()
            .position(|s| s == name)
            .ok_or_else(|| BackendError::failed("lookup", format!("can't find session: {name}")))
    }
}

impl SessionBackend for FakeTmux {
    fn list_sessions(&mut self) -> Result<Vec<String>, BackendError> {
        self.check_up()?;
        Ok(self.sessions.clone())
    }

    fn kill_session(&mut self, name: &str) -> Result<(), BackendError> {
        self.check_up()?;
        let idx = self.find(name)?;
        self.sessions.remove(idx);
        Ok(())
    }

    fn switch_session(&mut self, name: &str) -> Result<(), BackendError> {
        self.check_up()?;
        self.find(name)?;
        self.attached = Some(name.to_string());
        Ok(())
    }

    fn create_session(&mut self, name: &str) -> Result<(), BackendError> {
        self.check_up()?;
        if self.find(name).is_ok() {
            return Err(BackendError::failed("create", format!("duplicate session: {name}")));
        }
        self.sessions.push(name.to_string());
        Ok(())
    }

    fn rename_session(&mut self, old: &str, new: &str) -> Result<(), BackendError> {
        self.check_up()?;
        let idx = self.find(old)?;
        self.sessions[idx] = new.to_string();
        Ok(())
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn keys_for(text: &str) -> Vec<KeyEvent> {
    text.chars().map(|c| key(KeyCode::Char(c))).collect()
}

fn drive(state: &mut SessionListState, tmux: &mut FakeTmux, keys: &[KeyEvent]) -> Transition {
    let mut last = Transition::Continue;
    for k in keys {
        last = handle_key(state, *k, tmux);
    }
    last
}

#[test]
fn kill_then_switch_scenario() {
    let mut tmux = FakeTmux::new(&["s1", "s2", "s3"]);
    let mut state = SessionListState::load(&mut tmux, 20).unwrap();

    drive(&mut state, &mut tmux, &keys_for("jjd"));
    assert_eq!(state.sessions(), ["s1", "s2"]);
    assert_eq!(state.cursor(), 1);
    assert_eq!(tmux.sessions, vec!["s1", "s2"]);

    let t = drive(&mut state, &mut tmux, &[key(KeyCode::Enter)]);
    assert_eq!(
        t,
        Transition::Exit(ExitReason::Switched {
            session: "s2".into()
        })
    );
    assert_eq!(tmux.attached.as_deref(), Some("s2"));
}

#[test]
fn create_rename_and_filter_scenario() {
    let mut tmux = FakeTmux::new(&["alpha"]);
    let mut state = SessionListState::load(&mut tmux, 20).unwrap();

    let mut keys = vec![key(KeyCode::Char('c'))];
    keys.extend(keys_for("beta"));
    keys.push(key(KeyCode::Enter));
    drive(&mut state, &mut tmux, &keys);
    assert_eq!(state.mode(), Mode::Managing);
    assert_eq!(state.sessions(), ["alpha", "beta"]);

    let mut keys = vec![key(KeyCode::Char('j')), key(KeyCode::Char('r'))];
    keys.extend(keys_for("bravo"));
    keys.push(key(KeyCode::Enter));
    drive(&mut state, &mut tmux, &keys);
    assert_eq!(state.sessions(), ["alpha", "bravo"]);

    let mut keys = vec![key(KeyCode::Char('/'))];
    keys.extend(keys_for("br"));
    keys.push(key(KeyCode::Enter));
    drive(&mut state, &mut tmux, &keys);
    assert_eq!(state.sessions(), ["bravo"]);
    assert_eq!(state.cursor(), 0);

    drive(&mut state, &mut tmux, &[key(KeyCode::Esc)]);
    assert_eq!(state.sessions(), ["alpha", "bravo"]);
}

#[test]
fn backend_outage_is_reported_not_fatal() {
    let mut tmux = FakeTmux::new(&["a", "b"]);
    let mut state = SessionListState::load(&mut tmux, 20).unwrap();
    tmux.down = true;

    for k in [key(KeyCode::Char('d')), key(KeyCode::Enter), key(KeyCode::Esc)] {
        assert_eq!(drive(&mut state, &mut tmux, &[k]), Transition::Continue);
        assert_eq!(state.sessions(), ["a", "b"]);
        assert_eq!(state.status().unwrap().level, StatusLevel::Error);
        let frame = session_frame(&state, false).text_lines();
        assert!(frame.iter().any(|l| l.contains("server exited")));
    }
}

#[test]
fn initial_list_failure_is_an_error() {
    let mut tmux = FakeTmux::new(&["a"]);
    tmux.down = true;
    assert!(SessionListState::load(&mut tmux, 20).is_err());
}

#[test]
fn chooser_opens_sessions_and_quits() {
    let mut tmux = FakeTmux::new(&["main"]);
    let mut state = ChooserState::new(20);
    assert!(chooser_frame(&state, false).text_lines()[0].starts_with("Choose"));

    chooser::handle_key(&mut state, key(KeyCode::Char('s')), &mut tmux);
    assert!(matches!(state.screen(), Screen::Sessions(_)));
    assert_eq!(chooser_frame(&state, false).text_lines()[1], "  > main");

    let t = chooser::handle_key(&mut state, key(KeyCode::Char('q')), &mut tmux);
    assert_eq!(t, Transition::Exit(ExitReason::Quit));
}
