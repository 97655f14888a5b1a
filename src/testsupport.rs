//! Shared test fixtures: an in-memory session backend and temp dirs.
//!
//! `MockBackend` behaves like a tiny multiplexer: names are unique, unknown
//! targets fail, and any operation can be forced to fail.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::BackendError;
use crate::tmux::SessionBackend;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("tsm-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Backend operation selector for failure injection and call records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    List,
    Kill,
    Switch,
    Create,
    Rename,
}

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub op: Op,
    pub args: Vec<String>,
}

/// In-memory [`SessionBackend`] double.
#[derive(Debug, Default)]
pub struct MockBackend {
    pub sessions: Vec<String>,
    pub active: Option<String>,
    pub calls: Vec<Call>,
    failing: Vec<Op>,
}

impl MockBackend {
    pub fn with_sessions(names: &[&str]) -> Self {
        Self {
            sessions: names.iter().map(|name| name.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Make every future call of `op` fail.
    pub fn fail_on(&mut self, op: Op) {
        if !self.failing.contains(&op) {
            self.failing.push(op);
        }
    }

    pub fn heal(&mut self, op: Op) {
        self.failing.retain(|failing| *failing != op);
    }

    /// Number of recorded calls for `op`.
    pub fn count(&self, op: Op) -> usize {
        self.calls.iter().filter(|call| call.op == op).count()
    }

    fn record(&mut self, op: Op, args: &[&str]) -> Result<(), BackendError> {
        self.calls.push(Call {
            op,
            args: args.iter().map(|arg| arg.to_string()).collect(),
        });
        if self.failing.contains(&op) {
            return Err(BackendError::failed(
                format!("{op:?} failed"),
                "injected failure",
            ));
        }
        Ok(())
    }

    fn position(&self, name: &str) -> Result<usize, BackendError> {
        self.sessions
            .iter()
            .position(|session| session == name)
            .ok_or_else(|| {
                BackendError::failed("session lookup failed", format!("can't find session: {name}"))
            })
    }
}

impl SessionBackend for MockBackend {
    fn list_sessions(&mut self) -> Result<Vec<String>, BackendError> {
        self.record(Op::List, &[])?;
        Ok(self.sessions.clone())
    }

    fn kill_session(&mut self, name: &str) -> Result<(), BackendError> {
        self.record(Op::Kill, &[name])?;
        let idx = self.position(name)?;
        self.sessions.remove(idx);
        Ok(())
    }

    fn switch_session(&mut self, name: &str) -> Result<(), BackendError> {
        self.record(Op::Switch, &[name])?;
        self.position(name)?;
        self.active = Some(name.to_string());
        Ok(())
    }

    fn create_session(&mut self, name: &str) -> Result<(), BackendError> {
        self.record(Op::Create, &[name])?;
        if self.sessions.iter().any(|session| session == name) {
            return Err(BackendError::failed(
                "create failed",
                format!("duplicate session: {name}"),
            ));
        }
        self.sessions.push(name.to_string());
        Ok(())
    }

    fn rename_session(&mut self, old: &str, new: &str) -> Result<(), BackendError> {
        self.record(Op::Rename, &[old, new])?;
        let idx = self.position(old)?;
        if old != new && self.sessions.iter().any(|session| session == new) {
            return Err(BackendError::failed(
                "rename failed",
                format!("duplicate session: {new}"),
            ));
        }
        self.sessions[idx] = new.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_files() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert!(file.starts_with(fixture.path()));
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn mock_behaves_like_a_multiplexer() {
        let mut mock = MockBackend::with_sessions(&["a", "b"]);
        mock.create_session("c").unwrap();
        assert!(mock.create_session("c").is_err());
        mock.rename_session("a", "z").unwrap();
        assert!(mock.kill_session("a").is_err());
        mock.kill_session("b").unwrap();
        assert_eq!(mock.list_sessions().unwrap(), vec!["z", "c"]);
        assert_eq!(mock.count(Op::Create), 2);
    }

    #[test]
    fn injected_failures_leave_sessions_alone() {
        let mut mock = MockBackend::with_sessions(&["a"]);
        mock.fail_on(Op::Kill);
        assert!(mock.kill_session("a").is_err());
        assert_eq!(mock.sessions, vec!["a"]);
        mock.heal(Op::Kill);
        mock.kill_session("a").unwrap();
        assert!(mock.sessions.is_empty());
    }
}
