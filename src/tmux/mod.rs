//! Session backend gateway.
//!
//! The state machine only sees [`SessionBackend`]; [`TmuxBackend`] is the
//! production implementation and tests substitute an in-memory double.

mod management;
pub(crate) mod process;

use crate::error::BackendError;

pub use management::{parse_session_list, ClientContext, TmuxBackend};

/// Blocking session operations issued to the external multiplexer.
///
/// Every call is a full round trip: the multiplexer is authoritative, so no
/// operation pre-checks existence or uniqueness.
pub trait SessionBackend {
    /// Enumerate live session names in backend order.
    fn list_sessions(&mut self) -> Result<Vec<String>, BackendError>;
    /// Terminate one session.
    fn kill_session(&mut self, name: &str) -> Result<(), BackendError>;
    /// Make `name` the active client session.
    fn switch_session(&mut self, name: &str) -> Result<(), BackendError>;
    /// Create a new detached session.
    fn create_session(&mut self, name: &str) -> Result<(), BackendError>;
    /// Rename `old` to `new`.
    fn rename_session(&mut self, old: &str, new: &str) -> Result<(), BackendError>;
}
