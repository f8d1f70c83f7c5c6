//! Driven port for loading the universe of assignable users.

use async_trait::async_trait;

use crate::domain::{Member, UniverseScope};

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while loading a member universe.
    pub enum UniverseSourceError {
        /// Network transport failed before a response arrived.
        Transport { message: String } => "user list transport failed: {message}",
        /// The request exceeded its timeout.
        Timeout { message: String } => "user list request timed out: {message}",
        /// The session is not allowed to list users.
        Unauthorized { message: String } => "user list request unauthorized: {message}",
        /// The server rejected the request.
        Rejected { message: String } => "user list request rejected: {message}",
        /// The response body could not be decoded.
        Decode { message: String } => "user list response decode failed: {message}",
    }
}

impl UniverseSourceError {
    /// Return whether retrying this error is expected to help.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }
}

/// Port for fetching every user eligible for assignment in a scope.
///
/// The order of the returned list is the server's and is not sorted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UniverseSource: Send + Sync {
    /// Fetch the candidate list for `scope`.
    async fn load_universe(&self, scope: &UniverseScope) -> Result<Vec<Member>, UniverseSourceError>;
}

/// In-memory universe returning the same members for every scope.
#[derive(Debug, Clone, Default)]
pub struct FixtureUniverseSource {
    members: Vec<Member>,
}

impl FixtureUniverseSource {
    /// Serve `members` for every request.
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }
}

#[async_trait]
impl UniverseSource for FixtureUniverseSource {
    async fn load_universe(&self, _scope: &UniverseScope) -> Result<Vec<Member>, UniverseSourceError> {
        Ok(self.members.clone())
    }
}
