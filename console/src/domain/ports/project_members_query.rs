//! Driven port for the project→member lists used by the issue screens.

use async_trait::async_trait;

use crate::domain::{Member, ProjectId, ProjectMembers};

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while listing projects or their members.
    pub enum ProjectMembersQueryError {
        /// Network transport failed before a response arrived.
        Transport { message: String } => "project list transport failed: {message}",
        /// The request exceeded its timeout.
        Timeout { message: String } => "project list request timed out: {message}",
        /// The session is not allowed to list projects.
        Unauthorized { message: String } => "project list request unauthorized: {message}",
        /// The server rejected the request.
        Rejected { message: String } => "project list request rejected: {message}",
        /// The response body could not be decoded.
        Decode { message: String } => "project list response decode failed: {message}",
    }
}

impl ProjectMembersQueryError {
    /// Return whether retrying this error is expected to help.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }
}

/// Port for listing projects with their assignable members.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectMembersQuery: Send + Sync {
    /// Every project visible to the session, each with its members.
    async fn list_projects_with_members(&self) -> Result<Vec<ProjectMembers>, ProjectMembersQueryError>;

    /// Members of a single project.
    async fn list_project_members(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<Member>, ProjectMembersQueryError>;
}
