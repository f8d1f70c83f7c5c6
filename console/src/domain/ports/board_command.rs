//! Driven port for writing boards back to the schedule server.

use async_trait::async_trait;

use crate::domain::BoardSubmission;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while writing a board.
    pub enum BoardCommandError {
        /// Network transport failed before a response arrived.
        Transport { message: String } => "board write transport failed: {message}",
        /// The request exceeded its timeout.
        Timeout { message: String } => "board write timed out: {message}",
        /// The session is not allowed to write the board.
        Unauthorized { message: String } => "board write unauthorized: {message}",
        /// The server rejected the request.
        Rejected { message: String } => "board write rejected: {message}",
    }
}

impl BoardCommandError {
    /// Return whether retrying this error is expected to help.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }
}

/// Port for creating and updating boards.
///
/// Both operations replace the stored membership with
/// `submission.member_list`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardCommand: Send + Sync {
    /// Insert a new board.
    async fn create_board(&self, submission: &BoardSubmission) -> Result<(), BoardCommandError>;

    /// Update an existing board; `submission.board_id` is set.
    async fn update_board(&self, submission: &BoardSubmission) -> Result<(), BoardCommandError>;
}
