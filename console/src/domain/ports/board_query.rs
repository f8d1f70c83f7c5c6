//! Driven port for fetching an existing board in the edit flow.

use async_trait::async_trait;

use crate::domain::{BoardDetail, BoardId};

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while fetching a board.
    pub enum BoardQueryError {
        /// No board exists with the requested identifier.
        NotFound { board_id: BoardId } => "board {board_id} not found",
        /// Network transport failed before a response arrived.
        Transport { message: String } => "board fetch transport failed: {message}",
        /// The request exceeded its timeout.
        Timeout { message: String } => "board fetch timed out: {message}",
        /// The session is not allowed to read the board.
        Unauthorized { message: String } => "board fetch unauthorized: {message}",
        /// The server rejected the request.
        Rejected { message: String } => "board fetch rejected: {message}",
        /// The response body could not be decoded.
        Decode { message: String } => "board response decode failed: {message}",
    }
}

impl BoardQueryError {
    /// Return whether retrying this error is expected to help.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }
}

/// Port for reading a board together with its membership list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardQuery: Send + Sync {
    /// Fetch the board identified by `board_id`.
    async fn fetch_board(&self, board_id: BoardId) -> Result<BoardDetail, BoardQueryError>;
}

/// In-memory board store keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct FixtureBoardQuery {
    boards: Vec<BoardDetail>,
}

impl FixtureBoardQuery {
    /// Serve the given boards.
    pub fn new(boards: Vec<BoardDetail>) -> Self {
        Self { boards }
    }
}

#[async_trait]
impl BoardQuery for FixtureBoardQuery {
    async fn fetch_board(&self, board_id: BoardId) -> Result<BoardDetail, BoardQueryError> {
        self.boards
            .iter()
            .find(|board| board.id == board_id)
            .cloned()
            .ok_or_else(|| BoardQueryError::not_found(board_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BoardDraft;
    use rstest::rstest;

    fn board_id(raw: i64) -> BoardId {
        BoardId::new(raw).expect("positive board id")
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_reports_missing_boards() {
        let query = FixtureBoardQuery::new(vec![BoardDetail {
            id: board_id(1),
            draft: BoardDraft::default(),
            members: Vec::new(),
        }]);

        assert!(query.fetch_board(board_id(1)).await.is_ok());
        let err = query.fetch_board(board_id(2)).await.expect_err("missing board");
        assert_eq!(err, BoardQueryError::not_found(board_id(2)));
        assert_eq!(err.to_string(), "board 2 not found");
    }
}
