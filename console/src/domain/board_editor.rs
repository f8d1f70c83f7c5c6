//! Board creation and edit screen session.
//!
//! One [`BoardEditor`] lives for as long as its screen. It loads the member
//! universe and, in the edit flow, the existing board; the two loads may
//! finish in either order. Loads are stamped with the visit they were issued
//! in, and results arriving after the screen was re-entered are dropped so a
//! slow first load cannot clobber a newer one.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::membership::{MembershipError, ReconciliationEngine};
use crate::domain::ports::{
    BoardCommand, BoardCommandError, BoardQuery, BoardQueryError, UniverseSource,
    UniverseSourceError,
};
use crate::domain::{
    BoardDetail, BoardDraft, BoardId, BoardSubmission, Error, Member, MemberId, UniverseScope,
};

/// Which flow the screen serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// A new board; current members start empty.
    Create,
    /// An existing board whose membership is fetched from the server.
    Edit(BoardId),
}

impl EditorMode {
    /// Board being edited, if any.
    pub fn board_id(self) -> Option<BoardId> {
        match self {
            Self::Create => None,
            Self::Edit(board_id) => Some(board_id),
        }
    }
}

/// Stamp carried by an in-flight load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    visit: u64,
}

/// What happened to a load result handed back to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result was applied to the screen state.
    Applied,
    /// The result belonged to an earlier visit and was dropped.
    Discarded,
}

/// Session state of one board creation or edit screen.
pub struct BoardEditor<U, Q, C> {
    universe_source: Arc<U>,
    board_query: Arc<Q>,
    board_command: Arc<C>,
    mode: EditorMode,
    scope: UniverseScope,
    visit: u64,
    engine: ReconciliationEngine,
    draft: BoardDraft,
    last_error: Option<Error>,
}

impl<U, Q, C> BoardEditor<U, Q, C> {
    /// Session for the creation flow.
    pub fn create(universe_source: Arc<U>, board_query: Arc<Q>, board_command: Arc<C>) -> Self {
        Self::with_engine(
            EditorMode::Create,
            ReconciliationEngine::for_new_entity(),
            universe_source,
            board_query,
            board_command,
        )
    }

    /// Session for the edit flow of `board_id`.
    pub fn edit(
        board_id: BoardId,
        universe_source: Arc<U>,
        board_query: Arc<Q>,
        board_command: Arc<C>,
    ) -> Self {
        Self::with_engine(
            EditorMode::Edit(board_id),
            ReconciliationEngine::new(),
            universe_source,
            board_query,
            board_command,
        )
    }

    fn with_engine(
        mode: EditorMode,
        engine: ReconciliationEngine,
        universe_source: Arc<U>,
        board_query: Arc<Q>,
        board_command: Arc<C>,
    ) -> Self {
        Self {
            universe_source,
            board_query,
            board_command,
            mode,
            scope: UniverseScope::Global,
            visit: 0,
            engine,
            draft: BoardDraft::default(),
            last_error: None,
        }
    }

    /// Load the universe for `scope` instead of the global user pool.
    #[must_use]
    pub fn with_scope(mut self, scope: UniverseScope) -> Self {
        self.scope = scope;
        self
    }

    /// Flow served by this session.
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Membership state of the screen.
    pub fn engine(&self) -> &ReconciliationEngine {
        &self.engine
    }

    /// Members that can still be added.
    pub fn available(&self) -> &[Member] {
        self.engine.available()
    }

    /// Current members in display order.
    pub fn current(&self) -> &[Member] {
        self.engine.current()
    }

    /// Non-membership fields of the board.
    pub fn draft(&self) -> &BoardDraft {
        &self.draft
    }

    /// Mutable access to the non-membership fields.
    pub fn draft_mut(&mut self) -> &mut BoardDraft {
        &mut self.draft
    }

    /// Inline message of the last failed load or submit.
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Start a new visit of the screen.
    ///
    /// Loads issued before this call are discarded when they complete.
    /// Current members survive; the next loads replace or reconcile them.
    pub fn begin_visit(&mut self) {
        self.visit += 1;
        self.last_error = None;
    }

    /// Stamp for a load issued now.
    pub fn ticket(&self) -> LoadTicket {
        LoadTicket { visit: self.visit }
    }

    /// Move `user_id` into the current members.
    ///
    /// # Errors
    ///
    /// Propagates the engine's [`MembershipError`] rejections.
    pub fn add_member(&mut self, user_id: &MemberId) -> Result<(), MembershipError> {
        self.engine.add(user_id)
    }

    /// Move `user_id` out of the current members.
    ///
    /// # Errors
    ///
    /// Propagates the engine's [`MembershipError`] rejections.
    pub fn remove_member(&mut self, user_id: &MemberId) -> Result<(), MembershipError> {
        self.engine.remove(user_id)
    }

    /// Apply a completed universe load.
    ///
    /// On failure the previous universe (possibly none) stays in place and
    /// the error becomes the inline message.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::LoadFailed`] when the fetch failed.
    pub fn apply_universe(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Member>, UniverseSourceError>,
    ) -> Result<LoadOutcome, Error> {
        if self.is_stale(ticket) {
            debug!(ticket = ticket.visit, visit = self.visit, "discarding stale universe load");
            return Ok(LoadOutcome::Discarded);
        }
        match result {
            Ok(universe) => {
                debug!(users = universe.len(), "applying universe load");
                self.engine.load_universe(universe);
                Ok(LoadOutcome::Applied)
            }
            Err(err) => Err(self.record_load_failure(&err, err.is_retryable())),
        }
    }

    /// Apply a completed board fetch of the edit flow.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::LoadFailed`] when the fetch failed.
    pub fn apply_membership(
        &mut self,
        ticket: LoadTicket,
        result: Result<BoardDetail, BoardQueryError>,
    ) -> Result<LoadOutcome, Error> {
        if self.is_stale(ticket) {
            debug!(ticket = ticket.visit, visit = self.visit, "discarding stale board load");
            return Ok(LoadOutcome::Discarded);
        }
        match result {
            Ok(detail) => {
                debug!(board_id = %detail.id, members = detail.members.len(), "applying board load");
                self.draft = detail.draft;
                self.engine.seed_members(detail.members);
                Ok(LoadOutcome::Applied)
            }
            Err(err) => Err(self.record_load_failure(&err, err.is_retryable())),
        }
    }

    fn is_stale(&self, ticket: LoadTicket) -> bool {
        ticket.visit != self.visit
    }

    fn record_load_failure(&mut self, err: &dyn std::error::Error, retryable: bool) -> Error {
        warn!(error = %err, retryable, "membership load failed");
        let error = Error::load_failed(err.to_string()).with_details(json!({ "retryable": retryable }));
        self.last_error = Some(error.clone());
        error
    }

    fn record_submit_failure(&mut self, err: &BoardCommandError) -> Error {
        warn!(error = %err, retryable = err.is_retryable(), "board submit failed");
        let error = Error::submit_failed(err.to_string())
            .with_details(json!({ "retryable": err.is_retryable() }));
        self.last_error = Some(error.clone());
        error
    }
}

impl<U, Q, C> BoardEditor<U, Q, C>
where
    U: UniverseSource,
    Q: BoardQuery,
    C: BoardCommand,
{
    /// Run the loads of the current visit and apply their results.
    ///
    /// The edit flow fetches the universe and the board concurrently. Both
    /// results are applied even when one of them fails.
    ///
    /// # Errors
    ///
    /// Returns the first [`crate::domain::ErrorCode::LoadFailed`] error.
    pub async fn load(&mut self) -> Result<(), Error> {
        let ticket = self.ticket();
        match self.mode {
            EditorMode::Create => {
                let universe = self.universe_source.load_universe(&self.scope).await;
                self.apply_universe(ticket, universe)?;
            }
            EditorMode::Edit(board_id) => {
                let (universe, board) = tokio::join!(
                    self.universe_source.load_universe(&self.scope),
                    self.board_query.fetch_board(board_id),
                );
                let universe_outcome = self.apply_universe(ticket, universe);
                let board_outcome = self.apply_membership(ticket, board);
                universe_outcome?;
                board_outcome?;
            }
        }
        Ok(())
    }

    /// Send the board with its current members to the server.
    ///
    /// The member list is sent verbatim and replaces the stored one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::InvalidRequest`] while the current
    /// members are unknown, and [`crate::domain::ErrorCode::SubmitFailed`]
    /// when the write failed.
    pub async fn submit(&mut self) -> Result<BoardSubmission, Error> {
        if !self.engine.members_loaded() {
            return Err(Error::invalid_request("current members have not loaded yet"));
        }

        let submission = BoardSubmission {
            board_id: self.mode.board_id(),
            draft: self.draft.clone(),
            member_list: self.engine.submit(),
        };
        let result = match self.mode {
            EditorMode::Create => self.board_command.create_board(&submission).await,
            EditorMode::Edit(_) => self.board_command.update_board(&submission).await,
        };
        match result {
            Ok(()) => {
                debug!(members = submission.member_list.len(), "board submitted");
                self.last_error = None;
                Ok(submission)
            }
            Err(err) => Err(self.record_submit_failure(&err)),
        }
    }
}

#[cfg(test)]
#[path = "board_editor_tests.rs"]
mod tests;
