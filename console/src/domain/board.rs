//! Board (bulletin post) entity shapes exchanged with the schedule server.
//!
//! Only the membership list is interpreted by the core. The remaining
//! editable fields travel through untouched.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Member;

/// Server-issued board identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(i64);

impl BoardId {
    /// Wrap a raw identifier, rejecting non-positive values.
    pub fn new(raw: i64) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    /// Raw identifier as sent on the wire.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Editable, non-membership fields of a board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardDraft {
    /// Title.
    pub name: String,
    /// Body text.
    pub content: String,
    /// First day of the scheduled period.
    pub start_date: Option<NaiveDate>,
    /// Last day of the scheduled period.
    pub end_date: Option<NaiveDate>,
}

/// Existing board as returned by the detail fetch of the edit flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDetail {
    /// Board identifier.
    pub id: BoardId,
    /// Editable fields.
    pub draft: BoardDraft,
    /// Members assigned to the board, in server order.
    pub members: Vec<Member>,
}

/// Write request for a new or edited board.
///
/// `member_list` replaces the stored membership wholesale; it is not a diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSubmission {
    /// Present when updating an existing board.
    pub board_id: Option<BoardId>,
    /// Editable fields.
    pub draft: BoardDraft,
    /// Current members, verbatim.
    pub member_list: Vec<Member>,
}
