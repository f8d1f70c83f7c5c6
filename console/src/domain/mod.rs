//! Domain primitives, the membership reconciliation core and the screen
//! sessions that drive it.
//!
//! Public surface:
//! - Error / ErrorCode — inline error payload shown by a screen.
//! - Member / MemberId — user identity records.
//! - membership — current/available reconciliation engine.
//! - BoardEditor — board creation and edit screen session.
//! - AssigneePicker — project→member cascade of the issue screens.
//! - ports — driven ports implemented by outbound adapters.

pub mod board;
pub mod board_editor;
pub mod error;
pub mod issue_assignment;
pub mod member;
pub mod membership;
pub mod ports;
pub mod project;

pub use self::board::{BoardDetail, BoardDraft, BoardId, BoardSubmission};
pub use self::board_editor::{BoardEditor, EditorMode, LoadOutcome, LoadTicket};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::issue_assignment::{AssigneePicker, AssignmentError};
pub use self::member::{Member, MemberId, MemberValidationError};
pub use self::project::{ProjectId, ProjectMembers, UniverseScope};
