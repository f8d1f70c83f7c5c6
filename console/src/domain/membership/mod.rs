//! Project-membership reconciliation.
//!
//! A screen that edits a board keeps two collections of members: the current
//! members of the entity and the members still available for assignment.
//! The available collection is never authoritative. It is always
//! `Universe \ CurrentMembers` keyed by user id, kept up to date
//! incrementally by [`ReconciliationEngine::add`] and
//! [`ReconciliationEngine::remove`] and recomputed whenever either input is
//! (re)loaded.

mod engine;
mod store;

pub use self::engine::{EngineState, MembershipError, ReconciliationEngine};
pub use self::store::MembershipStore;
