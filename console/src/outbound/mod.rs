//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **schedule_api**: reqwest-backed client for the schedule server's board
//!   and issue endpoints
//!
//! Adapters are thin translators between domain types and wire payloads.
//! They contain no membership logic.

pub mod schedule_api;
