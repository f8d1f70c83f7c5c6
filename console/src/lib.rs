//! Membership reconciliation core of the schedule admin console.
//!
//! The board creation and edit screens keep a set of current members and a
//! derived set of members still available for assignment. This crate owns
//! that state, the screen sessions that load and submit it, and a thin HTTP
//! adapter for the schedule server.

pub mod config;
pub mod domain;
pub mod outbound;
pub mod telemetry;
