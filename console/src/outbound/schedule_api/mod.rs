//! Schedule server outbound adapter.
//!
//! This module provides one HTTP client implementing the universe, board and
//! project member ports.

mod dto;
mod http_client;

pub use http_client::{ScheduleApiClient, ScheduleApiClientError};
