//! Driven ports for the schedule server.
//!
//! The domain owns the request and response shapes; outbound adapters only
//! translate them to and from the wire.

mod macros;

mod board_command;
mod board_query;
mod project_members_query;
mod universe_source;

pub(crate) use macros::define_port_error;

#[cfg(test)]
pub use board_command::MockBoardCommand;
pub use board_command::{BoardCommand, BoardCommandError};
#[cfg(test)]
pub use board_query::MockBoardQuery;
pub use board_query::{BoardQuery, BoardQueryError, FixtureBoardQuery};
#[cfg(test)]
pub use project_members_query::MockProjectMembersQuery;
pub use project_members_query::{ProjectMembersQuery, ProjectMembersQueryError};
#[cfg(test)]
pub use universe_source::MockUniverseSource;
pub use universe_source::{FixtureUniverseSource, UniverseSource, UniverseSourceError};
