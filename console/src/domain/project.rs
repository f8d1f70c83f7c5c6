//! Project identifiers and the scope a member universe is loaded for.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Member;

/// Server-issued project identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(i64);

impl ProjectId {
    /// Wrap a raw identifier, rejecting non-positive values.
    pub fn new(raw: i64) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    /// Raw identifier as sent on the wire.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context that decides which universe of assignable users is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UniverseScope {
    /// Every registered account.
    #[default]
    Global,
    /// Members of one project.
    Project(ProjectId),
}

/// A project together with the members that can be assigned inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMembers {
    /// Project identifier.
    pub project_id: ProjectId,
    /// Project title shown in the selector.
    pub project_name: String,
    /// Members of the project, in server order.
    pub members: Vec<Member>,
}
