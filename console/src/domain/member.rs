//! Member identity model shared by the board and issue screens.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`Member::try_from_strings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValidationError {
    EmptyId,
    InvalidId,
}

impl fmt::Display for MemberValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must not carry surrounding whitespace"),
        }
    }
}

impl std::error::Error for MemberValidationError {}

/// Stable identity key of a member as issued by the schedule server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MemberId(String);

impl MemberId {
    /// Validate and construct a [`MemberId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, MemberValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    fn from_owned(id: String) -> Result<Self, MemberValidationError> {
        if id.trim().is_empty() {
            return Err(MemberValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(MemberValidationError::InvalidId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for MemberId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<MemberId> for String {
    fn from(value: MemberId) -> Self {
        value.0
    }
}

impl TryFrom<String> for MemberId {
    type Error = MemberValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// A user that can be assigned to a board or an issue.
///
/// The core never edits a member record; it only moves records between the
/// current and available collections. Equality compares every field, so two
/// snapshots of the same `user_id` with different names are distinct values.
///
/// ## Invariants
/// - `user_id` is non-empty and carries no surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MemberDto", into = "MemberDto")]
pub struct Member {
    user_id: MemberId,
    user_name: String,
    email: String,
}

impl Member {
    /// Build a new [`Member`] from a validated identifier.
    pub fn new(user_id: MemberId, user_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
            email: email.into(),
        }
    }

    /// Build a new [`Member`] from string inputs, panicking if validation fails.
    ///
    /// Prefer [`Member::new`] when the identifier is already validated.
    pub fn from_strings(
        user_id: impl AsRef<str>,
        user_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        match Self::try_from_strings(user_id, user_name, email) {
            Ok(value) => value,
            Err(err) => panic!("member string values must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor enforcing the identifier invariant.
    pub fn try_from_strings(
        user_id: impl AsRef<str>,
        user_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, MemberValidationError> {
        Ok(Self::new(MemberId::new(user_id)?, user_name, email))
    }

    /// Stable identity key.
    pub fn user_id(&self) -> &MemberId {
        &self.user_id
    }

    /// Name shown in the member lists.
    pub fn user_name(&self) -> &str {
        self.user_name.as_str()
    }

    /// Contact address shown under the name.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MemberDto {
    user_id: String,
    #[serde(default)]
    user_name: String,
    #[serde(default)]
    email: String,
}

impl From<Member> for MemberDto {
    fn from(value: Member) -> Self {
        let Member {
            user_id,
            user_name,
            email,
        } = value;
        Self {
            user_id: user_id.into(),
            user_name,
            email,
        }
    }
}

impl TryFrom<MemberDto> for Member {
    type Error = MemberValidationError;

    fn try_from(value: MemberDto) -> Result<Self, Self::Error> {
        let MemberDto {
            user_id,
            user_name,
            email,
        } = value;
        Ok(Self::new(MemberId::try_from(user_id)?, user_name, email))
    }
}
