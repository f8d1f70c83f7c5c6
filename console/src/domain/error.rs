//! Inline errors reported by the board screens.
//!
//! Every failure the console surfaces is tied to the action that produced
//! it: a load, a submit, or a submit attempted too early. None of them are
//! fatal and the action can be repeated.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which screen action failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The action cannot run in the screen's current state.
    InvalidRequest,
    /// Fetching the universe or the existing membership failed.
    LoadFailed,
    /// Writing the edited entity back to the server failed.
    SubmitFailed,
}

/// Inline error message of a screen.
///
/// The message is never blank. `details` carries structured context such as
/// `{ "retryable": true }`.
///
/// # Examples
/// ```
/// use schedule_console::domain::{Error, ErrorCode};
///
/// let err = Error::load_failed("user list unavailable");
/// assert_eq!(err.code(), ErrorCode::LoadFailed);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
#[error("{message}")]
pub struct Error {
    code: ErrorCode,
    message: String,
    details: Option<Value>,
}

/// Rejections raised while building an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The message was empty or whitespace only.
    #[error("error message must not be empty")]
    EmptyMessage,
}

impl Error {
    /// Build an error, falling back to the code's name for a blank message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::try_new(code, message).unwrap_or_else(|_| Self {
            code,
            message: format!("{code:?}"),
            details: None,
        })
    }

    /// Build an error, rejecting blank messages.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorValidationError::EmptyMessage`] when `message` is blank.
    pub fn try_new(code: ErrorCode, message: impl Into<String>) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            details: None,
        })
    }

    /// An action attempted while the screen state forbids it.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// A failed universe or board fetch.
    pub fn load_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::LoadFailed, message)
    }

    /// A failed create or update.
    pub fn submit_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SubmitFailed, message)
    }

    /// Attach structured details.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorDto {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        Self {
            code: value.code,
            message: value.message,
            details: value.details,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        let error = Self::try_new(value.code, value.message)?;
        Ok(match value.details {
            Some(details) => error.with_details(details),
            None => error,
        })
    }
}
