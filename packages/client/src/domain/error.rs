//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomCode validation error
    #[error("Room code cannot be empty")]
    RoomCodeEmpty,

    /// RoomCode too long error
    #[error("Room code cannot exceed {max} characters (got {actual})")]
    RoomCodeTooLong { max: usize, actual: usize },

    /// RoomCode contains something other than ASCII letters and digits
    #[error("Room code contains an invalid character: {0:?}")]
    RoomCodeInvalidCharacter(char),

    /// Votes-to-skip below the minimum of 1
    #[error("Votes required to skip must be at least 1 (got {0})")]
    VotesToSkipTooLow(i64),

    /// Votes-to-skip input that is not an integer
    #[error("Votes required to skip must be a whole number (got {0:?})")]
    VotesToSkipNotANumber(String),
}

/// Errors returned by the backend API port.
///
/// Mirrors the three ways a request can go wrong: it never got an answer
/// (transport, timeout), the server said no, or the answer was unreadable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Network failure before a response arrived
    #[error("Request failed: {0}")]
    Transport(String),

    /// No response within the configured timeout
    #[error("Request timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },

    /// Non-2xx response
    #[error("Server rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the error is a server-side rejection with the given status.
    pub fn is_status(&self, expected: u16) -> bool {
        matches!(self, ApiError::Rejected { status, .. } if *status == expected)
    }
}
