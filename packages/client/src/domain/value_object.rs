//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Maximum room code length accepted by the backend.
pub const ROOM_CODE_MAX_LEN: usize = 8;

/// Room code value object.
///
/// Server-assigned identifier of a room. Stored upper-case; the backend
/// generates six upper-case ASCII letters but accepts up to eight
/// alphanumeric characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomCode(String);

impl RoomCode {
    /// Create a new RoomCode.
    ///
    /// # Arguments
    ///
    /// * `code` - The room code as typed or received; surrounding whitespace
    ///   is ignored and letters are upper-cased
    ///
    /// # Returns
    ///
    /// A Result containing the RoomCode or an error if validation fails
    pub fn new(code: impl AsRef<str>) -> Result<Self, ValueObjectError> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return Err(ValueObjectError::RoomCodeEmpty);
        }
        let len = code.chars().count();
        if len > ROOM_CODE_MAX_LEN {
            return Err(ValueObjectError::RoomCodeTooLong {
                max: ROOM_CODE_MAX_LEN,
                actual: len,
            });
        }
        if let Some(bad) = code.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(ValueObjectError::RoomCodeInvalidCharacter(bad));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomCode {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoomCode> for String {
    fn from(code: RoomCode) -> Self {
        code.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of guest votes required to skip the current track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct VotesToSkip(u32);

impl VotesToSkip {
    /// Lowest accepted threshold.
    pub const MIN: u32 = 1;

    /// Create a new VotesToSkip, rejecting values below 1.
    pub fn new(value: i64) -> Result<Self, ValueObjectError> {
        if value < i64::from(Self::MIN) {
            return Err(ValueObjectError::VotesToSkipTooLow(value));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| ValueObjectError::VotesToSkipNotANumber(value.to_string()))
    }

    /// Parse raw form input.
    pub fn parse(raw: &str) -> Result<Self, ValueObjectError> {
        let trimmed = raw.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ValueObjectError::VotesToSkipNotANumber(trimmed.to_string()))?;
        Self::new(value)
    }

    /// Get the inner value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for VotesToSkip {
    /// The settings form starts at two votes.
    fn default() -> Self {
        Self(2)
    }
}

impl TryFrom<i64> for VotesToSkip {
    type Error = ValueObjectError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VotesToSkip> for u32 {
    fn from(votes: VotesToSkip) -> Self {
        votes.0
    }
}

impl fmt::Display for VotesToSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
