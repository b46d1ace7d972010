//! Top-level error type for the client binary.

use thiserror::Error;

use crate::domain::ApiError;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Backend call that the shell cannot recover from
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Line editor failure
    #[error("Input error: {0}")]
    Input(String),
}
