//! Client configuration from command-line flags and environment variables.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::error::ClientError;

/// Whether failures of fire-and-forget calls (create, play, pause, skip)
/// reach the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FailurePolicy {
    /// Show every failure as a dismissible message
    #[default]
    Surface,
    /// Only log failures, matching the original browser front end
    Swallow,
}

impl FailurePolicy {
    /// Message to show for `err`, or `None` when failures are swallowed.
    pub fn surface<E: std::fmt::Display>(self, err: &E) -> Option<String> {
        tracing::warn!("{}", err);
        match self {
            FailurePolicy::Surface => Some(err.to_string()),
            FailurePolicy::Swallow => None,
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "houseparty")]
#[command(about = "Terminal client for House Party rooms", long_about = None)]
pub struct ClientConfig {
    /// Backend base URL
    #[arg(long, env = "HOUSEPARTY_BASE_URL", default_value = "http://127.0.0.1:8000")]
    pub base_url: String,

    /// Per-request timeout in milliseconds
    #[arg(long, env = "HOUSEPARTY_TIMEOUT_MS", default_value_t = 5000)]
    pub timeout_ms: u64,

    /// Interval between playback polls while in a room, in milliseconds
    #[arg(long, env = "HOUSEPARTY_POLL_INTERVAL_MS", default_value_t = 1000)]
    pub poll_interval_ms: u64,

    /// What to do with failed create and playback requests
    #[arg(long, env = "HOUSEPARTY_FAILURE_POLICY", value_enum, default_value_t = FailurePolicy::Surface)]
    pub failure_policy: FailurePolicy,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl ClientConfig {
    /// Reject settings that would make every request fail or the poller spin.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.timeout_ms == 0 {
            return Err(ClientError::Config("timeout must be greater than 0 ms".to_string()));
        }
        if self.poll_interval_ms == 0 {
            return Err(ClientError::Config(
                "poll interval must be greater than 0 ms".to_string(),
            ));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https:// (got {})",
                self.base_url
            )));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_ms: 5000,
            poll_interval_ms: 1000,
            failure_policy: FailurePolicy::Surface,
            log_level: "info".to_string(),
        }
    }
}
