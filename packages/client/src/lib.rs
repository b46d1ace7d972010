//! House Party client library.
//!
//! This library provides the room and playback model, an HTTP client for
//! the House Party backend, and a terminal front end that creates, joins and
//! controls listening rooms.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod runner;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::{ClientConfig, FailurePolicy};
pub use error::ClientError;
pub use runner::run;
