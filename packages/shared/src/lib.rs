//! Shared utilities for House Party binaries.

pub mod logger;
pub mod time;
