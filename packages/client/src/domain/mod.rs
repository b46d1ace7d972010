//! Domain layer for the House Party client.
//!
//! This module contains the room and playback model that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod api;
pub mod entity;
pub mod error;
pub mod value_object;

#[cfg(test)]
pub use api::MockRoomApi;
pub use api::RoomApi;
pub use entity::{PlaybackState, Room, RoomDetails, RoomSettings, Session};
pub use error::{ApiError, ValueObjectError};
pub use value_object::{RoomCode, VotesToSkip};
