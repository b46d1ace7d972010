//! Infrastructure layer: wire formats and the HTTP adapter for `RoomApi`.

pub mod api;
pub mod dto;

pub use api::HttpRoomApi;
