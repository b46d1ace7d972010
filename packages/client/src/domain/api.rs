//! Backend API port.
//!
//! The domain depends on this trait only; `infrastructure::api` provides the
//! HTTP implementation (dependency inversion, same as a repository).

use async_trait::async_trait;

use super::{
    entity::{PlaybackState, Room, RoomDetails, RoomSettings},
    error::ApiError,
    value_object::RoomCode,
};

/// Outbound calls to the room backend and the playback proxy behind it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomApi: Send + Sync {
    /// POST /api/create-room
    async fn create_room(&self, settings: RoomSettings) -> Result<Room, ApiError>;

    /// PATCH /api/update-room; success is decided by status alone
    async fn update_room(&self, code: &RoomCode, settings: RoomSettings)
    -> Result<(), ApiError>;

    /// GET /api/user-in-room; `None` when the user is in no room
    async fn current_room(&self) -> Result<Option<RoomCode>, ApiError>;

    /// GET /api/get-room?code=
    async fn get_room(&self, code: &RoomCode) -> Result<RoomDetails, ApiError>;

    /// POST /api/join-room
    async fn join_room(&self, code: &RoomCode) -> Result<(), ApiError>;

    /// POST /api/leave-room
    async fn leave_room(&self) -> Result<(), ApiError>;

    /// GET /spotify/current-song; `None` when nothing is playing
    async fn current_song(&self) -> Result<Option<PlaybackState>, ApiError>;

    /// GET /spotify/is-authenticated
    async fn is_authenticated(&self) -> Result<bool, ApiError>;

    /// GET /spotify/get-auth-url
    async fn auth_url(&self) -> Result<String, ApiError>;

    /// PUT /spotify/play
    async fn play(&self) -> Result<(), ApiError>;

    /// PUT /spotify/pause
    async fn pause(&self) -> Result<(), ApiError>;

    /// POST /spotify/skip
    async fn skip(&self) -> Result<(), ApiError>;
}
