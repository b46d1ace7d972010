//! HTTP request/response DTOs for the room backend.
//!
//! Field names follow the backend's snake_case JSON. Conversion into domain
//! models validates codes and thresholds, so a malformed response surfaces
//! as a decode error rather than an invalid domain value.

use serde::{Deserialize, Serialize};

use crate::domain::{
    PlaybackState, Room, RoomCode, RoomDetails, RoomSettings, ValueObjectError, VotesToSkip,
};

/// Body of POST /api/create-room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub votes_to_skip: u32,
    pub guest_can_pause: bool,
}

impl From<RoomSettings> for CreateRoomRequest {
    fn from(settings: RoomSettings) -> Self {
        Self {
            votes_to_skip: settings.votes_to_skip.value(),
            guest_can_pause: settings.guest_can_pause,
        }
    }
}

/// Body of PATCH /api/update-room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoomRequest {
    pub votes_to_skip: u32,
    pub guest_can_pause: bool,
    pub code: String,
}

/// Body of POST /api/join-room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRoomRequest {
    pub code: String,
}

/// Room as returned by create-room.
///
/// Only `code` is guaranteed; missing settings fall back to what was sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDto {
    pub code: String,
    #[serde(default)]
    pub votes_to_skip: Option<i64>,
    #[serde(default)]
    pub guest_can_pause: Option<bool>,
}

impl RoomDto {
    pub fn into_room(self, requested: RoomSettings) -> Result<Room, ValueObjectError> {
        let votes_to_skip = match self.votes_to_skip {
            Some(votes) => VotesToSkip::new(votes)?,
            None => requested.votes_to_skip,
        };
        Ok(Room {
            code: RoomCode::new(&self.code)?,
            settings: RoomSettings {
                votes_to_skip,
                guest_can_pause: self.guest_can_pause.unwrap_or(requested.guest_can_pause),
            },
        })
    }
}

/// Response of GET /api/user-in-room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInRoomResponse {
    #[serde(default)]
    pub code: Option<String>,
}

/// Response of GET /api/get-room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDetailDto {
    #[serde(default)]
    pub code: Option<String>,
    pub votes_to_skip: i64,
    pub guest_can_pause: bool,
    pub is_host: bool,
}

impl RoomDetailDto {
    pub fn into_details(self, requested: &RoomCode) -> Result<RoomDetails, ValueObjectError> {
        let code = match self.code {
            Some(code) => RoomCode::new(code)?,
            None => requested.clone(),
        };
        Ok(RoomDetails {
            code,
            settings: RoomSettings {
                votes_to_skip: VotesToSkip::new(self.votes_to_skip)?,
                guest_can_pause: self.guest_can_pause,
            },
            is_host: self.is_host,
        })
    }
}

/// Response of GET /spotify/current-song
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentSongDto {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Track length in milliseconds
    pub duration: u64,
    /// Position in milliseconds; the provider omits it between tracks
    #[serde(default)]
    pub time: Option<u64>,
    #[serde(default)]
    pub image_url: String,
    pub is_playing: bool,
    #[serde(default)]
    pub votes: u32,
    pub votes_required: u32,
}

impl From<CurrentSongDto> for PlaybackState {
    fn from(dto: CurrentSongDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            artist: dto.artist,
            image_url: dto.image_url,
            is_playing: dto.is_playing,
            time_ms: dto.time.unwrap_or(0),
            duration_ms: dto.duration,
            votes: dto.votes,
            votes_required: dto.votes_required,
        }
    }
}

/// Response of GET /spotify/is-authenticated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsAuthenticatedResponse {
    pub status: bool,
}

/// Response of GET /spotify/get-auth-url
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUrlResponse {
    pub url: String,
}

/// Pull a human-readable reason out of an error body.
///
/// The backend answers with single-entry objects such as
/// `{"Bad Request": "Invalid room code"}` or `{"error": "..."}`; the first
/// string value wins. Non-JSON bodies are returned trimmed.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => map
            .values()
            .find_map(|v| v.as_str().map(str::to_string))
            .unwrap_or_default(),
        Ok(serde_json::Value::String(s)) => s,
        _ => body.trim().to_string(),
    }
}
