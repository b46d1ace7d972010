//! Core domain models for the House Party client.

use serde::{Deserialize, Serialize};

use super::value_object::{RoomCode, VotesToSkip};

/// Settings a host chooses for a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSettings {
    /// Guest votes required to skip the current track
    pub votes_to_skip: VotesToSkip,
    /// Whether guests may play and pause
    pub guest_can_pause: bool,
}

impl RoomSettings {
    pub fn new(votes_to_skip: VotesToSkip, guest_can_pause: bool) -> Self {
        Self {
            votes_to_skip,
            guest_can_pause,
        }
    }
}

impl Default for RoomSettings {
    fn default() -> Self {
        Self {
            votes_to_skip: VotesToSkip::default(),
            guest_can_pause: true,
        }
    }
}

/// A shared listening session as last seen by this client.
///
/// The server owns rooms; this is a read-through copy and is never
/// authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Room code (unique, server-assigned)
    pub code: RoomCode,
    /// Current settings
    pub settings: RoomSettings,
}

/// Room as seen by a member, including whether the viewer hosts it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDetails {
    pub code: RoomCode,
    pub settings: RoomSettings,
    pub is_host: bool,
}

/// Currently playing track with vote tally.
///
/// Refreshed by polling; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackState {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub image_url: String,
    pub is_playing: bool,
    /// Position in the track
    pub time_ms: u64,
    pub duration_ms: u64,
    pub votes: u32,
    pub votes_required: u32,
}

impl PlaybackState {
    /// Track progress in percent, clamped to `[0, 100]`.
    ///
    /// A zero duration yields 0; a position past the end (stale poll) yields
    /// 100.
    pub fn progress_percent(&self) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        let percent = self.time_ms as f64 / self.duration_ms as f64 * 100.0;
        percent.clamp(0.0, 100.0)
    }
}

/// Client session: which room, if any, the user is in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    room_code: Option<RoomCode>,
}

impl Session {
    /// Session outside any room
    pub fn new() -> Self {
        Self::default()
    }

    /// Session already inside `code`
    pub fn in_room(code: RoomCode) -> Self {
        Self {
            room_code: Some(code),
        }
    }

    pub fn room_code(&self) -> Option<&RoomCode> {
        self.room_code.as_ref()
    }

    /// Record membership of `code`, replacing any previous room
    pub fn enter(&mut self, code: RoomCode) {
        self.room_code = Some(code);
    }

    /// Forget the current room
    pub fn clear(&mut self) {
        self.room_code = None;
    }
}
