//! UseCase: 再生操作 (play / pause / skip)
//!
//! API を直接呼ぶだけで、ローカルの再生状態は更新しません。
//! 表示される状態は次のポーリングで反映されます。

use std::sync::Arc;

use crate::domain::RoomApi;

use super::error::PlaybackError;

/// Playback command issued from the control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
    Skip,
}

pub struct PlaybackControlUseCase {
    api: Arc<dyn RoomApi>,
}

impl PlaybackControlUseCase {
    pub fn new(api: Arc<dyn RoomApi>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, command: PlaybackCommand) -> Result<(), PlaybackError> {
        tracing::debug!("Playback command: {:?}", command);
        let result = match command {
            PlaybackCommand::Play => self.api.play().await,
            PlaybackCommand::Pause => self.api.pause().await,
            PlaybackCommand::Skip => self.api.skip().await,
        };
        result.map_err(PlaybackError::from)
    }

    /// The single play/pause button: pause while playing, play otherwise.
    pub async fn toggle(&self, is_playing: bool) -> Result<PlaybackCommand, PlaybackError> {
        let command = if is_playing {
            PlaybackCommand::Pause
        } else {
            PlaybackCommand::Play
        };
        self.execute(command).await?;
        Ok(command)
    }
}
