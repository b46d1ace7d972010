//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{ApiError, ValueObjectError};

/// ルーム作成のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateRoomError {
    #[error("Could not create the room: {0}")]
    Api(#[from] ApiError),
}

/// ルーム設定更新のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpdateRoomError {
    #[error("Could not update the room: {0}")]
    Api(#[from] ApiError),
}

/// ルーム参加のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinRoomError {
    /// 入力されたコードが不正
    #[error("{0}")]
    InvalidCode(#[from] ValueObjectError),

    /// バックエンドがコードを拒否した
    #[error("Room not found.")]
    RoomNotFound(String),

    #[error("Could not join the room: {0}")]
    Api(ApiError),
}

/// 再生操作のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// ゲストに再生操作の権限がない
    #[error("The host does not allow guests to control playback")]
    Forbidden,

    #[error("Playback command failed: {0}")]
    Api(ApiError),
}

impl From<ApiError> for PlaybackError {
    fn from(err: ApiError) -> Self {
        if err.is_status(403) {
            PlaybackError::Forbidden
        } else {
            PlaybackError::Api(err)
        }
    }
}
