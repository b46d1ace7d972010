//! UseCase: ルーム参加
//!
//! 入力されたコードを検証してから参加リクエストを送ります。
//! バックエンドが拒否した場合は「ルームが見つからない」として扱います。

use std::sync::Arc;

use crate::domain::{ApiError, RoomApi, RoomCode, Session};

use super::error::JoinRoomError;

pub struct JoinRoomUseCase {
    api: Arc<dyn RoomApi>,
}

impl JoinRoomUseCase {
    pub fn new(api: Arc<dyn RoomApi>) -> Self {
        Self { api }
    }

    pub async fn execute(
        &self,
        raw_code: &str,
        session: &mut Session,
    ) -> Result<RoomCode, JoinRoomError> {
        let code = RoomCode::new(raw_code)?;
        match self.api.join_room(&code).await {
            Ok(()) => {
                tracing::info!("Joined room '{}'", code);
                session.enter(code.clone());
                Ok(code)
            }
            Err(ApiError::Rejected { message, .. }) => {
                tracing::warn!("Join rejected for '{}': {}", code, message);
                Err(JoinRoomError::RoomNotFound(message))
            }
            Err(e) => Err(JoinRoomError::Api(e)),
        }
    }
}
