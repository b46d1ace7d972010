//! UseCase: ルーム作成
//!
//! 検証済みの設定でルームを作成し、返されたコードをセッションに記録します。
//! 呼び出し側は `/room/<code>` へ遷移します。

use std::sync::Arc;

use crate::domain::{RoomApi, RoomCode, RoomSettings, Session};

use super::error::CreateRoomError;

pub struct CreateRoomUseCase {
    api: Arc<dyn RoomApi>,
}

impl CreateRoomUseCase {
    pub fn new(api: Arc<dyn RoomApi>) -> Self {
        Self { api }
    }

    /// ルーム作成を実行
    ///
    /// # Returns
    ///
    /// * `Ok(RoomCode)` - 作成されたルームのコード
    /// * `Err(CreateRoomError)` - 作成失敗（リトライはしない）
    pub async fn execute(
        &self,
        settings: RoomSettings,
        session: &mut Session,
    ) -> Result<RoomCode, CreateRoomError> {
        let room = self.api.create_room(settings).await?;
        tracing::info!(
            "Created room '{}' (votes_to_skip={}, guest_can_pause={})",
            room.code,
            room.settings.votes_to_skip,
            room.settings.guest_can_pause
        );
        session.enter(room.code.clone());
        Ok(room.code)
    }
}
