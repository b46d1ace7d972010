//! UseCase: ルーム設定更新
//!
//! 成否はレスポンスのステータスのみで判断します。

use std::sync::Arc;

use crate::domain::{RoomApi, RoomCode, RoomSettings};

use super::error::UpdateRoomError;

pub struct UpdateRoomUseCase {
    api: Arc<dyn RoomApi>,
}

impl UpdateRoomUseCase {
    pub fn new(api: Arc<dyn RoomApi>) -> Self {
        Self { api }
    }

    pub async fn execute(
        &self,
        code: &RoomCode,
        settings: RoomSettings,
    ) -> Result<(), UpdateRoomError> {
        self.api.update_room(code, settings).await?;
        tracing::info!("Updated room '{}'", code);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiError, MockRoomApi, VotesToSkip};

    #[tokio::test]
    async fn test_update_room_sends_code_and_settings() {
        // テスト項目: ルームコードと設定が送信される
        // given (前提条件):
        let mut api = MockRoomApi::new();
        api.expect_update_room()
            .withf(|code, s| {
                code.as_str() == "XYZ1" && s.votes_to_skip.value() == 5 && s.guest_can_pause
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let usecase = UpdateRoomUseCase::new(Arc::new(api));

        // when (操作):
        let result = usecase
            .execute(
                &RoomCode::new("XYZ1").unwrap(),
                RoomSettings::new(VotesToSkip::new(5).unwrap(), true),
            )
            .await;

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_room_rejected() {
        // テスト項目: ホスト以外の更新は拒否される
        // given (前提条件):
        let mut api = MockRoomApi::new();
        api.expect_update_room().returning(|_, _| {
            Err(ApiError::Rejected {
                status: 403,
                message: "User is not the host of this room.".to_string(),
            })
        });
        let usecase = UpdateRoomUseCase::new(Arc::new(api));

        // when (操作):
        let result = usecase
            .execute(&RoomCode::new("XYZ1").unwrap(), RoomSettings::default())
            .await;

        // then (期待する結果):
        assert!(matches!(result, Err(UpdateRoomError::Api(e)) if e.is_status(403)));
    }
}
