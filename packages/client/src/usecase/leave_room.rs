//! UseCase: ルーム退出
//!
//! 楽観的な退出: リクエストの成否に関わらずセッションを消去します。
//! 戻り値はログ用で、呼び出し側は常に `/` へ遷移します。

use std::sync::Arc;

use crate::domain::{ApiError, RoomApi, Session};

pub struct LeaveRoomUseCase {
    api: Arc<dyn RoomApi>,
}

impl LeaveRoomUseCase {
    pub fn new(api: Arc<dyn RoomApi>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, session: &mut Session) -> Result<(), ApiError> {
        let result = self.api.leave_room().await;
        match (&result, session.room_code()) {
            (Ok(()), Some(code)) => tracing::info!("Left room '{}'", code),
            (Ok(()), None) => tracing::info!("Left room"),
            (Err(e), _) => tracing::warn!("Leave request failed, clearing session anyway: {}", e),
        }
        session.clear();
        result
    }
}
