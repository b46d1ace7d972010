//! UseCase: 起動時のルーム所属確認
//!
//! バックエンドに現在のルームを問い合わせ、セッションに反映します。
//! 所属していない (`code == null`) のはエラーではありません。

use std::sync::Arc;

use crate::domain::{RoomApi, RoomCode, Session};

pub struct BootstrapUseCase {
    api: Arc<dyn RoomApi>,
}

impl BootstrapUseCase {
    pub fn new(api: Arc<dyn RoomApi>) -> Self {
        Self { api }
    }

    /// 現在のルームを取得してセッションに設定する
    ///
    /// # Returns
    ///
    /// 所属中のルームコード。問い合わせに失敗した場合は警告を出して `None`
    /// （ランディングページを表示する）。
    pub async fn execute(&self, session: &mut Session) -> Option<RoomCode> {
        match self.api.current_room().await {
            Ok(Some(code)) => {
                tracing::info!("Already in room '{}'", code);
                session.enter(code.clone());
                Some(code)
            }
            Ok(None) => {
                session.clear();
                None
            }
            Err(e) => {
                tracing::warn!("Could not look up current room: {}", e);
                None
            }
        }
    }
}
