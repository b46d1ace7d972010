//! UseCase: ホストの Spotify 認証確認
//!
//! 未認証の場合は認証用 URL を返し、フロントエンドが表示します。

use std::sync::Arc;

use crate::domain::{ApiError, RoomApi};

pub struct SpotifyAuthUseCase {
    api: Arc<dyn RoomApi>,
}

impl SpotifyAuthUseCase {
    pub fn new(api: Arc<dyn RoomApi>) -> Self {
        Self { api }
    }

    /// # Returns
    ///
    /// * `Ok(None)` - 認証済み
    /// * `Ok(Some(url))` - 未認証。`url` で認可を行う
    pub async fn execute(&self) -> Result<Option<String>, ApiError> {
        if self.api.is_authenticated().await? {
            return Ok(None);
        }
        let url = self.api.auth_url().await?;
        tracing::info!("Spotify authorization required");
        Ok(Some(url))
    }
}
