//! Join page: enter a room code.

use crate::{domain::Session, ui::router::Route, usecase::JoinRoomUseCase};

#[derive(Debug, Clone, Default)]
pub struct JoinPage {
    code_input: String,
    error: Option<String>,
}

impl JoinPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_code(&mut self, raw: &str) {
        self.code_input = raw.trim().to_string();
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Join the typed room. On success returns `/room/<code>`.
    pub async fn submit(&mut self, usecase: &JoinRoomUseCase, session: &mut Session) -> Option<Route> {
        match usecase.execute(&self.code_input, session).await {
            Ok(code) => {
                self.error = None;
                Some(Route::Room(code))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("== Join a Room ==\n");
        out.push_str(&format!(
            "Code: {}\n",
            if self.code_input.is_empty() { "_" } else { self.code_input.as_str() }
        ));
        if let Some(error) = &self.error {
            out.push_str(&format!("[error] {}\n", error));
        }
        out.push_str("Commands: code <CODE>, enter, back\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::{ApiError, MockRoomApi};

    #[tokio::test]
    async fn test_join_page_success() {
        // テスト項目: 参加成功で /room/<code> に遷移する
        // given (前提条件):
        let mut api = MockRoomApi::new();
        api.expect_join_room().returning(|_| Ok(()));
        let usecase = JoinRoomUseCase::new(Arc::new(api));
        let mut page = JoinPage::new();
        page.set_code("abcdef");
        let mut session = Session::new();

        // when (操作):
        let route = page.submit(&usecase, &mut session).await;

        // then (期待する結果):
        assert_eq!(route.unwrap().to_string(), "/room/ABCDEF");
        assert!(page.error().is_none());
    }

    #[tokio::test]
    async fn test_join_page_shows_room_not_found() {
        // テスト項目: 拒否されると "Room not found." が表示される
        let mut api = MockRoomApi::new();
        api.expect_join_room().returning(|_| {
            Err(ApiError::Rejected {
                status: 404,
                message: "Invalid Room Code".to_string(),
            })
        });
        let usecase = JoinRoomUseCase::new(Arc::new(api));
        let mut page = JoinPage::new();
        page.set_code("NOPE");
        let mut session = Session::new();

        let route = page.submit(&usecase, &mut session).await;

        assert!(route.is_none());
        assert_eq!(page.error(), Some("Room not found."));
        assert!(page.render().contains("[error] Room not found."));
    }
}
