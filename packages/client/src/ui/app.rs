//! Navigation shell: owns the session, the navigator and the mounted view.

use std::sync::Arc;

use crate::{
    config::ClientConfig,
    domain::{RoomApi, Session},
    ui::{
        command::{Command, HELP},
        info::InfoPage,
        join::JoinPage,
        landing,
        room_view::{MountOutcome, RoomView},
        router::{Navigator, Route},
        settings_form::RoomSettingsForm,
    },
    usecase::{BootstrapUseCase, CreateRoomUseCase, JoinRoomUseCase, PlaybackCommand},
};

/// View mounted for the current route
pub enum View {
    Landing,
    Join(JoinPage),
    Info(InfoPage),
    Create(RoomSettingsForm),
    Room(Box<RoomView>),
    NotFound(String),
}

/// Where the shell goes after a view handled a command
enum Next {
    Stay,
    Go(Route),
    /// Navigate and drop history
    Reset(Route),
}

/// Whether the shell keeps running after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    api: Arc<dyn RoomApi>,
    config: ClientConfig,
    session: Session,
    navigator: Navigator,
    view: View,
    /// One-shot text shown above the next render (help, unknown command)
    flash: Option<String>,
}

impl App {
    pub fn new(api: Arc<dyn RoomApi>, config: ClientConfig) -> Self {
        Self {
            api,
            config,
            session: Session::new(),
            navigator: Navigator::new(),
            view: View::Landing,
            flash: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Ask the backend where we are and show the matching page.
    pub async fn start(&mut self) {
        BootstrapUseCase::new(self.api.clone())
            .execute(&mut self.session)
            .await;
        let route = self.navigator.replace(Route::Landing, &self.session).clone();
        self.mount(route).await;
    }

    /// Navigate and mount the resulting view.
    pub async fn go(&mut self, route: Route) {
        let target = self.navigator.navigate(route, &self.session).clone();
        self.mount(target).await;
    }

    async fn back(&mut self) {
        match self.navigator.back(&self.session).cloned() {
            Some(route) => self.mount(route).await,
            None => self.flash = Some("Nothing to go back to".to_string()),
        }
    }

    /// Tear down the old view, then build and mount the view for `route`.
    async fn mount(&mut self, route: Route) {
        if let View::Room(view) = &mut self.view {
            view.teardown().await;
        }
        self.view = match &route {
            Route::Landing => View::Landing,
            Route::Join => View::Join(JoinPage::new()),
            Route::Info => View::Info(InfoPage::new()),
            Route::Create => View::Create(RoomSettingsForm::create(self.config.failure_policy)),
            Route::NotFound(path) => View::NotFound(path.clone()),
            Route::Room(code) => {
                let mut view = RoomView::new(
                    code.clone(),
                    self.api.clone(),
                    self.config.poll_interval(),
                    self.config.failure_policy,
                );
                match view.mount().await {
                    MountOutcome::Ready => {
                        // Visiting a room URL directly also makes it the session's room.
                        self.session.enter(code.clone());
                        View::Room(Box::new(view))
                    }
                    MountOutcome::RoomGone => {
                        // Only the local code is dropped. A leave request would make
                        // the cookie leave whatever room it really belongs to.
                        view.teardown().await;
                        self.session.clear();
                        self.flash = Some(format!("Room {} no longer exists", code));
                        self.navigator.reset(Route::Landing, &self.session);
                        View::Landing
                    }
                }
            }
        };
    }

    /// Handle one typed line.
    pub async fn handle(&mut self, line: &str) -> Flow {
        let command = Command::parse(line);
        tracing::debug!("Command: {:?}", command);
        match command {
            Command::Quit => {
                if let View::Room(view) = &mut self.view {
                    view.teardown().await;
                }
                return Flow::Quit;
            }
            Command::Help => self.flash = Some(HELP.to_string()),
            Command::Refresh => {}
            Command::Back => self.back().await,
            Command::Go(route) => self.go(route).await,
            command => self.handle_view_command(command).await,
        }
        Flow::Continue
    }

    async fn handle_view_command(&mut self, command: Command) {
        let next = match (&mut self.view, command) {
            (View::Landing, Command::Join) => Next::Go(Route::Join),
            (View::Landing, Command::Info) => Next::Go(Route::Info),
            (View::Landing, Command::Create) => Next::Go(Route::Create),

            (View::Join(page), Command::Code(code)) => {
                page.set_code(&code);
                Next::Stay
            }
            (View::Join(page), Command::Enter) => {
                let usecase = JoinRoomUseCase::new(self.api.clone());
                page.submit(&usecase, &mut self.session)
                    .await
                    .map_or(Next::Stay, Next::Go)
            }

            (View::Info(page), Command::Next) => {
                page.next();
                Next::Stay
            }
            (View::Info(page), Command::Prev) => {
                page.prev();
                Next::Stay
            }

            (View::Create(form), Command::Votes(raw)) => {
                form.set_votes_input(&raw);
                Next::Stay
            }
            (View::Create(form), Command::GuestsCanPause(allowed)) => {
                form.set_guest_can_pause(allowed);
                Next::Stay
            }
            (View::Create(form), Command::Dismiss) => {
                form.dismiss();
                Next::Stay
            }
            (View::Create(form), Command::Submit) => {
                let usecase = CreateRoomUseCase::new(self.api.clone());
                form.submit_create(&usecase, &mut self.session)
                    .await
                    .map_or(Next::Stay, Next::Go)
            }

            (View::Room(view), Command::Votes(raw)) if view.settings_form().is_some() => {
                if let Some(form) = view.settings_form_mut() {
                    form.set_votes_input(&raw);
                }
                Next::Stay
            }
            (View::Room(view), Command::GuestsCanPause(allowed))
                if view.settings_form().is_some() =>
            {
                if let Some(form) = view.settings_form_mut() {
                    form.set_guest_can_pause(allowed);
                }
                Next::Stay
            }
            (View::Room(view), Command::Dismiss) => {
                match view.settings_form_mut() {
                    Some(form) => form.dismiss(),
                    None => view.dismiss_notice(),
                }
                Next::Stay
            }
            (View::Room(view), Command::Submit) if view.settings_form().is_some() => {
                view.submit_settings().await;
                Next::Stay
            }
            (View::Room(view), Command::Settings) => {
                view.open_settings().await;
                Next::Stay
            }
            (View::Room(view), Command::Close) => {
                view.close_settings();
                Next::Stay
            }
            (View::Room(view), Command::Play) => {
                view.playback(PlaybackCommand::Play).await;
                Next::Stay
            }
            (View::Room(view), Command::Pause) => {
                view.playback(PlaybackCommand::Pause).await;
                Next::Stay
            }
            (View::Room(view), Command::Skip) => {
                view.playback(PlaybackCommand::Skip).await;
                Next::Stay
            }
            (View::Room(view), Command::Toggle) => {
                view.toggle_playback().await;
                Next::Stay
            }
            (View::Room(view), Command::Leave) => Next::Reset(view.leave(&mut self.session).await),

            (_, Command::Unknown(line)) => {
                self.flash = Some(format!("Unknown command: {} (try help)", line));
                Next::Stay
            }
            (_, command) => {
                tracing::debug!("{:?} is not available on {}", command, self.navigator.current());
                self.flash = Some("That command is not available on this page".to_string());
                Next::Stay
            }
        };

        match next {
            Next::Stay => {}
            Next::Go(route) => self.go(route).await,
            Next::Reset(route) => {
                // Leaving a room: history into the room is no longer valid.
                let route = self.navigator.reset(route, &self.session).clone();
                self.mount(route).await;
            }
        }
    }

    pub async fn render(&mut self) -> String {
        let mut out = format!("-- {} --\n", self.navigator.current());
        if let Some(flash) = self.flash.take() {
            out.push_str(&flash);
            if !flash.ends_with('\n') {
                out.push('\n');
            }
        }
        let body = match &self.view {
            View::Landing => landing::render(),
            View::Join(page) => page.render(),
            View::Info(page) => page.render(),
            View::Create(form) => form.render(),
            View::Room(view) => view.render().await,
            View::NotFound(path) => format!("Nothing at {}. Try: go /\n", path),
        };
        out.push_str(&body);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::{MockRoomApi, Room, RoomCode, RoomDetails, RoomSettings};

    fn config() -> ClientConfig {
        ClientConfig {
            poll_interval_ms: 60_000,
            ..ClientConfig::default()
        }
    }

    fn details(code: &RoomCode, is_host: bool) -> RoomDetails {
        RoomDetails {
            code: code.clone(),
            settings: RoomSettings::default(),
            is_host,
        }
    }

    #[tokio::test]
    async fn test_start_redirects_into_room() {
        // テスト項目: 所属中のルームがあれば起動時に /room/<code> へ遷移する
        // given (前提条件):
        let mut api = MockRoomApi::new();
        api.expect_current_room()
            .returning(|| Ok(Some(RoomCode::new("ABCD").unwrap())));
        api.expect_get_room().returning(|code| Ok(details(code, false)));
        api.expect_current_song().returning(|| Ok(None));
        let mut app = App::new(Arc::new(api), config());

        // when (操作):
        app.start().await;

        // then (期待する結果):
        assert_eq!(app.route().to_string(), "/room/ABCD");
        assert!(matches!(app.view(), View::Room(_)));
        app.handle("quit").await;
    }

    #[tokio::test]
    async fn test_start_without_room_shows_menu() {
        // テスト項目: 所属していなければメニューが表示される
        // given (前提条件):
        let mut api = MockRoomApi::new();
        api.expect_current_room().returning(|| Ok(None));
        let mut app = App::new(Arc::new(api), config());

        // when (操作):
        app.start().await;
        let text = app.render().await;

        // then (期待する結果):
        assert_eq!(app.route(), &Route::Landing);
        assert!(text.contains("Join a Room"));
        assert!(text.contains("Create a Room"));
    }

    #[tokio::test]
    async fn test_create_then_update_flow() {
        // テスト項目: 作成 → /room/XYZ1 → 設定更新で成功メッセージが表示される
        // given (前提条件):
        let mut api = MockRoomApi::new();
        api.expect_current_room().returning(|| Ok(None));
        api.expect_create_room().returning(|settings| {
            Ok(Room {
                code: RoomCode::new("XYZ1").unwrap(),
                settings,
            })
        });
        api.expect_get_room().returning(|code| Ok(details(code, true)));
        api.expect_is_authenticated().returning(|| Ok(true));
        api.expect_current_song().returning(|| Ok(None));
        api.expect_update_room()
            .withf(|code, s| {
                code.as_str() == "XYZ1" && s.votes_to_skip.value() == 5 && s.guest_can_pause
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let mut app = App::new(Arc::new(api), config());
        app.start().await;

        // when (操作): ルーム作成
        for line in ["create", "votes 3", "guests none", "submit"] {
            assert_eq!(app.handle(line).await, Flow::Continue);
        }

        // then (期待する結果):
        assert_eq!(app.route().to_string(), "/room/XYZ1");
        assert_eq!(app.session().room_code().unwrap().as_str(), "XYZ1");

        // when (操作): 設定更新
        for line in ["settings", "votes 5", "guests pause", "submit"] {
            app.handle(line).await;
        }

        // then (期待する結果):
        let text = app.render().await;
        assert!(text.contains("Room updated successfully!"));
        assert!(!text.contains("Error updating room..."));
        app.handle("quit").await;
    }

    #[tokio::test]
    async fn test_leave_returns_to_landing() {
        // テスト項目: 退出するとセッションが消去され / に戻る
        // given (前提条件):
        let mut api = MockRoomApi::new();
        api.expect_current_room()
            .returning(|| Ok(Some(RoomCode::new("ABCD").unwrap())));
        api.expect_get_room().returning(|code| Ok(details(code, false)));
        api.expect_current_song().returning(|| Ok(None));
        api.expect_leave_room()
            .returning(|| Err(crate::domain::ApiError::Transport("down".to_string())));
        let mut app = App::new(Arc::new(api), config());
        app.start().await;

        // when (操作):
        app.handle("leave").await;

        // then (期待する結果):
        assert_eq!(app.route(), &Route::Landing);
        assert!(app.session().room_code().is_none());
        assert!(matches!(app.view(), View::Landing));
    }

    #[tokio::test]
    async fn test_missing_room_returns_to_landing_without_leaving() {
        // テスト項目: 存在しないルームの URL を開くと退出リクエストを送らずに / に戻る
        // given (前提条件):
        let mut api = MockRoomApi::new();
        api.expect_current_room().returning(|| Ok(None));
        api.expect_get_room().returning(|_| {
            Err(crate::domain::ApiError::Rejected {
                status: 404,
                message: "Room Not Found".to_string(),
            })
        });
        api.expect_current_song().returning(|| Ok(None));
        api.expect_leave_room().never();
        let mut app = App::new(Arc::new(api), config());
        app.start().await;

        // when (操作):
        app.handle("go /room/NOPE1").await;

        // then (期待する結果):
        assert_eq!(app.route(), &Route::Landing);
        assert!(app.session().room_code().is_none());
        assert!(matches!(app.view(), View::Landing));
        assert!(app.render().await.contains("Room NOPE1 no longer exists"));
    }

    #[tokio::test]
    async fn test_unknown_command_flashes_hint() {
        // テスト項目: 不明なコマンドはヒントを表示する
        let mut api = MockRoomApi::new();
        api.expect_current_room().returning(|| Ok(None));
        let mut app = App::new(Arc::new(api), config());
        app.start().await;

        app.handle("dance").await;
        let text = app.render().await;

        assert!(text.contains("Unknown command: dance"));
        // flash は一度だけ表示される
        assert!(!app.render().await.contains("Unknown command"));
    }
}
