//! Room view: room details, the playback poller and the control panel.
//!
//! The poller is the only background task in the client. Once the view is
//! torn down (explicitly or by drop) the poller never writes again: the
//! torn-down flag is checked while holding the state lock that every write
//! goes through.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use houseparty_shared::time::{millis_to_local_clock, now_millis};
use tokio::{sync::Mutex, task::JoinHandle, time::MissedTickBehavior};

use crate::{
    config::FailurePolicy,
    domain::{ApiError, PlaybackState, RoomApi, RoomCode, RoomDetails, Session},
    ui::{player, router::Route, settings_form::RoomSettingsForm},
    usecase::{
        LeaveRoomUseCase, PlaybackCommand, PlaybackControlUseCase, SpotifyAuthUseCase,
        UpdateRoomUseCase,
    },
};

/// What the view currently knows, shared with the poller
#[derive(Debug, Clone, Default)]
pub struct RoomViewState {
    pub details: Option<RoomDetails>,
    pub playback: Option<PlaybackState>,
    /// When the last successful poll finished (Unix ms)
    pub last_polled_at: Option<i64>,
    /// Number of playback polls that updated the state
    pub polls: u64,
}

/// Result of mounting the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountOutcome {
    Ready,
    /// The backend no longer knows the room; the shell should leave it
    RoomGone,
}

pub struct RoomView {
    code: RoomCode,
    api: Arc<dyn RoomApi>,
    poll_interval: Duration,
    policy: FailurePolicy,
    state: Arc<Mutex<RoomViewState>>,
    torn_down: Arc<AtomicBool>,
    poller: Option<JoinHandle<()>>,
    settings_form: Option<RoomSettingsForm>,
    auth_url: Option<String>,
    notice: Option<String>,
}

impl RoomView {
    pub fn new(
        code: RoomCode,
        api: Arc<dyn RoomApi>,
        poll_interval: Duration,
        policy: FailurePolicy,
    ) -> Self {
        Self {
            code,
            api,
            poll_interval,
            policy,
            state: Arc::new(Mutex::new(RoomViewState::default())),
            torn_down: Arc::new(AtomicBool::new(false)),
            poller: None,
            settings_form: None,
            auth_url: None,
            notice: None,
        }
    }

    pub fn code(&self) -> &RoomCode {
        &self.code
    }

    /// Fetch the room and the current song once, then start polling.
    pub async fn mount(&mut self) -> MountOutcome {
        if let Err(e) = self.refresh_room().await {
            if matches!(e, ApiError::Rejected { .. }) {
                tracing::warn!("Room '{}' is gone: {}", self.code, e);
                return MountOutcome::RoomGone;
            }
            self.notice = self.policy.surface(&e);
        }

        if self.is_host().await {
            match SpotifyAuthUseCase::new(self.api.clone()).execute().await {
                Ok(url) => self.auth_url = url,
                Err(e) => tracing::warn!("Spotify authentication check failed: {}", e),
            }
        }

        poll_once(&self.api, &self.state, &self.torn_down).await;
        self.start_poller();
        MountOutcome::Ready
    }

    fn start_poller(&mut self) {
        if self.poller.is_some() || self.torn_down.load(Ordering::SeqCst) {
            return;
        }
        let api = self.api.clone();
        let state = self.state.clone();
        let torn_down = self.torn_down.clone();
        let period = self.poll_interval;
        let code = self.code.clone();

        self.poller = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; mount already polled.
            interval.tick().await;
            loop {
                interval.tick().await;
                if !poll_once(&api, &state, &torn_down).await {
                    break;
                }
            }
            tracing::debug!("Poller for room '{}' stopped", code);
        }));
        tracing::debug!(
            "Polling room '{}' every {} ms",
            self.code,
            self.poll_interval.as_millis()
        );
    }

    /// Re-fetch room details (after mount and after a settings update).
    pub async fn refresh_room(&mut self) -> Result<(), ApiError> {
        let details = self.api.get_room(&self.code).await?;
        let mut state = self.state.lock().await;
        if self.torn_down.load(Ordering::SeqCst) {
            return Ok(());
        }
        state.details = Some(details);
        Ok(())
    }

    pub async fn snapshot(&self) -> RoomViewState {
        self.state.lock().await.clone()
    }

    pub async fn is_host(&self) -> bool {
        self.state
            .lock()
            .await
            .details
            .as_ref()
            .is_some_and(|d| d.is_host)
    }

    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    pub fn auth_url(&self) -> Option<&str> {
        self.auth_url.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Open the update form. Hosts only.
    pub async fn open_settings(&mut self) -> bool {
        let details = self.state.lock().await.details.clone();
        match details {
            Some(details) if details.is_host => {
                self.settings_form = Some(RoomSettingsForm::update(
                    self.code.clone(),
                    details.settings,
                    self.policy,
                ));
                true
            }
            _ => {
                self.notice = Some("Only the host can change room settings".to_string());
                false
            }
        }
    }

    pub fn close_settings(&mut self) {
        self.settings_form = None;
    }

    pub fn settings_form(&self) -> Option<&RoomSettingsForm> {
        self.settings_form.as_ref()
    }

    pub fn settings_form_mut(&mut self) -> Option<&mut RoomSettingsForm> {
        self.settings_form.as_mut()
    }

    /// Submit the open settings form; the room is re-fetched afterwards.
    pub async fn submit_settings(&mut self) -> bool {
        let usecase = UpdateRoomUseCase::new(self.api.clone());
        let Some(form) = self.settings_form.as_mut() else {
            return false;
        };
        let mut refresh = false;
        let updated = form.submit_update(&usecase, || refresh = true).await;
        if refresh {
            if let Err(e) = self.refresh_room().await {
                tracing::warn!("Could not refresh room '{}': {}", self.code, e);
            }
        }
        updated
    }

    pub async fn playback(&mut self, command: PlaybackCommand) {
        let usecase = PlaybackControlUseCase::new(self.api.clone());
        self.notice = player::send_command(&usecase, command, self.policy).await;
    }

    pub async fn toggle_playback(&mut self) {
        let is_playing = self
            .state
            .lock()
            .await
            .playback
            .as_ref()
            .is_some_and(|p| p.is_playing);
        let usecase = PlaybackControlUseCase::new(self.api.clone());
        self.notice = player::toggle(&usecase, is_playing, self.policy).await;
    }

    /// Leave the room. Always clears the session and returns `/`.
    pub async fn leave(&mut self, session: &mut Session) -> Route {
        self.teardown().await;
        // Outcome is logged by the use case; the leave is optimistic.
        let _ = LeaveRoomUseCase::new(self.api.clone())
            .execute(session)
            .await;
        Route::Landing
    }

    /// Stop polling. No state update happens after this returns.
    pub async fn teardown(&mut self) {
        self.torn_down.store(true, Ordering::SeqCst);
        // Wait out a write already holding the lock.
        drop(self.state.lock().await);
        if let Some(handle) = self.poller.take() {
            handle.abort();
        }
        tracing::debug!("Room view '{}' torn down", self.code);
    }

    pub async fn render(&self) -> String {
        let state = self.snapshot().await;
        let mut out = String::new();
        if let Some(notice) = &self.notice {
            out.push_str(&format!("[!] {}  (dismiss)\n", notice));
        }
        out.push_str(&format!("== Code: {} ==\n", self.code));

        if let Some(form) = &self.settings_form {
            out.push_str(&form.render());
            return out;
        }

        if let Some(url) = &self.auth_url {
            out.push_str(&format!("Authorize Spotify to start playback: {}\n", url));
        }
        out.push_str(&player::render(state.playback.as_ref()));
        match &state.details {
            Some(details) => {
                out.push_str(&format!(
                    "Votes to skip: {} | Guests can pause: {} | Host: {}\n",
                    details.settings.votes_to_skip,
                    if details.settings.guest_can_pause { "yes" } else { "no" },
                    if details.is_host { "you" } else { "someone else" }
                ));
                if details.is_host {
                    out.push_str("Commands: play, pause, toggle, skip, settings, leave\n");
                } else {
                    out.push_str("Commands: play, pause, toggle, skip, leave\n");
                }
            }
            None => out.push_str("Commands: play, pause, toggle, skip, leave\n"),
        }
        if let Some(at) = state.last_polled_at {
            out.push_str(&format!("Updated {}\n", millis_to_local_clock(at)));
        }
        out
    }
}

impl Drop for RoomView {
    fn drop(&mut self) {
        self.torn_down.store(true, Ordering::SeqCst);
        if let Some(handle) = self.poller.take() {
            handle.abort();
        }
    }
}

/// Fetch the current song and store it unless the view is torn down.
///
/// Returns `false` once the view is torn down, which ends the poller.
async fn poll_once(
    api: &Arc<dyn RoomApi>,
    state: &Arc<Mutex<RoomViewState>>,
    torn_down: &Arc<AtomicBool>,
) -> bool {
    if torn_down.load(Ordering::SeqCst) {
        return false;
    }
    let result = api.current_song().await;
    let mut guard = state.lock().await;
    if torn_down.load(Ordering::SeqCst) {
        return false;
    }
    match result {
        Ok(playback) => {
            guard.playback = playback;
            guard.last_polled_at = Some(now_millis());
            guard.polls += 1;
        }
        Err(e) => tracing::debug!("Playback poll failed: {}", e),
    }
    true
}
