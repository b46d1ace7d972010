//! Room settings form, in create or update mode.
//!
//! The message area holds at most one of success or error. Setting one
//! replaces the other, and dismissing returns to empty: a dismissed success
//! never uncovers an older error.

use crate::{
    config::FailurePolicy,
    domain::{RoomCode, RoomSettings, Session, ValueObjectError, VotesToSkip},
    ui::router::Route,
    usecase::{CreateRoomUseCase, UpdateRoomUseCase},
};

pub const UPDATE_SUCCESS_MESSAGE: &str = "Room updated successfully!";
pub const UPDATE_ERROR_MESSAGE: &str = "Error updating room...";

/// Fixed for the lifetime of a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update { room_code: RoomCode },
}

/// Inline message above the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMessage {
    #[default]
    None,
    Success(String),
    Error(String),
}

#[derive(Debug, Clone)]
pub struct RoomSettingsForm {
    mode: FormMode,
    /// Raw text of the votes field; validated on submit
    votes_input: String,
    guest_can_pause: bool,
    message: FormMessage,
    policy: FailurePolicy,
}

impl RoomSettingsForm {
    /// Blank create form with the default settings.
    pub fn create(policy: FailurePolicy) -> Self {
        Self::with_settings(FormMode::Create, RoomSettings::default(), policy)
    }

    /// Update form pre-filled with the room's current settings.
    pub fn update(room_code: RoomCode, current: RoomSettings, policy: FailurePolicy) -> Self {
        Self::with_settings(FormMode::Update { room_code }, current, policy)
    }

    fn with_settings(mode: FormMode, settings: RoomSettings, policy: FailurePolicy) -> Self {
        Self {
            mode,
            votes_input: settings.votes_to_skip.to_string(),
            guest_can_pause: settings.guest_can_pause,
            message: FormMessage::None,
            policy,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create a Room",
            FormMode::Update { .. } => "Update Room",
        }
    }

    pub fn message(&self) -> &FormMessage {
        &self.message
    }

    pub fn votes_input(&self) -> &str {
        &self.votes_input
    }

    pub fn guest_can_pause(&self) -> bool {
        self.guest_can_pause
    }

    pub fn set_votes_input(&mut self, raw: &str) {
        self.votes_input = raw.trim().to_string();
    }

    pub fn set_guest_can_pause(&mut self, allowed: bool) {
        self.guest_can_pause = allowed;
    }

    /// Clear whichever message is showing.
    pub fn dismiss(&mut self) {
        self.message = FormMessage::None;
    }

    fn show_success(&mut self, text: impl Into<String>) {
        self.message = FormMessage::Success(text.into());
    }

    fn show_error(&mut self, text: impl Into<String>) {
        self.message = FormMessage::Error(text.into());
    }

    /// Current field values as validated settings.
    pub fn settings(&self) -> Result<RoomSettings, ValueObjectError> {
        let votes_to_skip = VotesToSkip::parse(&self.votes_input)?;
        Ok(RoomSettings::new(votes_to_skip, self.guest_can_pause))
    }

    /// Create the room and return where to go next (`/room/<code>`).
    ///
    /// Validation errors are always shown. Request failures are shown or
    /// only logged depending on the failure policy.
    pub async fn submit_create(
        &mut self,
        usecase: &CreateRoomUseCase,
        session: &mut Session,
    ) -> Option<Route> {
        if self.mode != FormMode::Create {
            tracing::warn!("submit_create called on an update form");
            return None;
        }
        let settings = match self.settings() {
            Ok(settings) => settings,
            Err(e) => {
                self.show_error(e.to_string());
                return None;
            }
        };
        match usecase.execute(settings, session).await {
            Ok(code) => {
                self.dismiss();
                Some(Route::Room(code))
            }
            Err(e) => {
                match self.policy.surface(&e) {
                    Some(text) => self.show_error(text),
                    None => self.dismiss(),
                }
                None
            }
        }
    }

    /// Send the update and show the outcome. `on_updated` runs after the
    /// request completes, successful or not.
    ///
    /// Returns whether the update succeeded.
    pub async fn submit_update<F: FnOnce()>(
        &mut self,
        usecase: &UpdateRoomUseCase,
        on_updated: F,
    ) -> bool {
        let FormMode::Update { room_code } = &self.mode else {
            tracing::warn!("submit_update called on a create form");
            return false;
        };
        let room_code = room_code.clone();
        let settings = match self.settings() {
            Ok(settings) => settings,
            Err(e) => {
                self.show_error(e.to_string());
                return false;
            }
        };
        let updated = match usecase.execute(&room_code, settings).await {
            Ok(()) => {
                self.show_success(UPDATE_SUCCESS_MESSAGE);
                true
            }
            Err(e) => {
                tracing::warn!("{}", e);
                self.show_error(UPDATE_ERROR_MESSAGE);
                false
            }
        };
        on_updated();
        updated
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        match &self.message {
            FormMessage::None => {}
            FormMessage::Success(text) => out.push_str(&format!("[ok] {}  (dismiss)\n", text)),
            FormMessage::Error(text) => out.push_str(&format!("[error] {}  (dismiss)\n", text)),
        }
        out.push_str(&format!("== {} ==\n", self.title()));
        let (play_pause, no_control) = if self.guest_can_pause {
            ("(*)", "( )")
        } else {
            ("( )", "(*)")
        };
        out.push_str(&format!(
            "Guest Control of Playback State: {} Play/Pause  {} No Control\n",
            play_pause, no_control
        ));
        out.push_str(&format!(
            "Votes Required To Skip Song: {} (min {})\n",
            self.votes_input,
            VotesToSkip::MIN
        ));
        match self.mode {
            FormMode::Create => out.push_str("Commands: votes <n>, guests pause|none, submit, back\n"),
            FormMode::Update { .. } => {
                out.push_str("Commands: votes <n>, guests pause|none, submit, dismiss, close\n")
            }
        }
        out
    }
}
