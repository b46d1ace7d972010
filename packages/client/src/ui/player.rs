//! Playback control panel.
//!
//! Stateless: it renders whatever the last poll brought and forwards
//! commands without touching local state.

use houseparty_shared::time::format_track_time;

use crate::{
    config::FailurePolicy,
    domain::PlaybackState,
    usecase::{PlaybackCommand, PlaybackControlUseCase},
};

const PROGRESS_BAR_WIDTH: usize = 30;

/// Text progress bar for a clamped percentage.
pub fn progress_bar(percent: f64) -> String {
    let percent = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let filled = ((percent / 100.0) * PROGRESS_BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_BAR_WIDTH);
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled),
        percent
    )
}

pub fn render(playback: Option<&PlaybackState>) -> String {
    let Some(state) = playback else {
        return "Nothing playing\n".to_string();
    };
    let glyph = if state.is_playing { "||" } else { "|>" };
    let mut out = String::new();
    out.push_str(&format!("{}\n", state.title));
    out.push_str(&format!("{}\n", state.artist));
    if !state.image_url.is_empty() {
        out.push_str(&format!("Cover: {}\n", state.image_url));
    }
    out.push_str(&format!(
        "{}  skip {} / {}  {} / {}\n",
        glyph,
        state.votes,
        state.votes_required,
        format_track_time(state.time_ms.min(state.duration_ms)),
        format_track_time(state.duration_ms)
    ));
    out.push_str(&progress_bar(state.progress_percent()));
    out.push('\n');
    out
}

/// Issue `command` and return the message to show, if any.
pub async fn send_command(
    usecase: &PlaybackControlUseCase,
    command: PlaybackCommand,
    policy: FailurePolicy,
) -> Option<String> {
    match usecase.execute(command).await {
        Ok(()) => None,
        Err(e) => policy.surface(&e),
    }
}

/// Play/pause button: pauses while playing, plays otherwise.
pub async fn toggle(
    usecase: &PlaybackControlUseCase,
    is_playing: bool,
    policy: FailurePolicy,
) -> Option<String> {
    match usecase.toggle(is_playing).await {
        Ok(_) => None,
        Err(e) => policy.surface(&e),
    }
}
