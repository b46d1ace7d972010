//! Parsing of typed commands.

use crate::ui::router::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Re-render the current view
    Refresh,
    Help,
    Quit,
    Back,
    /// Navigate to a path, e.g. `go /room/ABCD`
    Go(Route),
    // Landing shortcuts
    Join,
    Info,
    Create,
    // Join page
    Code(String),
    Enter,
    // Info page
    Next,
    Prev,
    // Settings form
    Votes(String),
    GuestsCanPause(bool),
    Submit,
    Dismiss,
    // Room
    Play,
    Pause,
    Toggle,
    Skip,
    Settings,
    Close,
    Leave,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        match (word.to_ascii_lowercase().as_str(), rest) {
            ("", _) | ("refresh", _) => Command::Refresh,
            ("help" | "?", _) => Command::Help,
            ("quit" | "exit", _) => Command::Quit,
            ("back", _) => Command::Back,
            ("go", path) if !path.is_empty() => Command::Go(Route::parse(path)),
            ("join", "") => Command::Join,
            ("info", "") => Command::Info,
            ("create", "") => Command::Create,
            ("code", code) if !code.is_empty() => Command::Code(code.to_string()),
            ("enter", "") => Command::Enter,
            ("next", "") => Command::Next,
            ("prev", "") => Command::Prev,
            ("votes", n) if !n.is_empty() => Command::Votes(n.to_string()),
            ("guests", choice) => match choice.to_ascii_lowercase().as_str() {
                "pause" | "play/pause" | "yes" => Command::GuestsCanPause(true),
                "none" | "no" | "no-control" => Command::GuestsCanPause(false),
                _ => Command::Unknown(line.to_string()),
            },
            ("submit", "") => Command::Submit,
            ("dismiss", "") => Command::Dismiss,
            ("play", "") => Command::Play,
            ("pause", "") => Command::Pause,
            ("toggle", "") => Command::Toggle,
            ("skip", "") => Command::Skip,
            ("settings", "") => Command::Settings,
            ("close", "") => Command::Close,
            ("leave", "") => Command::Leave,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

pub const HELP: &str = "\
Global:   go <path>, back, refresh (or empty line), help, quit
Landing:  join, info, create
Join:     code <CODE>, enter
Info:     next, prev
Form:     votes <n>, guests pause|none, submit, dismiss
Room:     play, pause, toggle, skip, settings, close, dismiss, leave
";
