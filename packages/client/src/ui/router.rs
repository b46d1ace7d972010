//! Route table and navigator.
//!
//! Location is an explicit value owned by the shell; nothing reads a global.

use std::{collections::VecDeque, fmt};

use crate::domain::{RoomCode, Session};

/// Every page the client can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Landing,
    /// `/join`
    Join,
    /// `/info`
    Info,
    /// `/create`
    Create,
    /// `/room/:code`
    Room(RoomCode),
    /// Anything else, kept verbatim for the error page
    NotFound(String),
}

impl Route {
    /// Parse a path. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        let segments: Vec<&str> = normalized
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] if trimmed.starts_with('/') => Route::Landing,
            ["join"] => Route::Join,
            ["info"] => Route::Info,
            ["create"] => Route::Create,
            ["room", code] => match RoomCode::new(code) {
                Ok(code) => Route::Room(code),
                Err(_) => Route::NotFound(trimmed.to_string()),
            },
            _ => Route::NotFound(trimmed.to_string()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Landing => write!(f, "/"),
            Route::Join => write!(f, "/join"),
            Route::Info => write!(f, "/info"),
            Route::Create => write!(f, "/create"),
            Route::Room(code) => write!(f, "/room/{}", code),
            Route::NotFound(path) => write!(f, "{}", path),
        }
    }
}

/// Apply the only guard in the route table: the landing page redirects into
/// the session's room when there is one.
pub fn resolve(route: Route, session: &Session) -> Route {
    match (route, session.room_code()) {
        (Route::Landing, Some(code)) => Route::Room(code.clone()),
        (route, _) => route,
    }
}

/// Number of back steps kept; the oldest entry is dropped beyond this.
pub const HISTORY_LIMIT: usize = 50;

/// Current location plus back-history.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    history: VecDeque<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: Route::Landing,
            history: VecDeque::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Navigate to `route`, after applying the landing redirect.
    ///
    /// Returns the route actually shown.
    pub fn navigate(&mut self, route: Route, session: &Session) -> &Route {
        let target = resolve(route, session);
        if target != self.current {
            tracing::info!("Navigate {} -> {}", self.current, target);
            let previous = std::mem::replace(&mut self.current, target);
            if self.history.back() != Some(&previous) {
                if self.history.len() == HISTORY_LIMIT {
                    self.history.pop_front();
                }
                self.history.push_back(previous);
            }
        }
        &self.current
    }

    /// Replace the current location without adding history.
    pub fn replace(&mut self, route: Route, session: &Session) -> &Route {
        self.current = resolve(route, session);
        &self.current
    }

    /// Go back one step. The landing redirect still applies, so going back
    /// to `/` while in a room lands in the room.
    pub fn back(&mut self, session: &Session) -> Option<&Route> {
        let previous = self.history.pop_back()?;
        self.current = resolve(previous, session);
        Some(&self.current)
    }

    /// Drop history, e.g. after leaving a room.
    pub fn reset(&mut self, route: Route, session: &Session) -> &Route {
        self.history.clear();
        self.replace(route, session)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
