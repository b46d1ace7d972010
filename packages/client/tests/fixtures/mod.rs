//! Stub House Party backend for integration tests.
//!
//! Implements the HTTP contract the client consumes, with sessions tracked
//! through a `sessionid` cookie the way the real backend does.

#![allow(dead_code)]

use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct StubRoom {
    pub host: String,
    pub votes_to_skip: i64,
    pub guest_can_pause: bool,
}

#[derive(Debug, Default)]
pub struct StubState {
    next_session: u64,
    /// session id -> room code
    memberships: HashMap<String, Option<String>>,
    pub rooms: HashMap<String, StubRoom>,
    /// Codes handed out by create-room, in order
    pub codes: VecDeque<String>,
    pub song: Option<Value>,
    pub authenticated: bool,
    /// Playback commands received, e.g. "play", "skip"
    pub playback_calls: Vec<String>,
    /// Artificial delay for user-in-room
    pub user_in_room_delay: Option<Duration>,
}

type Shared = Arc<Mutex<StubState>>;

pub struct TestServer {
    base_url: String,
    pub state: Shared,
}

impl TestServer {
    /// Start the stub on an ephemeral port. `codes` are handed out by
    /// create-room before falling back to generated ones.
    pub async fn start(codes: &[&str]) -> Self {
        let state: Shared = Arc::new(Mutex::new(StubState {
            codes: codes.iter().map(|c| c.to_string()).collect(),
            authenticated: true,
            ..StubState::default()
        }));

        let app = Router::new()
            .route("/api/create-room", post(create_room))
            .route("/api/update-room", patch(update_room))
            .route("/api/user-in-room", get(user_in_room))
            .route("/api/get-room", get(get_room))
            .route("/api/join-room", post(join_room))
            .route("/api/leave-room", post(leave_room))
            .route("/spotify/current-song", get(current_song))
            .route("/spotify/is-authenticated", get(is_authenticated))
            .route("/spotify/get-auth-url", get(auth_url))
            .route("/spotify/play", put(play))
            .route("/spotify/pause", put(pause))
            .route("/spotify/skip", post(skip))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let addr = listener.local_addr().expect("Failed to read local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub backend failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn set_song(&self, song: Option<Value>) {
        self.state.lock().await.song = song;
    }
}

/// Song payload in the backend's format
pub fn song_json(time: u64, duration: u64, is_playing: bool) -> Value {
    json!({
        "title": "Blue in Green",
        "artist": "Miles Davis, Bill Evans",
        "duration": duration,
        "time": time,
        "image_url": "https://i.scdn.co/image/cover",
        "is_playing": is_playing,
        "votes": 1,
        "votes_required": 2,
        "id": "4Wy7pdY2k7vYtFZ1HZwJ7T"
    })
}

fn session_cookie(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == "sessionid")
        .map(|(_, value)| value.to_string())
}

/// Existing session id, or a fresh one that must be sent back.
fn session(state: &mut StubState, headers: &HeaderMap) -> (String, bool) {
    match session_cookie(headers) {
        Some(id) if state.memberships.contains_key(&id) => (id, false),
        _ => {
            state.next_session += 1;
            let id = format!("s{}", state.next_session);
            state.memberships.insert(id.clone(), None);
            (id, true)
        }
    }
}

fn respond(status: StatusCode, body: Option<Value>, session: &str, is_new: bool) -> Response {
    let mut response = match body {
        Some(body) => (status, Json(body)).into_response(),
        None => status.into_response(),
    };
    if is_new {
        if let Ok(value) = HeaderValue::from_str(&format!("sessionid={}; Path=/", session)) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    response
}

#[derive(Deserialize)]
struct SettingsBody {
    votes_to_skip: i64,
    guest_can_pause: bool,
    #[serde(default)]
    code: Option<String>,
}

#[derive(Deserialize)]
struct CodeBody {
    code: String,
}

#[derive(Deserialize)]
struct CodeQuery {
    code: Option<String>,
}

async fn create_room(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<SettingsBody>,
) -> Response {
    let mut st = state.lock().await;
    let (sid, is_new) = session(&mut st, &headers);
    if body.votes_to_skip < 1 {
        return respond(
            StatusCode::BAD_REQUEST,
            Some(json!({"Bad Request": "Invalid data..."})),
            &sid,
            is_new,
        );
    }
    let existing = st
        .rooms
        .iter()
        .find(|(_, room)| room.host == sid)
        .map(|(code, _)| code.clone());
    let code = match existing {
        Some(code) => code,
        None => match st.codes.pop_front() {
            Some(code) => code,
            None => format!("ROOM{}", st.rooms.len() + 1),
        },
    };
    st.rooms.insert(
        code.clone(),
        StubRoom {
            host: sid.clone(),
            votes_to_skip: body.votes_to_skip,
            guest_can_pause: body.guest_can_pause,
        },
    );
    st.memberships.insert(sid.clone(), Some(code.clone()));
    respond(
        StatusCode::CREATED,
        Some(json!({
            "code": code,
            "host": sid,
            "votes_to_skip": body.votes_to_skip,
            "guest_can_pause": body.guest_can_pause,
        })),
        &sid,
        is_new,
    )
}

async fn update_room(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<SettingsBody>,
) -> Response {
    let mut st = state.lock().await;
    let (sid, is_new) = session(&mut st, &headers);
    let Some(code) = body.code else {
        return respond(StatusCode::BAD_REQUEST, Some(json!({"Bad Request": "Invalid Data..."})), &sid, is_new);
    };
    let Some(room) = st.rooms.get_mut(&code) else {
        return respond(StatusCode::NOT_FOUND, Some(json!({"msg": "Room not found."})), &sid, is_new);
    };
    if room.host != sid {
        return respond(
            StatusCode::FORBIDDEN,
            Some(json!({"msg": "You are not the host of this room."})),
            &sid,
            is_new,
        );
    }
    room.votes_to_skip = body.votes_to_skip;
    room.guest_can_pause = body.guest_can_pause;
    respond(StatusCode::OK, Some(json!({"code": code})), &sid, is_new)
}

async fn user_in_room(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let delay = state.lock().await.user_in_room_delay;
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    let mut st = state.lock().await;
    let (sid, is_new) = session(&mut st, &headers);
    let code = st.memberships.get(&sid).cloned().flatten();
    respond(StatusCode::OK, Some(json!({"code": code})), &sid, is_new)
}

async fn get_room(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<CodeQuery>,
) -> Response {
    let mut st = state.lock().await;
    let (sid, is_new) = session(&mut st, &headers);
    let Some(code) = query.code else {
        return respond(
            StatusCode::BAD_REQUEST,
            Some(json!({"Bad Request": "Code parameter not found in request"})),
            &sid,
            is_new,
        );
    };
    match st.rooms.get(&code) {
        Some(room) => respond(
            StatusCode::OK,
            Some(json!({
                "code": code,
                "votes_to_skip": room.votes_to_skip,
                "guest_can_pause": room.guest_can_pause,
                "is_host": room.host == sid,
            })),
            &sid,
            is_new,
        ),
        None => respond(
            StatusCode::NOT_FOUND,
            Some(json!({"Room Not Found": "Invalid Room Code."})),
            &sid,
            is_new,
        ),
    }
}

async fn join_room(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<CodeBody>,
) -> Response {
    let mut st = state.lock().await;
    let (sid, is_new) = session(&mut st, &headers);
    if !st.rooms.contains_key(&body.code) {
        return respond(
            StatusCode::BAD_REQUEST,
            Some(json!({"Bad Request": "Invalid Room Code"})),
            &sid,
            is_new,
        );
    }
    st.memberships.insert(sid.clone(), Some(body.code));
    respond(StatusCode::OK, Some(json!({"message": "Room Joined!"})), &sid, is_new)
}

async fn leave_room(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut st = state.lock().await;
    let (sid, is_new) = session(&mut st, &headers);
    st.memberships.insert(sid.clone(), None);
    st.rooms.retain(|_, room| room.host != sid);
    respond(StatusCode::OK, Some(json!({"Message": "Success"})), &sid, is_new)
}

async fn current_song(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut st = state.lock().await;
    let (sid, is_new) = session(&mut st, &headers);
    let in_room = st.memberships.get(&sid).cloned().flatten().is_some();
    match (&st.song, in_room) {
        (_, false) => respond(StatusCode::NOT_FOUND, Some(json!({})), &sid, is_new),
        (None, true) => respond(StatusCode::NO_CONTENT, None, &sid, is_new),
        (Some(song), true) => respond(StatusCode::OK, Some(song.clone()), &sid, is_new),
    }
}

async fn is_authenticated(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut st = state.lock().await;
    let (sid, is_new) = session(&mut st, &headers);
    let status = st.authenticated;
    respond(StatusCode::OK, Some(json!({"status": status})), &sid, is_new)
}

async fn auth_url(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut st = state.lock().await;
    let (sid, is_new) = session(&mut st, &headers);
    respond(
        StatusCode::OK,
        Some(json!({"url": "https://accounts.spotify.com/authorize?response_type=code"})),
        &sid,
        is_new,
    )
}

/// Host, or guest in a room that allows guests to pause
fn may_control(st: &StubState, sid: &str) -> bool {
    let Some(Some(code)) = st.memberships.get(sid) else {
        return false;
    };
    st.rooms
        .get(code)
        .is_some_and(|room| room.host == sid || room.guest_can_pause)
}

async fn set_playing(state: Shared, headers: HeaderMap, playing: bool) -> Response {
    let mut st = state.lock().await;
    let (sid, is_new) = session(&mut st, &headers);
    if !may_control(&st, &sid) {
        return respond(StatusCode::FORBIDDEN, Some(json!({})), &sid, is_new);
    }
    st.playback_calls
        .push(if playing { "play" } else { "pause" }.to_string());
    if let Some(song) = st.song.as_mut() {
        song["is_playing"] = json!(playing);
    }
    respond(StatusCode::NO_CONTENT, None, &sid, is_new)
}

async fn play(State(state): State<Shared>, headers: HeaderMap) -> Response {
    set_playing(state, headers, true).await
}

async fn pause(State(state): State<Shared>, headers: HeaderMap) -> Response {
    set_playing(state, headers, false).await
}

async fn skip(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut st = state.lock().await;
    let (sid, is_new) = session(&mut st, &headers);
    st.playback_calls.push("skip".to_string());
    respond(StatusCode::NO_CONTENT, None, &sid, is_new)
}
