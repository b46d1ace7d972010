//! reqwest implementation of the `RoomApi` port.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    domain::{ApiError, PlaybackState, Room, RoomApi, RoomCode, RoomDetails, RoomSettings},
    infrastructure::dto::http::{
        AuthUrlResponse, CreateRoomRequest, CurrentSongDto, IsAuthenticatedResponse,
        JoinRoomRequest, RoomDetailDto, RoomDto, UpdateRoomRequest, UserInRoomResponse,
        error_message,
    },
};

/// HTTP client for the room backend.
///
/// Membership is tracked by the backend through a session cookie, so the
/// underlying client keeps a cookie store for its whole lifetime.
pub struct HttpRoomApi {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpRoomApi {
    /// Build a client for `base_url` with a per-request `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Configured timeout in whole milliseconds, saturating at `u64::MAX`.
    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    fn map_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout {
                after_ms: self.timeout_ms(),
            }
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }

    /// Send a request and return the response whatever its status.
    async fn send_raw(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response, ApiError> {
        tracing::debug!("{} {}", method, path);
        let mut request = self.client.request(method.clone(), self.url(path));
        if let Some(body) = body {
            request = request.json(&body);
        }
        request.send().await.map_err(|e| {
            let err = self.map_error(e);
            tracing::warn!("{} {} failed: {}", method, path, err);
            err
        })
    }

    /// Send a request and turn non-2xx responses into `ApiError::Rejected`.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response, ApiError> {
        let response = self.send_raw(method.clone(), path, body).await?;
        ensure_success(&method, path, response).await
    }

    async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| self.map_error(e))
    }
}

async fn ensure_success(method: &Method, path: &str, response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = match error_message(&body) {
        m if m.is_empty() => status
            .canonical_reason()
            .unwrap_or("Unknown status")
            .to_string(),
        m => m,
    };
    tracing::warn!("{} {} rejected with {}: {}", method, path, status, message);
    Err(ApiError::Rejected {
        status: status.as_u16(),
        message,
    })
}

fn to_body<T: serde::Serialize>(value: &T) -> Result<Option<serde_json::Value>, ApiError> {
    serde_json::to_value(value)
        .map(Some)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl RoomApi for HttpRoomApi {
    async fn create_room(&self, settings: RoomSettings) -> Result<Room, ApiError> {
        let body = to_body(&CreateRoomRequest::from(settings))?;
        let response = self.send(Method::POST, "/api/create-room", body).await?;
        let dto: RoomDto = self.read_json(response).await?;
        dto.into_room(settings)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn update_room(
        &self,
        code: &RoomCode,
        settings: RoomSettings,
    ) -> Result<(), ApiError> {
        let body = to_body(&UpdateRoomRequest {
            votes_to_skip: settings.votes_to_skip.value(),
            guest_can_pause: settings.guest_can_pause,
            code: code.as_str().to_string(),
        })?;
        self.send(Method::PATCH, "/api/update-room", body).await?;
        Ok(())
    }

    async fn current_room(&self) -> Result<Option<RoomCode>, ApiError> {
        let response = self.send(Method::GET, "/api/user-in-room", None).await?;
        let dto: UserInRoomResponse = self.read_json(response).await?;
        match dto.code {
            Some(code) if !code.trim().is_empty() => RoomCode::new(code)
                .map(Some)
                .map_err(|e| ApiError::Decode(e.to_string())),
            _ => Ok(None),
        }
    }

    async fn get_room(&self, code: &RoomCode) -> Result<RoomDetails, ApiError> {
        let path = format!("/api/get-room?code={}", code);
        let response = self.send(Method::GET, &path, None).await?;
        let dto: RoomDetailDto = self.read_json(response).await?;
        dto.into_details(code)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn join_room(&self, code: &RoomCode) -> Result<(), ApiError> {
        let body = to_body(&JoinRoomRequest {
            code: code.as_str().to_string(),
        })?;
        self.send(Method::POST, "/api/join-room", body).await?;
        Ok(())
    }

    async fn leave_room(&self) -> Result<(), ApiError> {
        self.send(Method::POST, "/api/leave-room", None).await?;
        Ok(())
    }

    async fn current_song(&self) -> Result<Option<PlaybackState>, ApiError> {
        let method = Method::GET;
        let path = "/spotify/current-song";
        let response = self.send_raw(method.clone(), path, None).await?;
        // 204: nothing playing, 404: the session is not in a room
        match response.status() {
            StatusCode::NO_CONTENT | StatusCode::NOT_FOUND => Ok(None),
            _ => {
                let response = ensure_success(&method, path, response).await?;
                let dto: CurrentSongDto = self.read_json(response).await?;
                Ok(Some(dto.into()))
            }
        }
    }

    async fn is_authenticated(&self) -> Result<bool, ApiError> {
        let response = self
            .send(Method::GET, "/spotify/is-authenticated", None)
            .await?;
        let dto: IsAuthenticatedResponse = self.read_json(response).await?;
        Ok(dto.status)
    }

    async fn auth_url(&self) -> Result<String, ApiError> {
        let response = self.send(Method::GET, "/spotify/get-auth-url", None).await?;
        let dto: AuthUrlResponse = self.read_json(response).await?;
        Ok(dto.url)
    }

    async fn play(&self) -> Result<(), ApiError> {
        self.send(Method::PUT, "/spotify/play", None).await?;
        Ok(())
    }

    async fn pause(&self) -> Result<(), ApiError> {
        self.send(Method::PUT, "/spotify/pause", None).await?;
        Ok(())
    }

    async fn skip(&self) -> Result<(), ApiError> {
        self.send(Method::POST, "/spotify/skip", None).await?;
        Ok(())
    }
}
