//! UseCase 層
//!
//! ユーザー操作ごとのロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層の `RoomApi` を操作します。

pub mod bootstrap;
pub mod create_room;
pub mod error;
pub mod join_room;
pub mod leave_room;
pub mod playback_control;
pub mod spotify_auth;
pub mod update_room;

pub use bootstrap::BootstrapUseCase;
pub use create_room::CreateRoomUseCase;
pub use error::{CreateRoomError, JoinRoomError, PlaybackError, UpdateRoomError};
pub use join_room::JoinRoomUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use playback_control::{PlaybackCommand, PlaybackControlUseCase};
pub use spotify_auth::SpotifyAuthUseCase;
pub use update_room::UpdateRoomUseCase;
