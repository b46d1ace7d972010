pub mod http;

pub use http::HttpRoomApi;
