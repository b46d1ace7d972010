use chrono::{DateTime, Local, Utc};

/// Current Unix timestamp in milliseconds (UTC).
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a Unix timestamp in milliseconds as local `HH:MM:SS`.
///
/// Out-of-range values fall back to the raw number.
pub fn millis_to_local_clock(millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(utc) => utc.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => millis.to_string(),
    }
}

/// Format a track position in milliseconds as `m:ss`.
pub fn format_track_time(millis: u64) -> String {
    let total_secs = millis / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}
