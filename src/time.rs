use chrono::Utc;

/// Current Unix timestamp in milliseconds (UTC)
pub fn unix_timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}
