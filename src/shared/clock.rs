//! Wall-clock helpers
//!
//! Presence timestamps are epoch milliseconds; message `time` fields are the
//! local `HH:MM:SS` rendering of the same instant.

use chrono::{Local, TimeZone, Utc};

/// Current time in epoch milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format an epoch-millisecond instant as local `HH:MM:SS`
pub fn clock_time(at_millis: i64) -> String {
    match Local.timestamp_millis_opt(at_millis).earliest() {
        Some(at) => at.format("%H:%M:%S").to_string(),
        None => Local::now().format("%H:%M:%S").to_string(),
    }
}
