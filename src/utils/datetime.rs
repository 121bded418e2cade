//! Date and time utility functions
//!
//! This module provides the relative "time ago" formatting used by the
//! activity feed and comment threads (e.g., "Just now", "5m ago", "3h ago"),
//! plus the absolute formats shown in the header and the task inspector.

use chrono::{Local, TimeZone, Utc};

/// Current time as epoch milliseconds, the unit every record timestamp uses.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format an epoch-milliseconds timestamp relative to now.
pub fn relative_from_ms(timestamp_ms: i64) -> String {
    relative_between_ms(timestamp_ms, now_ms())
}

/// Format `timestamp_ms` relative to a caller-supplied "now".
///
/// Buckets match the dashboard's display rules: under a minute is
/// "Just now", then whole minutes, whole hours, whole days. Timestamps
/// in the future also read "Just now" rather than a negative count.
pub fn relative_between_ms(timestamp_ms: i64, now_ms: i64) -> String {
    let minutes = (now_ms - timestamp_ms) / 60_000;
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    format!("{}d ago", hours / 24)
}

/// Format an epoch-milliseconds timestamp as a short local date and time,
/// used for the created/updated stamps in the task inspector.
pub fn format_stamp_ms(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms).single() {
        Some(dt) => dt.format("%b %-d, %H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// Today's date as shown in the header bar, e.g. "Friday, June 13, 2025".
pub fn header_date() -> String {
    Local::now().format("%A, %B %-d, %Y").to_string()
}
