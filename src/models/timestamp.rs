//! Timestamp rendering for persisted entries.
//!
//! Timestamps are stored and displayed as plain `YYYY-MM-DD HH:MM:SS[.ffffff]`
//! strings and are never parsed back into structured time. Existing history
//! files rely on this exact shape, including the omitted fraction when the
//! subsecond part is zero.

use chrono::{DateTime, Local, Timelike};

/// Render a local timestamp the way it is written into the history file.
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    let micros = time.nanosecond() / 1_000;
    if micros == 0 {
        time.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        format!("{}.{micros:06}", time.format("%Y-%m-%d %H:%M:%S"))
    }
}
