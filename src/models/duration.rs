//! Canonical duration strings: `[D day(s), ]H:MM:SS[.ffffff]`.
//!
//! This is the textual form used both for display and inside the persisted
//! history document, so it has to stay stable across versions. The "day(s), "
//! prefix and the microsecond fraction are only present when nonzero:
//!
//! ```text
//! 0:00:05
//! 1:02:03.000450
//! 1 day, 0:00:00
//! 3 days, 12:30:00.000001
//! ```
//!
//! [`parse_duration`] is the exact inverse of [`format_duration`] for every
//! non-negative span.

use std::sync::LazyLock;

use chrono::TimeDelta;
use regex::Regex;
use thiserror::Error;

/// Error returned when a string does not match the canonical duration grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed duration: {0:?}")]
pub struct MalformedDuration(pub String);

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+) days?, )?(\d+):(\d{2}):(\d{2})(?:\.(\d{6}))?$")
        .expect("duration pattern is valid")
});

/// Render a non-negative span in the canonical form.
///
/// Zero days and zero microseconds are omitted entirely (no `0 days, `,
/// no `.000000`).
pub fn format_duration(delta: TimeDelta) -> String {
    debug_assert!(delta >= TimeDelta::zero());

    let total_seconds = delta.num_seconds();
    let micros = delta.subsec_nanos() / 1_000;
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    let mut out = String::new();
    if days == 1 {
        out.push_str("1 day, ");
    } else if days > 1 {
        out.push_str(&format!("{days} days, "));
    }
    out.push_str(&format!("{hours}:{minutes:02}:{seconds:02}"));
    if micros != 0 {
        out.push_str(&format!(".{micros:06}"));
    }
    out
}

/// Parse a canonical duration string back into a span.
///
/// The whole input must match the grammar; a missing `H:MM:SS` triple, stray
/// surrounding text or an out-of-range component all fail.
pub fn parse_duration(text: &str) -> Result<TimeDelta, MalformedDuration> {
    let malformed = || MalformedDuration(text.to_string());
    let caps = DURATION_RE.captures(text).ok_or_else(malformed)?;

    let component = |index: usize| -> Result<i64, MalformedDuration> {
        caps.get(index).map_or(Ok(0), |m| m.as_str().parse().map_err(|_| malformed()))
    };
    let days = component(1)?;
    let hours = component(2)?;
    let minutes = component(3)?;
    let seconds = component(4)?;
    let micros = component(5)?;

    components_to_delta(days, hours, minutes, seconds, micros).ok_or_else(malformed)
}

fn components_to_delta(
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    micros: i64,
) -> Option<TimeDelta> {
    let secs = days
        .checked_mul(86_400)?
        .checked_add(hours.checked_mul(3_600)?)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)?;
    TimeDelta::new(secs, (micros * 1_000) as u32)
}

/// Serde bridge between [`TimeDelta`] fields and canonical duration strings.
///
/// Used with `#[serde(with = "as_duration_string")]` on document fields, so a
/// malformed stored duration surfaces as a deserialization error on load.
pub mod as_duration_string {
    use chrono::TimeDelta;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_duration, parse_duration};

    pub fn serialize<S>(value: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_duration(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<TimeDelta, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_duration(&text).map_err(Error::custom)
    }
}
