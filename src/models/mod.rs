//! Data models for the persisted project history.
//!
//! - [`HistoryDocument`] - the one JSON document owned by a shell session
//! - [`WorkEntry`] - a single recorded work session
//! - [`duration`] - the canonical duration grammar shared by display and disk
//! - [`timestamp`] - opaque timestamp strings as written into the file

pub mod duration;
pub mod entry;
pub mod timestamp;

pub use duration::{MalformedDuration, format_duration, parse_duration};
pub use entry::{HistoryDocument, WorkEntry};
pub use timestamp::format_timestamp;
