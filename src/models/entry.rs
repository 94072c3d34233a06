//! The persisted project history document.
//!
//! On disk this is one JSON object per project:
//!
//! ```json
//! {
//!   "name": "Demo",
//!   "worked_hours": [
//!     {
//!       "init_time": "2024-01-05 09:30:00",
//!       "final_time": "2024-01-05 10:15:00",
//!       "elapsed_time": "0:45:00",
//!       "task": "wrote the report renderer"
//!     }
//!   ],
//!   "total_time_worked": "0:45:00"
//! }
//! ```
//!
//! The key names are fixed; files written by earlier versions of the tool must
//! keep loading unchanged.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use super::duration::as_duration_string;

/// One recorded work session.
///
/// Entries are immutable once appended; their display ID is their position in
/// [`HistoryDocument::worked_hours`], not a stored field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    /// Start of the session, as an opaque display string.
    pub init_time: String,
    /// End of the session, as an opaque display string.
    pub final_time: String,
    #[serde(rename = "elapsed_time", with = "as_duration_string")]
    pub elapsed: TimeDelta,
    #[serde(rename = "task")]
    pub description: String,
}

/// The full persisted record for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryDocument {
    pub name: String,
    pub worked_hours: Vec<WorkEntry>,
    #[serde(with = "as_duration_string")]
    pub total_time_worked: TimeDelta,
}

impl HistoryDocument {
    /// Fresh document with no entries and a zero total.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            worked_hours: Vec::new(),
            total_time_worked: TimeDelta::zero(),
        }
    }

    /// Sum of all entry spans, independent of the stored total.
    pub fn computed_total(&self) -> TimeDelta {
        self.worked_hours.iter().fold(TimeDelta::zero(), |acc, entry| acc + entry.elapsed)
    }
}
