//! Hourly - an interactive stopwatch and per-project work history
//!
//! This library backs the `hourly` binary, a prompt-driven time tracker. It
//! supports:
//!
//! - Running a stopwatch for a work session and recording it with a free-text
//!   description
//! - Keeping one JSON history document per project, rewritten after every
//!   mutation
//! - Rendering the history as fixed-width tables, optionally filtered by
//!   index/range queries
//! - Renaming a project in place
//!
//! # Example
//!
//! ```no_run
//! use hourly::HistoryStore;
//!
//! let store = HistoryStore::create("demo.json", "Demo")?;
//! println!("{} entries so far", store.entry_count());
//! println!("{}", store.render(None)?);
//! # Ok::<(), hourly::StoreError>(())
//! ```

pub mod console;
pub mod models;
pub mod report;
pub mod shell;
pub mod stopwatch;
pub mod store;

// Re-export commonly used types
pub use models::duration::{MalformedDuration, format_duration, parse_duration};
pub use models::entry::{HistoryDocument, WorkEntry};
pub use store::error::StoreError;
pub use store::history::HistoryStore;
