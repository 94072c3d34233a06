//! JSON-backed history store: load/create, append, rename, persist.

pub mod error;
pub mod history;

pub use error::StoreError;
pub use history::HistoryStore;
