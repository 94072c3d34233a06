//! The on-disk history store.
//!
//! One [`HistoryStore`] owns one project's JSON document for the lifetime of a
//! shell session. Every mutation (new entry, rename) is followed synchronously
//! by a full rewrite of the file; there is no incremental append. That is
//! enough for a single-user, single-process tool with low-frequency writes.
//!
//! # Loading and the stored total
//!
//! On open, the running total is taken from the file's `total_time_worked`
//! string rather than recomputed from the entries. Hand-edited files keep
//! whatever total they claim; when the stored value disagrees with the sum of
//! the entries a warning is printed to stderr and the stored value still wins.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeDelta};

use crate::models::{HistoryDocument, WorkEntry, format_duration, format_timestamp};
use crate::report;
use crate::store::error::StoreError;

pub struct HistoryStore {
    path: PathBuf,
    doc: HistoryDocument,
}

impl HistoryStore {
    /// Create a fresh project history and persist it immediately.
    ///
    /// Fails with [`StoreError::InvalidArgument`] on an empty project name,
    /// in which case nothing is written.
    pub fn create(path: impl Into<PathBuf>, project_name: &str) -> Result<Self, StoreError> {
        if project_name.is_empty() {
            return Err(StoreError::InvalidArgument(
                "project name must not be empty".to_string(),
            ));
        }

        let store = Self { path: path.into(), doc: HistoryDocument::new(project_name) };
        store.persist()?;
        Ok(store)
    }

    /// Load an existing project history from disk.
    ///
    /// Fails with [`StoreError::NotFound`] if the path does not exist and
    /// [`StoreError::Parse`] if the file is not a valid history document.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            return Err(StoreError::NotFound(path));
        }

        let raw = fs::read_to_string(&path)
            .map_err(|source| StoreError::Io { path: path.clone(), source })?;
        let doc: HistoryDocument = serde_json::from_str(&raw)?;

        let computed = doc.computed_total();
        if computed != doc.total_time_worked {
            eprintln!(
                "Warning: stored total {} differs from the sum of entries {}; keeping the stored value",
                format_duration(doc.total_time_worked),
                format_duration(computed),
            );
        }

        Ok(Self { path, doc })
    }

    /// Append one work session and persist the whole document.
    ///
    /// The stopwatch guarantees `end >= start`; no ordering validation happens
    /// here and duplicates are allowed.
    pub fn add_entry(
        &mut self,
        start: DateTime<Local>,
        end: DateTime<Local>,
        elapsed: TimeDelta,
        description: &str,
    ) -> Result<(), StoreError> {
        self.doc.worked_hours.push(WorkEntry {
            init_time: format_timestamp(&start),
            final_time: format_timestamp(&end),
            elapsed,
            description: description.to_string(),
        });
        self.doc.total_time_worked = self.doc.total_time_worked + elapsed;
        self.persist()
    }

    /// Replace the project name and persist.
    pub fn rename(&mut self, new_name: &str) -> Result<(), StoreError> {
        self.doc.name = new_name.to_string();
        self.persist()
    }

    pub fn project_name(&self) -> &str {
        &self.doc.name
    }

    pub fn entry_count(&self) -> usize {
        self.doc.worked_hours.len()
    }

    pub fn total_time_worked(&self) -> TimeDelta {
        self.doc.total_time_worked
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &HistoryDocument {
        &self.doc
    }

    /// Summary table: every column plus truncated descriptions.
    ///
    /// `query = None` selects all entries in ascending order.
    pub fn render(&self, query: Option<&BTreeSet<usize>>) -> Result<String, StoreError> {
        report::summary_table(&self.doc, query)
    }

    /// The prior tool's four-column table, without descriptions.
    pub fn render_compact(&self, query: Option<&BTreeSet<usize>>) -> Result<String, StoreError> {
        report::compact_table(&self.doc, query)
    }

    /// Per-entry blocks with full word-wrapped descriptions.
    pub fn render_descriptions(
        &self,
        query: Option<&BTreeSet<usize>>,
    ) -> Result<String, StoreError> {
        report::description_detail(&self.doc, query)
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.doc)?;
        fs::write(&self.path, json)
            .map_err(|source| StoreError::Io { path: self.path.clone(), source })
    }
}
