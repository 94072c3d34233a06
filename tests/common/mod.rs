//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for on-disk history documents in the persisted JSON shape.
pub struct HistoryFileBuilder {
    name: String,
    entries: Vec<EntryBuilder>,
    total: Option<String>,
}

impl HistoryFileBuilder {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), entries: Vec::new(), total: None }
    }

    pub fn with_entry(mut self, entry: EntryBuilder) -> Self {
        self.entries.push(entry);
        self
    }

    /// Override the stored total (by default the sum of the entry spans is
    /// not computed here; tests set the total they want on disk).
    pub fn total(mut self, total: &str) -> Self {
        self.total = Some(total.to_string());
        self
    }

    /// Render the document as JSON text.
    pub fn to_json(&self) -> String {
        let entries =
            self.entries.iter().map(EntryBuilder::to_json).collect::<Vec<_>>().join(",");
        let total = self.total.as_deref().unwrap_or("0:00:00");
        format!(
            r#"{{"name":"{}","worked_hours":[{}],"total_time_worked":"{}"}}"#,
            self.name, entries, total
        )
    }

    /// Write the document into `dir` and return its path.
    pub fn write_to(&self, dir: &Path, filename: &str) -> PathBuf {
        let path = dir.join(filename);
        fs::write(&path, self.to_json()).expect("Failed to write history file");
        path
    }
}

/// Builder for one `worked_hours` entry.
pub struct EntryBuilder {
    init_time: String,
    final_time: String,
    elapsed: String,
    task: String,
}

impl EntryBuilder {
    pub fn new() -> Self {
        Self {
            init_time: "2024-01-05 09:00:00".to_string(),
            final_time: "2024-01-05 09:00:05".to_string(),
            elapsed: "0:00:05".to_string(),
            task: "Test task".to_string(),
        }
    }

    pub fn times(mut self, init: &str, fin: &str) -> Self {
        self.init_time = init.to_string();
        self.final_time = fin.to_string();
        self
    }

    pub fn elapsed(mut self, elapsed: &str) -> Self {
        self.elapsed = elapsed.to_string();
        self
    }

    pub fn task(mut self, task: &str) -> Self {
        self.task = task.to_string();
        self
    }

    pub fn to_json(&self) -> String {
        format!(
            r#"{{"init_time":"{}","final_time":"{}","elapsed_time":"{}","task":"{}"}}"#,
            self.init_time, self.final_time, self.elapsed, self.task
        )
    }
}

impl Default for EntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A temp directory holding a single-entry demo project.
pub fn demo_project_dir() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = HistoryFileBuilder::new("Demo")
        .with_entry(EntryBuilder::new().task("first recorded session"))
        .total("0:00:05")
        .write_to(dir.path(), "demo.json");
    (dir, path)
}
