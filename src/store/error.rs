//! Typed errors for the history store and report rendering.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading, mutating or rendering a
/// project history.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A caller-supplied value was unusable, e.g. an empty project name.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Opening an existing project pointed at a path that is not there.
    #[error("history file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file is not a valid serialized history document. Covers malformed
    /// JSON as well as malformed stored duration strings.
    #[error("invalid history document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A render query referenced an entry position that does not exist.
    #[error("entry index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    /// Reading or writing the history file failed.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
