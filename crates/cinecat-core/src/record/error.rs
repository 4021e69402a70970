//! Errors from loading content records.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read record file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document was valid JSON but held neither a record nor a non-empty list of them.
    #[error("no content records found")]
    Empty,

    #[error("record {id} has an empty slug")]
    EmptySlug { id: i64 },
}
