//! Reading records from JSON produced by the CMS REST API.
//!
//! The list endpoint returns an array and the by-slug endpoint returns an
//! array of at most one element; hand-saved fixtures are often a bare
//! object. All three shapes are accepted.

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::{ContentRecord, RecordError};

/// Parse one or many records from a JSON document.
pub fn parse_records(json: &str) -> Result<Vec<ContentRecord>, RecordError> {
    let value: Value = serde_json::from_str(json)?;
    let records: Vec<ContentRecord> = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        Value::Object(_) => vec![serde_json::from_value(value)?],
        _ => return Err(RecordError::Empty),
    };

    if records.is_empty() {
        return Err(RecordError::Empty);
    }
    if let Some(bad) = records.iter().find(|r| r.slug.trim().is_empty()) {
        return Err(RecordError::EmptySlug { id: bad.id });
    }
    Ok(records)
}

/// Load every record in the JSON file at `path`.
pub fn load_records(path: &Path) -> Result<Vec<ContentRecord>, RecordError> {
    let data = fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&data)?;
    tracing::debug!(
        "loaded {} record(s) from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}
