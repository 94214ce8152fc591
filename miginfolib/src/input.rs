//! Loading migration records from JSON.
//!
//! Accepts either a bare array of records or an object with a
//! `migrations` array:
//!
//! ```json
//! { "migrations": [
//!     { "version": "1", "description": "init", "type": "SQL",
//!       "installed_on": "2024-01-01T10:00:00", "state": "SUCCESS" }
//! ] }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::data::MigrationRecord;
use crate::error::MigInfoError;
use crate::Result;

#[derive(Deserialize)]
struct Wrapped {
    migrations: Vec<MigrationRecord>,
}

/// Parse migration records from a JSON string.
pub fn parse_records(json: &str) -> Result<Vec<MigrationRecord>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let records = if value.is_object() {
        serde_json::from_value::<Wrapped>(value)?.migrations
    } else {
        serde_json::from_value::<Vec<MigrationRecord>>(value)?
    };
    debug!("parsed {} migration records", records.len());
    Ok(records)
}

/// Read and parse migration records from a JSON file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<MigrationRecord>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| MigInfoError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!("read {} bytes from {}", contents.len(), path.display());
    parse_records(&contents)
}
