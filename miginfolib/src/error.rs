//! Error types for miginfolib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or loading migration records.
///
/// Rendering itself is infallible; these only come from parsing input.
#[derive(Error, Debug)]
pub enum MigInfoError {
    /// Version string is not a dotted sequence of numbers
    #[error("invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    /// Unknown migration type name
    #[error("unknown migration type: {0}")]
    UnknownMigrationType(String),

    /// Unknown migration state name
    #[error("unknown migration state: {0}")]
    UnknownMigrationState(String),

    /// Unknown rendering option value
    #[error("invalid value '{value}' for {option}")]
    InvalidOption { option: &'static str, value: String },

    /// Failed to read an input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed JSON input
    #[error("invalid migration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
