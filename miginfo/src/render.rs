//! Output rendering for the CLI

use std::str::FromStr;

use miginfolib::{dump_to_ascii_table_with, MigrationRecord, TableOptions};
use serde::Serialize;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// ASCII table
    #[default]
    Table,
    /// Normalized records as pretty JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow::anyhow!("Unknown output format: {}", s)),
        }
    }
}

/// JSON envelope; readable back by `miginfo` itself
#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    count: usize,
    migrations: &'a [MigrationRecord],
}

/// Render records in the requested format
pub fn render(
    records: &[MigrationRecord],
    format: OutputFormat,
    options: &TableOptions,
) -> Result<String, anyhow::Error> {
    match format {
        OutputFormat::Table => Ok(dump_to_ascii_table_with(records, options)),
        OutputFormat::Json => {
            let output = JsonOutput {
                count: records.len(),
                migrations: records,
            };
            let mut json = serde_json::to_string_pretty(&output)?;
            json.push('\n');
            Ok(json)
        }
    }
}
