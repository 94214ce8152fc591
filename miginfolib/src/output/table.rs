//! ASCII table rendering for migration records.
//!
//! The table has five columns: version, description, type, installed on and
//! state. Four of them are sized from the data; "Installed on" is always 19
//! characters wide, the length of a second-precision ISO-8601 timestamp.
//!
//! ```text
//! +---------+--------------+--------------+---------------------+---------+
//! | Version | Description  | Type         | Installed on        | State   |
//! +---------+--------------+--------------+---------------------+---------+
//! | 1       | create table | SQL          | 2024-01-01T10:00:00 | Success |
//! +---------+--------------+--------------+---------------------+---------+
//! ```
//!
//! Rendering is a pure function of its input: no I/O, no logging, and the
//! same records always produce the same bytes.

use chrono::NaiveDateTime;

use super::options::{TableOptions, TypeWidth};
use crate::data::MigrationInfo;

const VERSION_TITLE: &str = "Version";
const DESCRIPTION_TITLE: &str = "Description";
const TYPE_TITLE: &str = "Type";
const INSTALLED_ON_TITLE: &str = "Installed on";
const STATE_TITLE: &str = "State";

/// Fixed width of the "Installed on" column.
pub const INSTALLED_ON_WIDTH: usize = 19;

const NO_MIGRATIONS: &str = "| No migrations found";

const INSTALLED_ON_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Widths of the data-driven columns.
///
/// Each width is at least the length of its column title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub version: usize,
    pub description: usize,
    pub migration_type: usize,
    pub state: usize,
}

impl ColumnWidths {
    /// Widths of the column titles alone.
    pub fn titles() -> Self {
        Self {
            version: text_width(VERSION_TITLE),
            description: text_width(DESCRIPTION_TITLE),
            migration_type: text_width(TYPE_TITLE),
            state: text_width(STATE_TITLE),
        }
    }

    /// Measure column widths over all records in one pass.
    pub fn measure<M: MigrationInfo>(infos: &[M], options: &TableOptions) -> Self {
        infos.iter().fold(Self::titles(), |widths, info| {
            let version = info.version().map_or(0, |v| text_width(v.as_str()));
            let type_text = match options.type_width {
                TypeWidth::Description => info.description(),
                TypeWidth::TypeName => info.migration_type().name(),
            };

            Self {
                version: widths.version.max(version),
                description: widths.description.max(text_width(info.description())),
                migration_type: widths.migration_type.max(text_width(type_text)),
                state: widths.state.max(text_width(info.state().display_name())),
            }
        })
    }

    /// The horizontal ruler, newline-terminated.
    pub fn ruler(&self) -> String {
        self.line(["", "", "", "", ""], '-', '+')
    }

    fn header(&self) -> String {
        self.line(
            [
                VERSION_TITLE,
                DESCRIPTION_TITLE,
                TYPE_TITLE,
                INSTALLED_ON_TITLE,
                STATE_TITLE,
            ],
            ' ',
            '|',
        )
    }

    fn row<M: MigrationInfo>(&self, info: &M) -> String {
        let version = info.version().map(|v| v.as_str()).unwrap_or_default();
        let installed_on = format_installed_on(info.installed_on());

        self.line(
            [
                version,
                info.description(),
                info.migration_type().name(),
                &installed_on,
                info.state().display_name(),
            ],
            ' ',
            '|',
        )
    }

    /// Lay out one line: every cell is fitted to its column and surrounded
    /// by one `fill` on each side, with `edge` between and around cells.
    fn line(&self, cells: [&str; 5], fill: char, edge: char) -> String {
        let widths = [
            self.version,
            self.description,
            self.migration_type,
            INSTALLED_ON_WIDTH,
            self.state,
        ];

        let mut line = String::new();
        line.push(edge);
        for (cell, width) in cells.into_iter().zip(widths) {
            line.push(fill);
            line.push_str(&trim_or_pad(cell, width, fill));
            line.push(fill);
            line.push(edge);
        }
        line.push('\n');
        line
    }
}

/// Render migrations as an ASCII table, one row per record in input order.
///
/// Uses the classic layout, where the type column is sized from the
/// descriptions (see [`TypeWidth::Description`]).
pub fn dump_to_ascii_table<M: MigrationInfo>(infos: &[M]) -> String {
    dump_to_ascii_table_with(infos, &TableOptions::default())
}

/// Render migrations as an ASCII table with the given options.
pub fn dump_to_ascii_table_with<M: MigrationInfo>(infos: &[M], options: &TableOptions) -> String {
    let widths = ColumnWidths::measure(infos, options);
    let ruler = widths.ruler();

    let mut table = String::new();
    table.push_str(&ruler);
    table.push_str(&widths.header());
    table.push_str(&ruler);

    if infos.is_empty() {
        table.push_str(&trim_or_pad(NO_MIGRATIONS, text_width(&ruler) - 2, ' '));
        table.push_str("|\n");
    } else {
        for info in infos {
            table.push_str(&widths.row(info));
        }
    }

    table.push_str(&ruler);
    table
}

/// Fit `text` to exactly `width` characters.
///
/// Shorter text is right-padded with `fill`; longer text is cut, without
/// any ellipsis.
pub fn trim_or_pad(text: &str, width: usize, fill: char) -> String {
    let mut fitted: String = text.chars().take(width).collect();
    let len = text_width(&fitted);
    fitted.extend(std::iter::repeat(fill).take(width - len));
    fitted
}

/// Format an install timestamp for the "Installed on" column.
///
/// Returns an empty string for migrations that were never applied.
pub fn format_installed_on(installed_on: Option<NaiveDateTime>) -> String {
    installed_on
        .map(|ts| ts.format(INSTALLED_ON_FORMAT).to_string())
        .unwrap_or_default()
}

/// Width of text in characters.
fn text_width(text: &str) -> usize {
    text.chars().count()
}
