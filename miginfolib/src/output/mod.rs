//! Output formatting: present migrations as an ASCII table.
//!
//! - **dump_to_ascii_table**: render records with the classic layout
//! - **TableOptions**: choose how the type column is sized
//! - **ColumnWidths**: the measured layout, for callers that need it
//!
//! Rendering never fails and never writes anywhere; callers decide where
//! the returned string goes.
//!
//! ## Example
//!
//! ```rust
//! use miginfolib::data::MigrationRecord;
//! use miginfolib::output::dump_to_ascii_table;
//!
//! let records: Vec<MigrationRecord> = Vec::new();
//! let table = dump_to_ascii_table(&records);
//! assert!(table.contains("No migrations found"));
//! ```

pub mod options;
pub mod table;

pub use options::{TableOptions, TypeWidth};
pub use table::{
    dump_to_ascii_table, dump_to_ascii_table_with, format_installed_on, trim_or_pad,
    ColumnWidths, INSTALLED_ON_WIDTH,
};
