//! # miginfolib
//!
//! Data model and ASCII table rendering for database migration status.
//!
//! ## Overview
//!
//! A migration tool knows, for every migration, its version, description,
//! type, when it was installed and what state it is in. This library turns a
//! list of those into a fixed-width table suitable for a console or a log:
//!
//! ```text
//! +---------+--------------+--------------+---------------------+---------+
//! | Version | Description  | Type         | Installed on        | State   |
//! +---------+--------------+--------------+---------------------+---------+
//! | 1       | create table | SQL          | 2024-01-01T10:00:00 | Success |
//! +---------+--------------+--------------+---------------------+---------+
//! ```
//!
//! ## Features
//!
//! - **Typed data model**: versions with numeric ordering, closed enums for
//!   type and state (each state with its display label)
//! - **Pure rendering**: no I/O, deterministic output, safe from any thread
//! - **Bring your own records**: render anything implementing [`MigrationInfo`]
//! - **JSON loading**: read records from a file or string
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use miginfolib::{
//!     dump_to_ascii_table, MigrationRecord, MigrationState, MigrationType, MigrationVersion,
//! };
//!
//! let installed = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//! let records = vec![
//!     MigrationRecord::new("create table", MigrationType::Sql, MigrationState::Success)
//!         .with_version(MigrationVersion::parse("1").unwrap())
//!         .with_installed_on(installed),
//! ];
//!
//! let table = dump_to_ascii_table(&records);
//! assert!(table.contains("| 1       | create table | SQL          | 2024-01-01T10:00:00 | Success |"));
//! assert_eq!(table.lines().count(), 5);
//! ```

pub mod data;
pub mod error;
pub mod input;
pub mod output;

pub use data::{MigrationInfo, MigrationRecord, MigrationState, MigrationType, MigrationVersion};
pub use error::MigInfoError;
pub use input::{load_records, parse_records};
pub use output::{dump_to_ascii_table, dump_to_ascii_table_with, TableOptions, TypeWidth};

/// Result type for miginfolib operations
pub type Result<T> = std::result::Result<T, MigInfoError>;
