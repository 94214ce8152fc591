//! Migration data model.
//!
//! These are the values the table renderer consumes. They are produced
//! elsewhere (a schema history table, a resolver scanning script folders)
//! and arrive here already computed:
//!
//! - **MigrationVersion**: dotted numeric version with numeric ordering
//! - **MigrationType**: how the migration was defined (`SQL`, `BASELINE`, ...)
//! - **MigrationState**: current state plus its display label
//! - **MigrationRecord**: one row's worth of the above, plus description and
//!   install timestamp
//!
//! ## Example
//!
//! ```rust
//! use miginfolib::data::{MigrationRecord, MigrationState, MigrationType, MigrationVersion};
//!
//! let record = MigrationRecord::new("create users", MigrationType::Sql, MigrationState::Pending)
//!     .with_version(MigrationVersion::parse("1_1").unwrap());
//! assert_eq!(record.version.unwrap().to_string(), "1.1");
//! ```

pub mod kind;
pub mod record;
pub mod state;
pub mod version;

pub use kind::MigrationType;
pub use record::{MigrationInfo, MigrationRecord};
pub use state::MigrationState;
pub use version::MigrationVersion;
