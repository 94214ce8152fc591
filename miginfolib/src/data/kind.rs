//! Migration types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MigInfoError;

/// How a migration was defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MigrationType {
    /// Marker for a schema created by the migration tool
    Schema,
    /// Marker for a baseline applied to an existing database
    Baseline,
    /// Plain SQL script
    Sql,
    /// Code migration run against a raw connection
    Jdbc,
    /// Code migration run through a template helper
    SpringJdbc,
    /// Migration provided by a custom resolver
    Custom,
}

impl MigrationType {
    /// All types, in declaration order.
    pub const ALL: [MigrationType; 6] = [
        MigrationType::Schema,
        MigrationType::Baseline,
        MigrationType::Sql,
        MigrationType::Jdbc,
        MigrationType::SpringJdbc,
        MigrationType::Custom,
    ];

    /// Symbolic name, as shown in the type column.
    pub fn name(self) -> &'static str {
        match self {
            MigrationType::Schema => "SCHEMA",
            MigrationType::Baseline => "BASELINE",
            MigrationType::Sql => "SQL",
            MigrationType::Jdbc => "JDBC",
            MigrationType::SpringJdbc => "SPRING_JDBC",
            MigrationType::Custom => "CUSTOM",
        }
    }

    /// Whether this is a marker entry rather than an actual script.
    pub fn is_synthetic(self) -> bool {
        matches!(self, MigrationType::Schema | MigrationType::Baseline)
    }
}

impl fmt::Display for MigrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MigrationType {
    type Err = MigInfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MigInfoError::UnknownMigrationType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(MigrationType::Sql.name(), "SQL");
        assert_eq!(MigrationType::SpringJdbc.name(), "SPRING_JDBC");
        assert_eq!(MigrationType::Baseline.to_string(), "BASELINE");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(MigrationType::from_str("sql").unwrap(), MigrationType::Sql);
        assert_eq!(
            MigrationType::from_str("Spring_Jdbc").unwrap(),
            MigrationType::SpringJdbc
        );
        assert!(MigrationType::from_str("python").is_err());
    }

    #[test]
    fn test_synthetic() {
        assert!(MigrationType::Schema.is_synthetic());
        assert!(MigrationType::Baseline.is_synthetic());
        assert!(!MigrationType::Sql.is_synthetic());
        assert!(!MigrationType::Custom.is_synthetic());
    }

    #[test]
    fn test_serde_uses_symbolic_name() {
        for kind in MigrationType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
    }
}
