//! Migration records and the read-only view the table renderer consumes.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::kind::MigrationType;
use super::state::MigrationState;
use super::version::MigrationVersion;

/// Read-only view of a single migration.
///
/// The renderer only needs these five fields. Producers that already have
/// their own migration type can implement this instead of converting into
/// [`MigrationRecord`].
pub trait MigrationInfo {
    /// Version, or `None` for repeatable migrations.
    fn version(&self) -> Option<&MigrationVersion>;

    /// Description, possibly empty.
    fn description(&self) -> &str;

    /// How the migration was defined.
    fn migration_type(&self) -> MigrationType;

    /// When the migration was applied, or `None` if it has not been.
    fn installed_on(&self) -> Option<NaiveDateTime>;

    /// Current state.
    fn state(&self) -> MigrationState;
}

/// An owned migration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationRecord {
    /// Version (`None` for repeatable migrations)
    pub version: Option<MigrationVersion>,
    /// Human-readable description
    pub description: String,
    /// Migration type
    #[serde(rename = "type")]
    pub migration_type: MigrationType,
    /// When it was applied (`None` if not yet applied)
    #[serde(
        alias = "installedOn",
        default,
        deserialize_with = "deserialize_installed_on"
    )]
    pub installed_on: Option<NaiveDateTime>,
    /// Current state
    pub state: MigrationState,
}

/// Accept both naive timestamps and RFC 3339 timestamps with an offset.
///
/// Offset timestamps keep their wall-clock time in that offset; the offset
/// itself is dropped.
fn deserialize_installed_on<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Ok(naive) = text.parse::<NaiveDateTime>() {
        return Ok(Some(naive));
    }
    DateTime::parse_from_rfc3339(&text)
        .map(|ts| Some(ts.naive_local()))
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{text}': {e}")))
}

impl MigrationRecord {
    /// Create an unversioned, not yet applied record.
    pub fn new(
        description: impl Into<String>,
        migration_type: MigrationType,
        state: MigrationState,
    ) -> Self {
        Self {
            version: None,
            description: description.into(),
            migration_type,
            installed_on: None,
            state,
        }
    }

    /// Builder: set the version
    pub fn with_version(mut self, version: MigrationVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// Builder: set the install timestamp
    pub fn with_installed_on(mut self, installed_on: NaiveDateTime) -> Self {
        self.installed_on = Some(installed_on);
        self
    }
}

impl MigrationInfo for MigrationRecord {
    fn version(&self) -> Option<&MigrationVersion> {
        self.version.as_ref()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn migration_type(&self) -> MigrationType {
        self.migration_type
    }

    fn installed_on(&self) -> Option<NaiveDateTime> {
        self.installed_on
    }

    fn state(&self) -> MigrationState {
        self.state
    }
}

impl<T: MigrationInfo + ?Sized> MigrationInfo for &T {
    fn version(&self) -> Option<&MigrationVersion> {
        (**self).version()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn migration_type(&self) -> MigrationType {
        (**self).migration_type()
    }

    fn installed_on(&self) -> Option<NaiveDateTime> {
        (**self).installed_on()
    }

    fn state(&self) -> MigrationState {
        (**self).state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_builder() {
        let installed = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let record =
            MigrationRecord::new("create table", MigrationType::Sql, MigrationState::Success)
                .with_version(MigrationVersion::parse("1").unwrap())
                .with_installed_on(installed);

        assert_eq!(
            record.version().map(|v| v.to_string()),
            Some("1".to_string())
        );
        assert_eq!(MigrationInfo::description(&record), "create table");
        assert_eq!(record.migration_type(), MigrationType::Sql);
        assert_eq!(MigrationInfo::installed_on(&record), Some(installed));
        assert_eq!(MigrationInfo::state(&record), MigrationState::Success);
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "version": "1.1",
            "description": "add index",
            "type": "SQL",
            "installed_on": "2024-03-05T08:30:00",
            "state": "SUCCESS"
        }"#;
        let record: MigrationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.version.unwrap().to_string(), "1.1");
        assert_eq!(record.migration_type, MigrationType::Sql);
        assert_eq!(
            record.installed_on.unwrap().to_string(),
            "2024-03-05 08:30:00"
        );
        assert_eq!(record.state, MigrationState::Success);
    }

    #[test]
    fn test_deserialize_nulls_and_alias() {
        let json = r#"{
            "version": null,
            "description": "refresh views",
            "type": "SQL",
            "installedOn": null,
            "state": "PENDING"
        }"#;
        let record: MigrationRecord = serde_json::from_str(json).unwrap();
        assert!(record.version.is_none());
        assert!(record.installed_on.is_none());
    }

    #[test]
    fn test_deserialize_missing_optional_fields() {
        let json = r#"{"description": "", "type": "BASELINE", "state": "BASELINE"}"#;
        let record: MigrationRecord = serde_json::from_str(json).unwrap();
        assert!(record.version.is_none());
        assert!(record.installed_on.is_none());
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_deserialize_offset_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();

        for installed_on in [
            "2024-01-01T10:00:00Z",
            "2024-01-01T10:00:00+00:00",
            "2024-01-01T10:00:00.123456+02:00",
        ] {
            let json = format!(
                r#"{{"description": "x", "type": "SQL", "installed_on": "{installed_on}", "state": "SUCCESS"}}"#
            );
            let record: MigrationRecord = serde_json::from_str(&json).unwrap();
            let ts = record.installed_on.unwrap();
            assert_eq!(ts.date(), expected.date(), "{installed_on}");
            assert_eq!(ts.format("%H:%M:%S").to_string(), "10:00:00", "{installed_on}");
        }
    }

    #[test]
    fn test_deserialize_fractional_naive_timestamp() {
        let json = r#"{"description": "x", "type": "SQL", "installed_on": "2024-01-01T10:00:00.5", "state": "SUCCESS"}"#;
        let record: MigrationRecord = serde_json::from_str(json).unwrap();
        assert!(record.installed_on.is_some());
    }

    #[test]
    fn test_deserialize_rejects_bad_timestamp() {
        let json = r#"{"description": "x", "type": "SQL", "installed_on": "yesterday", "state": "SUCCESS"}"#;
        let err = serde_json::from_str::<MigrationRecord>(json).unwrap_err();
        assert!(err.to_string().contains("invalid timestamp 'yesterday'"));
    }

    #[test]
    fn test_deserialize_rejects_bad_version() {
        let json = r#"{"version": "one", "description": "x", "type": "SQL", "state": "PENDING"}"#;
        assert!(serde_json::from_str::<MigrationRecord>(json).is_err());
    }
}
