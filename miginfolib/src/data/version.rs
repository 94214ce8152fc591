//! Migration versions.
//!
//! A version is a dotted list of numbers such as `1`, `1.2` or `2024.01.15.1`.
//! Underscores are accepted as separators (`1_2` is the same as `1.2`), which
//! is how versions usually appear in script file names.
//!
//! Comparison is numeric part by part. Missing trailing parts count as zero,
//! so `1`, `1.0` and `1.0.0` are all the same version.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::MigInfoError;
use crate::Result;

/// A parsed migration version.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MigrationVersion {
    /// Numeric parts, trailing zeros stripped
    parts: Vec<u64>,
    /// Normalized text as given (underscores replaced by dots)
    display: String,
}

impl MigrationVersion {
    /// Parse a version string.
    pub fn parse(text: &str) -> Result<Self> {
        let display = text.replace('_', ".");
        if display.is_empty() {
            return Err(invalid(text, "version is empty"));
        }

        let mut parts = Vec::new();
        for part in display.split('.') {
            if part.is_empty() {
                return Err(invalid(text, "empty version part"));
            }
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid(
                    text,
                    "only digits and '.' or '_' separators are allowed",
                ));
            }
            let value = part
                .parse::<u64>()
                .map_err(|_| invalid(text, "version part is too large"))?;
            parts.push(value);
        }

        while parts.len() > 1 && parts.last() == Some(&0) {
            parts.pop();
        }

        Ok(Self { parts, display })
    }

    /// First numeric part.
    pub fn major(&self) -> u64 {
        self.parts[0]
    }

    /// Normalized numeric parts (trailing zeros stripped).
    pub fn parts(&self) -> &[u64] {
        &self.parts
    }

    /// The text shown for this version.
    pub fn as_str(&self) -> &str {
        &self.display
    }
}

fn invalid(text: &str, reason: &str) -> MigInfoError {
    MigInfoError::InvalidVersion {
        version: text.to_string(),
        reason: reason.to_string(),
    }
}

impl FromStr for MigrationVersion {
    type Err = MigInfoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MigrationVersion {
    type Error = MigInfoError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<MigrationVersion> for String {
    fn from(version: MigrationVersion) -> Self {
        version.display
    }
}

impl fmt::Display for MigrationVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl Ord for MigrationVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        for i in 0..len {
            let a = self.parts.get(i).copied().unwrap_or(0);
            let b = other.parts.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for MigrationVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for MigrationVersion {
    fn eq(&self, other: &Self) -> bool {
        // Parts are stored without trailing zeros
        self.parts == other.parts
    }
}

impl Eq for MigrationVersion {}

impl Hash for MigrationVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parts.hash(state);
    }
}
