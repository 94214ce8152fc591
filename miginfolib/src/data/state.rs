//! Migration states.
//!
//! A state combines where a migration was found (resolved from the available
//! scripts or not) with what the schema history says about it (applied or
//! not, failed or not). Each state carries the label shown in the state
//! column, which differs from its symbolic name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MigInfoError;

/// The state of a migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MigrationState {
    /// Not applied yet
    Pending,
    /// Not applied, and newer than the configured target
    AboveTarget,
    /// Not applied, and older than the baseline
    BelowBaseline,
    /// Baseline marker
    Baseline,
    /// Skipped while a newer version was already applied
    Ignored,
    /// Applied successfully, but no longer available
    MissingSuccess,
    /// Failed, and no longer available
    MissingFailed,
    /// Applied successfully
    Success,
    /// Failed
    Failed,
    /// Applied out of order, after a newer version
    OutOfOrder,
    /// Applied successfully by a newer release than the one available
    FutureSuccess,
    /// Failed, applied by a newer release than the one available
    FutureFailed,
    /// Repeatable migration whose script changed since it ran
    Outdated,
    /// Repeatable migration replaced by a newer run
    Superseded,
}

impl MigrationState {
    /// All states, in declaration order.
    pub const ALL: [MigrationState; 14] = [
        MigrationState::Pending,
        MigrationState::AboveTarget,
        MigrationState::BelowBaseline,
        MigrationState::Baseline,
        MigrationState::Ignored,
        MigrationState::MissingSuccess,
        MigrationState::MissingFailed,
        MigrationState::Success,
        MigrationState::Failed,
        MigrationState::OutOfOrder,
        MigrationState::FutureSuccess,
        MigrationState::FutureFailed,
        MigrationState::Outdated,
        MigrationState::Superseded,
    ];

    /// Human-readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            MigrationState::Pending => "Pending",
            MigrationState::AboveTarget => "Above Target",
            MigrationState::BelowBaseline => "Below Baseline",
            MigrationState::Baseline => "Baseline",
            MigrationState::Ignored => "Ignored",
            MigrationState::MissingSuccess => "Missing",
            MigrationState::MissingFailed => "Failed (Missing)",
            MigrationState::Success => "Success",
            MigrationState::Failed => "Failed",
            MigrationState::OutOfOrder => "Out of Order",
            MigrationState::FutureSuccess => "Future",
            MigrationState::FutureFailed => "Failed (Future)",
            MigrationState::Outdated => "Outdated",
            MigrationState::Superseded => "Superseded",
        }
    }

    /// Symbolic name, as used in JSON.
    pub fn name(self) -> &'static str {
        match self {
            MigrationState::Pending => "PENDING",
            MigrationState::AboveTarget => "ABOVE_TARGET",
            MigrationState::BelowBaseline => "BELOW_BASELINE",
            MigrationState::Baseline => "BASELINE",
            MigrationState::Ignored => "IGNORED",
            MigrationState::MissingSuccess => "MISSING_SUCCESS",
            MigrationState::MissingFailed => "MISSING_FAILED",
            MigrationState::Success => "SUCCESS",
            MigrationState::Failed => "FAILED",
            MigrationState::OutOfOrder => "OUT_OF_ORDER",
            MigrationState::FutureSuccess => "FUTURE_SUCCESS",
            MigrationState::FutureFailed => "FUTURE_FAILED",
            MigrationState::Outdated => "OUTDATED",
            MigrationState::Superseded => "SUPERSEDED",
        }
    }

    /// Whether the migration is available among the resolved scripts.
    pub fn is_resolved(self) -> bool {
        !matches!(
            self,
            MigrationState::MissingSuccess
                | MigrationState::MissingFailed
                | MigrationState::FutureSuccess
                | MigrationState::FutureFailed
        )
    }

    /// Whether the schema history has an entry for the migration.
    pub fn is_applied(self) -> bool {
        !matches!(
            self,
            MigrationState::Pending
                | MigrationState::AboveTarget
                | MigrationState::BelowBaseline
                | MigrationState::Ignored
        )
    }

    /// Whether the migration's last run failed.
    pub fn is_failed(self) -> bool {
        matches!(
            self,
            MigrationState::MissingFailed | MigrationState::Failed | MigrationState::FutureFailed
        )
    }
}

impl fmt::Display for MigrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for MigrationState {
    type Err = MigInfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MigInfoError::UnknownMigrationState(s.to_string()))
    }
}
