use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::LifetimeConfig;

/// A guard column installation, as stored by the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardColumn {
    /// Record identifier
    pub id: String,

    /// Analytical column the guard protects
    pub column_id: String,

    /// Manufacturer part number
    pub part_number: String,

    /// Manufacturer lot
    #[serde(default)]
    pub batch_number: Option<String>,

    /// When the guard was installed
    pub installed_date: DateTime<Utc>,

    /// When the guard was removed, if it has been
    #[serde(default)]
    pub removed_date: Option<DateTime<Utc>>,

    /// Column injection count at installation
    #[serde(default)]
    pub installation_injection_count: u32,

    /// Column injection count at removal
    #[serde(default)]
    pub removal_injection_count: Option<u32>,

    /// Lifetime override for this guard, in injections
    #[serde(default)]
    pub expected_lifetime_injections: Option<u32>,

    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl GuardColumn {
    /// True while the guard is still installed
    pub fn is_installed(&self) -> bool {
        self.removed_date.is_none()
    }
}

/// Replacement state of a guard column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardStatus {
    /// Well within its lifetime
    Good,
    /// Replacement due soon
    Warning,
    /// Past its expected lifetime
    Overdue,
}

/// Wear of a guard column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardColumnUsage {
    /// Injections the guard has seen
    pub injections_since_install: u32,
    /// Expected lifetime in injections
    pub expected_lifetime: u32,
    /// Injections left before the expected lifetime is reached
    pub remaining_injections: u32,
    /// Share of the expected lifetime used
    pub usage_percent: f64,
    /// Replacement state
    pub status: GuardStatus,
}

/// Wear of a guard given the total injection count of its column.
///
/// For a removed guard the count stops at its removal injection count.
pub fn guard_column_usage(
    guard: &GuardColumn,
    total_column_injections: u32,
    config: &LifetimeConfig,
) -> GuardColumnUsage {
    let end = guard
        .removal_injection_count
        .filter(|_| !guard.is_installed())
        .map_or(total_column_injections, |removed| removed.min(total_column_injections));
    let injections_since_install = end.saturating_sub(guard.installation_injection_count);

    let expected_lifetime = config.expected_guard_lifetime(guard);
    let usage_percent = if expected_lifetime == 0 {
        0.0
    } else {
        f64::from(injections_since_install) / f64::from(expected_lifetime) * 100.0
    };

    let status = if usage_percent >= config.guard_overdue_percent {
        GuardStatus::Overdue
    } else if usage_percent >= config.guard_warning_percent {
        GuardStatus::Warning
    } else {
        GuardStatus::Good
    };

    GuardColumnUsage {
        injections_since_install,
        expected_lifetime,
        remaining_injections: expected_lifetime.saturating_sub(injections_since_install),
        usage_percent,
        status,
    }
}

/// The guard currently installed on a column (latest installation wins)
pub fn current_guard_column<'a>(guards: &'a [GuardColumn], column_id: &str) -> Option<&'a GuardColumn> {
    guards
        .iter()
        .filter(|g| g.column_id == column_id && g.is_installed())
        .max_by_key(|g| g.installed_date)
}
