use serde::{Deserialize, Serialize};

use super::GuardColumn;

/// Expected lifetime of a guard column part
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardColumnType {
    /// Manufacturer part number
    pub part_number: String,

    /// Expected lifetime in injections
    pub expected_lifetime: u32,
}

impl GuardColumnType {
    /// Create a catalog entry
    pub fn new(part_number: impl Into<String>, expected_lifetime: u32) -> Self {
        Self {
            part_number: part_number.into(),
            expected_lifetime,
        }
    }
}

/// Lifetime thresholds and the guard-column type catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifetimeConfig {
    /// Guard lifetime when neither the guard nor the catalog names one
    pub default_guard_lifetime: u32,

    /// Guard usage (%) at which a replacement is due soon
    pub guard_warning_percent: f64,

    /// Guard usage (%) at which the guard is overdue
    pub guard_overdue_percent: f64,

    /// Column usage (%) at which the column is flagged
    pub column_warning_percent: f64,

    /// Column usage (%) at which the column is critical
    pub column_critical_percent: f64,

    /// Known guard column parts
    pub guard_types: Vec<GuardColumnType>,
}

impl Default for LifetimeConfig {
    fn default() -> Self {
        Self {
            default_guard_lifetime: 1000,
            guard_warning_percent: 80.0,
            guard_overdue_percent: 100.0,
            column_warning_percent: 70.0,
            column_critical_percent: 90.0,
            guard_types: vec![
                GuardColumnType::new("Standard Guard", 1000),
                GuardColumnType::new("High Capacity Guard", 1500),
                GuardColumnType::new("Ultra Guard", 2000),
            ],
        }
    }
}

impl LifetimeConfig {
    /// Catalog entry for a part number (case-insensitive)
    pub fn guard_type(&self, part_number: &str) -> Option<&GuardColumnType> {
        self.guard_types
            .iter()
            .find(|t| t.part_number.eq_ignore_ascii_case(part_number.trim()))
    }

    /// Expected lifetime of a guard: its own value, the catalog's, or the default
    pub fn expected_guard_lifetime(&self, guard: &GuardColumn) -> u32 {
        guard
            .expected_lifetime_injections
            .filter(|&n| n > 0)
            .or_else(|| self.guard_type(&guard.part_number).map(|t| t.expected_lifetime))
            .unwrap_or(self.default_guard_lifetime)
    }
}
