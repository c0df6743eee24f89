use serde::{Deserialize, Serialize};

use super::LifetimeConfig;

/// Wear state of an analytical column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnStatus {
    /// Well within its lifetime
    Good,
    /// Approaching its lifetime
    Warning,
    /// At or near the end of its lifetime
    Critical,
}

/// Wear of an analytical column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnUsage {
    /// Injections run on the column
    pub total_injections: u32,
    /// Estimated lifetime in injections, if known
    pub estimated_lifetime: Option<u32>,
    /// Share of the estimated lifetime used (0 when unknown)
    pub usage_percent: f64,
    /// Wear state
    pub status: ColumnStatus,
}

/// Wear of a column from its injection count and estimated lifetime
pub fn column_usage(
    total_injections: u32,
    estimated_lifetime: Option<u32>,
    config: &LifetimeConfig,
) -> ColumnUsage {
    let usage_percent = match estimated_lifetime {
        Some(lifetime) if lifetime > 0 => {
            f64::from(total_injections) / f64::from(lifetime) * 100.0
        }
        _ => 0.0,
    };

    let status = if usage_percent >= config.column_critical_percent {
        ColumnStatus::Critical
    } else if usage_percent >= config.column_warning_percent {
        ColumnStatus::Warning
    } else {
        ColumnStatus::Good
    };

    ColumnUsage {
        total_injections,
        estimated_lifetime,
        usage_percent,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_status() {
        let config = LifetimeConfig::default();
        assert_eq!(column_usage(100, Some(1000), &config).status, ColumnStatus::Good);
        assert_eq!(column_usage(750, Some(1000), &config).status, ColumnStatus::Warning);
        assert_eq!(column_usage(950, Some(1000), &config).status, ColumnStatus::Critical);
        assert_eq!(column_usage(250, Some(1000), &config).usage_percent, 25.0);
    }

    #[test]
    fn test_unknown_lifetime() {
        let config = LifetimeConfig::default();
        let usage = column_usage(5000, None, &config);
        assert_eq!(usage.usage_percent, 0.0);
        assert_eq!(usage.status, ColumnStatus::Good);
        assert_eq!(column_usage(10, Some(0), &config).status, ColumnStatus::Good);
    }
}
