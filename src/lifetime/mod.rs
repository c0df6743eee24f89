//! # Lifetime Module
//!
//! Wear tracking for analytical columns and the guard columns that protect
//! them. Both are measured in injections: a guard column counts the
//! injections its column received since the guard was installed, and an
//! analytical column counts all injections against its estimated lifetime.
//!
//! Thresholds and the guard-column type catalog live in [`LifetimeConfig`],
//! which callers pass in explicitly.

mod column;
mod config;
mod guard;

pub use column::{column_usage, ColumnStatus, ColumnUsage};
pub use config::{GuardColumnType, LifetimeConfig};
pub use guard::{current_guard_column, guard_column_usage, GuardColumn, GuardColumnUsage, GuardStatus};
