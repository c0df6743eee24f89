//! # lcms-track - LC-MS Method Development Calculations
//!
//! `lcms-track` is the computational core of an LC-MS method development
//! tracker. It sits between the persistence layer (methods, columns,
//! injections) and the presentation layer (tables, reports), and turns raw
//! stored rows into the figures a lab needs.
//!
//! ## Key Features
//!
//! - **Fail-Closed Gradient Normalization**: Stored gradient tables arrive as
//!   loosely typed JSON. They are validated and time-ordered once, at the
//!   boundary, and any malformed step discards the whole gradient.
//!
//! - **Solvent Usage Estimates**: Trapezoidal integration of flow and
//!   composition over the gradient, scaled to a whole injection batch.
//!
//! - **Injection Batches**: Injections created together are grouped by batch
//!   identifier, with sizes recomputed from the injections that still exist.
//!
//! - **Column Lifetime Tracking**: Guard and analytical column wear from
//!   injection counts, with explicit, configurable thresholds.
//!
//! ## Quick Start
//!
//! ```rust
//! use lcms_track::gradient::{normalize_gradient_profile, GradientStep};
//! use lcms_track::solvent::calculate_solvent_usage;
//!
//! let profile = normalize_gradient_profile(vec![
//!     GradientStep::new(0.0, 95.0, 5.0, 0.3),
//!     GradientStep::new(10.0, 5.0, 95.0, 0.3),
//! ]);
//!
//! let usage = calculate_solvent_usage(&profile, 4, None);
//! assert_eq!(usage.solvent_a_ml, 6.0);
//! assert_eq!(usage.solvent_b_ml, 6.0);
//! assert_eq!(usage.total_volume_ml, 12.0);
//! ```
//!
//! ## Grouping Injections
//!
//! ```rust
//! use lcms_track::injection::{aggregate_into_batches, InjectionRecord, SuccessPolicy};
//!
//! let mut records = Vec::new();
//! for (id, number) in [("r1", 10), ("r2", 11), ("r3", 12)] {
//!     let mut record = InjectionRecord::new(id, number, "method-1", "column-1");
//!     record.batch_id = Some("B1".to_string());
//!     records.push(record);
//! }
//!
//! let batches = aggregate_into_batches(&records, SuccessPolicy::AllSucceeded);
//! assert_eq!(batches.len(), 1);
//! assert_eq!(batches[0].actual_batch_size, 3);
//! assert_eq!(batches[0].injection_range(), "#10-12");
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`gradient`]: Gradient steps, untrusted input and the normalizer
//! - [`solvent`]: Mobile-phase consumption estimates
//! - [`injection`]: Injection records, batch aggregation and batch planning
//! - [`lifetime`]: Guard and analytical column wear
//! - [`validator`]: Diagnostic reports over stored gradients
//! - [`records`]: Method rows and JSON loaders for exported records
//! - [`export`]: Flat batch rows for tables and reports
//!
//! All computations are pure and synchronous; none of them touch storage.

pub mod export;
pub mod gradient;
pub mod injection;
pub mod lifetime;
pub mod records;
pub mod solvent;
pub mod validator;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::export::{batch_report, BatchReportRow};
    pub use crate::gradient::{
        normalize_gradient_profile, parse_gradient_profile, GradientError, GradientProfile,
        GradientStep, RawGradient,
    };
    pub use crate::injection::{
        aggregate_into_batches, next_injection_number, plan_batch, stale_batches, BatchPlan,
        InjectionBatch, InjectionError, InjectionRecord, SuccessPolicy,
    };
    pub use crate::lifetime::{
        column_usage, current_guard_column, guard_column_usage, ColumnStatus, ColumnUsage,
        GuardColumn, GuardColumnType, GuardColumnUsage, GuardStatus, LifetimeConfig,
    };
    pub use crate::records::{
        load_guard_columns, load_injections, load_method, load_methods, MethodRecord, RecordError,
    };
    pub use crate::solvent::{calculate_solvent_usage, per_injection_usage, SolventUsage};
    pub use crate::validator::{validate_gradient, ValidationReport};
}
