//! # Gradient Validation Module
//!
//! Diagnostic checks over a stored gradient, for method editors and the
//! `validate` command. The normalizer only decides whether a gradient is
//! usable at all; this module explains what is wrong with it.
//!
//! ## Validation Checklist
//!
//! 1. **Structure**: the gradient decodes to well-formed steps
//! 2. **Step Count**: at least two steps, so usage can be integrated
//! 3. **Composition**: `percent_a + percent_b` is 100 at every step
//! 4. **Percentage Range**: both percentages lie in [0, 100]
//! 5. **Flow Rate**: every flow rate is positive
//! 6. **Time Values**: no negative times
//! 7. **Time Ordering**: no two steps share a time
//!
//! ## Usage
//!
//! ```rust
//! use lcms_track::validator::validate_gradient;
//!
//! let report = validate_gradient(
//!     r#"[{"time": 0, "percent_a": 95, "percent_b": 5, "flow_rate": 0.3},
//!         {"time": 10, "percent_a": 5, "percent_b": 90, "flow_rate": 0.3}]"#,
//!     "Lipids RP",
//! );
//! assert!(report.has_failures());
//! println!("{}", report);
//! ```

mod gradient;
mod report;

pub use gradient::{validate_gradient, COMPOSITION_TOLERANCE};
pub use report::{CheckStatus, ValidationCheck, ValidationReport};
