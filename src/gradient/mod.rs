//! # Gradient Module
//!
//! Mobile-phase gradient programs as stored on method records, and the
//! normalizer that turns untrusted stored data into a validated profile.
//!
//! ## Trust Boundary
//!
//! Gradients reach this crate in many shapes: typed steps from a form,
//! `jsonb` values from the database, JSON text from an export, or nothing at
//! all. All of them enter as a [`RawGradient`]. The only way to obtain a
//! [`GradientProfile`] is through [`normalize_gradient_profile`] (or its
//! strict sibling [`parse_gradient_profile`]), so everything downstream of
//! the normalizer works on well-formed, time-ordered steps.
//!
//! Normalization fails closed: a single malformed step discards the whole
//! gradient and yields an empty profile, which consumers report as
//! "no gradient data available".
//!
//! ```rust
//! use lcms_track::gradient::{normalize_gradient_profile, RawGradient};
//!
//! let raw = RawGradient::Json(
//!     r#"[{"time": 10, "percent_a": 5, "percent_b": 95, "flow_rate": 0.3},
//!         {"time": 0, "percent_a": 95, "percent_b": 5, "flow_rate": 0.3}]"#.to_string(),
//! );
//! let profile = normalize_gradient_profile(raw);
//! assert_eq!(profile.len(), 2);
//! assert_eq!(profile.steps()[0].time, 0.0);
//! ```

mod error;
mod normalize;
mod profile;
mod step;


pub use error::GradientError;
pub use normalize::{normalize_gradient_profile, parse_gradient_profile};
pub use profile::GradientProfile;
pub use step::{GradientStep, RawGradient};
