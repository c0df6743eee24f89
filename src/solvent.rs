//! Mobile-phase consumption estimates for injection batches.
//!
//! Usage is integrated segment by segment over a [`GradientProfile`] with the
//! trapezoidal rule: each segment contributes its duration times the mean
//! flow rate, split between solvents A and B by the mean composition. The
//! per-injection totals are then scaled by the batch size.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::gradient::GradientProfile;

/// Estimated solvent consumption, in mL, rounded to two decimals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SolventUsage {
    /// Mobile phase A consumed
    #[serde(rename = "solventA_mL")]
    pub solvent_a_ml: f64,

    /// Mobile phase B consumed
    #[serde(rename = "solventB_mL")]
    pub solvent_b_ml: f64,

    /// A + B, plus the injection volume contribution when given
    #[serde(rename = "totalVolume_mL")]
    pub total_volume_ml: f64,
}

impl SolventUsage {
    /// Usage reported when no interval can be integrated
    pub const ZERO: SolventUsage = SolventUsage {
        solvent_a_ml: 0.0,
        solvent_b_ml: 0.0,
        total_volume_ml: 0.0,
    };

    /// True when every field is zero
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for SolventUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Solvent A: {:.2} mL, Solvent B: {:.2} mL, Total: {:.2} mL",
            self.solvent_a_ml, self.solvent_b_ml, self.total_volume_ml
        )
    }
}

/// Estimate solvent consumption for `batch_size` injections of one gradient.
///
/// `injection_volume` is the method's stored injection volume. It contributes
/// `injection_volume × batch_size` to the total only, taken as is with no unit
/// conversion, since injected sample is not mobile phase. Negative volumes
/// count as zero.
///
/// Profiles with fewer than two steps and empty batches report zero usage.
pub fn calculate_solvent_usage(
    profile: &GradientProfile,
    batch_size: u32,
    injection_volume: Option<f64>,
) -> SolventUsage {
    if !profile.has_interval() || batch_size == 0 {
        return SolventUsage::ZERO;
    }

    let (per_injection_a, per_injection_b) = integrate(profile);
    let injections = f64::from(batch_size);

    let solvent_a = per_injection_a * injections;
    let solvent_b = per_injection_b * injections;
    let injected = injection_volume.unwrap_or(0.0).max(0.0) * injections;

    SolventUsage {
        solvent_a_ml: round_2dp(solvent_a),
        solvent_b_ml: round_2dp(solvent_b),
        total_volume_ml: round_2dp(solvent_a + solvent_b + injected),
    }
}

/// Solvent consumption of a single injection, without sample volume
pub fn per_injection_usage(profile: &GradientProfile) -> SolventUsage {
    calculate_solvent_usage(profile, 1, None)
}

/// Integrate A and B consumption (mL) for one injection
fn integrate(profile: &GradientProfile) -> (f64, f64) {
    let mut solvent_a = 0.0;
    let mut solvent_b = 0.0;

    for (current, next) in profile.segments() {
        let dt = next.time - current.time;
        if dt <= 0.0 {
            // Sorted input only produces zero-length segments here
            debug!("Skipping zero-length gradient segment at {} min", current.time);
            continue;
        }

        let avg_flow = (current.flow_rate + next.flow_rate) / 2.0;
        let avg_percent_a = (current.percent_a + next.percent_a) / 2.0;
        let avg_percent_b = (current.percent_b + next.percent_b) / 2.0;

        let segment_volume = dt * avg_flow;
        solvent_a += segment_volume * avg_percent_a / 100.0;
        solvent_b += segment_volume * avg_percent_b / 100.0;
    }

    (solvent_a, solvent_b)
}

/// Round half away from zero to two decimal places
fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
