use serde::{Deserialize, Serialize};

use super::GradientProfile;

/// A single point on an LC gradient curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStep {
    /// Time in minutes from injection
    pub time: f64,

    /// Percentage of mobile phase A
    #[serde(alias = "percentA")]
    pub percent_a: f64,

    /// Percentage of mobile phase B
    #[serde(alias = "percentB")]
    pub percent_b: f64,

    /// Flow rate in mL/min
    #[serde(alias = "flowRate")]
    pub flow_rate: f64,
}

impl GradientStep {
    /// Create a new gradient step
    pub fn new(time: f64, percent_a: f64, percent_b: f64, flow_rate: f64) -> Self {
        Self {
            time,
            percent_a,
            percent_b,
            flow_rate,
        }
    }

    /// Combined A + B percentage (100 for a well-formed binary gradient)
    pub fn composition_total(&self) -> f64 {
        self.percent_a + self.percent_b
    }
}

/// Untrusted gradient input, before normalization
///
/// Method records keep their gradient as loosely typed JSON, so a gradient
/// may arrive as typed steps, as JSON text, as an already-decoded JSON value,
/// or not at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawGradient {
    /// Steps that are already typed, but not yet checked or sorted
    Steps(Vec<GradientStep>),
    /// JSON-encoded text
    Json(String),
    /// Decoded JSON value (e.g. a `jsonb` column)
    Value(serde_json::Value),
    /// No gradient stored
    #[default]
    Missing,
}

impl From<Vec<GradientStep>> for RawGradient {
    fn from(steps: Vec<GradientStep>) -> Self {
        RawGradient::Steps(steps)
    }
}

impl From<&[GradientStep]> for RawGradient {
    fn from(steps: &[GradientStep]) -> Self {
        RawGradient::Steps(steps.to_vec())
    }
}

impl From<String> for RawGradient {
    fn from(json: String) -> Self {
        RawGradient::Json(json)
    }
}

impl From<&str> for RawGradient {
    fn from(json: &str) -> Self {
        RawGradient::Json(json.to_string())
    }
}

impl From<serde_json::Value> for RawGradient {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawGradient::Missing,
            other => RawGradient::Value(other),
        }
    }
}

impl From<GradientProfile> for RawGradient {
    fn from(profile: GradientProfile) -> Self {
        RawGradient::Steps(profile.into_steps())
    }
}

impl<T: Into<RawGradient>> From<Option<T>> for RawGradient {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawGradient::Missing)
    }
}
