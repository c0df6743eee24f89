use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::gradient::{normalize_gradient_profile, GradientProfile};
use crate::solvent::{calculate_solvent_usage, SolventUsage};

/// Ionization polarity of a method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IonizationMode {
    /// Positive mode
    Positive,
    /// Negative mode
    Negative,
    /// Polarity switching
    Both,
}

/// An LC-MS method as stored by the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodRecord {
    /// Record identifier
    pub id: String,

    /// Method name
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Ionization polarity
    #[serde(default)]
    pub ionization_mode: Option<IonizationMode>,

    /// Mobile phase A composition
    #[serde(default)]
    pub mobile_phase_a: Option<String>,

    /// Mobile phase B composition
    #[serde(default)]
    pub mobile_phase_b: Option<String>,

    /// Nominal flow rate in mL/min
    #[serde(default)]
    pub flow_rate: Option<f64>,

    /// Column temperature in Celsius
    #[serde(default)]
    pub column_temperature: Option<f64>,

    /// Sample injection volume, added as is to solvent totals
    #[serde(default)]
    pub injection_volume: Option<f64>,

    /// Total run time in minutes
    #[serde(default)]
    pub run_time: Option<f64>,

    /// Gradient table exactly as stored (untrusted)
    #[serde(default)]
    pub gradient_steps: serde_json::Value,

    /// When the method was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl MethodRecord {
    /// Create a method with only an id and a name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            ionization_mode: None,
            mobile_phase_a: None,
            mobile_phase_b: None,
            flow_rate: None,
            column_temperature: None,
            injection_volume: None,
            run_time: None,
            gradient_steps: serde_json::Value::Null,
            created_at: None,
        }
    }

    /// Validated gradient (empty when nothing usable is stored)
    pub fn gradient_profile(&self) -> GradientProfile {
        normalize_gradient_profile(self.gradient_steps.clone())
    }

    /// Solvent usage for a batch run with this method
    pub fn solvent_usage(&self, batch_size: u32) -> SolventUsage {
        calculate_solvent_usage(&self.gradient_profile(), batch_size, self.injection_volume)
    }
}
