use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One injection as stored by the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjectionRecord {
    /// Record identifier
    pub id: String,

    /// Shared by all injections created together (absent on legacy rows)
    #[serde(default)]
    pub batch_id: Option<String>,

    /// Batch size stored at creation time; may be stale after deletions
    #[serde(default)]
    pub batch_size: Option<u32>,

    /// Position in the column's injection sequence
    pub injection_number: u32,

    /// Method used for the run
    pub method_id: String,

    /// Column the sample was injected on
    pub column_id: String,

    /// Sample identifier
    #[serde(default)]
    pub sample_id: Option<String>,

    /// When the injection was run
    #[serde(default)]
    pub injection_date: Option<DateTime<Utc>>,

    /// When the record was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Whether the run succeeded (absent means successful)
    #[serde(default)]
    pub run_successful: Option<bool>,

    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,

    /// Pressure reading in bar
    #[serde(default)]
    pub pressure_reading: Option<f64>,

    /// Temperature reading in Celsius
    #[serde(default)]
    pub temperature_reading: Option<f64>,

    /// Display name of the method (joined)
    #[serde(default)]
    pub method_name: Option<String>,

    /// Display name of the column (joined)
    #[serde(default)]
    pub column_name: Option<String>,
}

impl InjectionRecord {
    /// Create a record with only the required fields set
    pub fn new(
        id: impl Into<String>,
        injection_number: u32,
        method_id: impl Into<String>,
        column_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            batch_id: None,
            batch_size: None,
            injection_number,
            method_id: method_id.into(),
            column_id: column_id.into(),
            sample_id: None,
            injection_date: None,
            created_at: None,
            run_successful: None,
            notes: None,
            pressure_reading: None,
            temperature_reading: None,
            method_name: None,
            column_name: None,
        }
    }

    /// Key used to group this record: its batch id, or its own id
    pub fn batch_key(&self) -> &str {
        self.batch_id.as_deref().unwrap_or(&self.id)
    }

    /// Date used for ordering: injection date, falling back to creation time
    pub fn representative_date(&self) -> Option<DateTime<Utc>> {
        self.injection_date.or(self.created_at)
    }

    /// Run outcome, treating a missing flag as success
    pub fn succeeded(&self) -> bool {
        self.run_successful.unwrap_or(true)
    }
}
