use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::InjectionRecord;

/// All surviving injections that share a batch identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjectionBatch {
    /// Batch identifier (the record id for records without one)
    pub batch_id: String,

    /// Sample identifier of the first record seen
    pub sample_id: Option<String>,

    /// Method of the first record seen
    pub method_id: String,

    /// Method display name of the first record seen
    pub method_name: Option<String>,

    /// Column of the first record seen
    pub column_id: String,

    /// Column display name of the first record seen
    pub column_name: Option<String>,

    /// Representative date of the first record seen
    pub injection_date: Option<DateTime<Utc>>,

    /// Lowest injection number in the batch
    pub min_injection_number: u32,

    /// Highest injection number in the batch
    pub max_injection_number: u32,

    /// Number of surviving members
    pub actual_batch_size: usize,

    /// Batch outcome under the chosen success policy
    pub run_successful: bool,

    /// Member records, in input order
    pub injections: Vec<InjectionRecord>,
}

impl InjectionBatch {
    /// Start a batch from its first record
    pub(crate) fn seed(record: &InjectionRecord) -> Self {
        Self {
            batch_id: record.batch_key().to_string(),
            sample_id: record.sample_id.clone(),
            method_id: record.method_id.clone(),
            method_name: record.method_name.clone(),
            column_id: record.column_id.clone(),
            column_name: record.column_name.clone(),
            injection_date: record.representative_date(),
            min_injection_number: record.injection_number,
            max_injection_number: record.injection_number,
            actual_batch_size: 0,
            run_successful: record.succeeded(),
            injections: vec![record.clone()],
        }
    }

    /// Injection range label: `#12` or `#12-15`
    pub fn injection_range(&self) -> String {
        if self.min_injection_number == self.max_injection_number {
            format!("#{}", self.min_injection_number)
        } else {
            format!("#{}-{}", self.min_injection_number, self.max_injection_number)
        }
    }

    /// True when a member's stored `batch_size` disagrees with the members present
    pub fn stored_batch_size_is_stale(&self) -> bool {
        self.injections.iter().any(|record| {
            record
                .batch_size
                .is_some_and(|stored| stored as usize != self.actual_batch_size)
        })
    }

    /// Number of members whose run failed
    pub fn failed_count(&self) -> usize {
        self.injections.iter().filter(|r| !r.succeeded()).count()
    }
}
