//! Flat batch rows for tables and exported reports.
//!
//! Rendering (tables, badges, PDF) belongs to the presentation layer; this
//! module only shapes the data it needs.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::injection::InjectionBatch;
use crate::records::MethodRecord;
use crate::solvent::{calculate_solvent_usage, SolventUsage};

/// One batch, flattened for display or export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReportRow {
    /// Batch identifier
    pub batch_id: String,
    /// Sample identifier
    pub sample_id: Option<String>,
    /// Injection range label (`#12-15`)
    pub injection_range: String,
    /// Method display name
    pub method: String,
    /// Column display name
    pub column: String,
    /// Representative injection date
    pub injection_date: Option<DateTime<Utc>>,
    /// Number of surviving injections
    pub batch_size: usize,
    /// Batch outcome
    pub run_successful: bool,
    /// Estimated solvent usage, when the method has gradient data
    pub solvent_usage: Option<SolventUsage>,
}

impl BatchReportRow {
    /// Flatten a batch, estimating solvent usage from its method if known
    pub fn from_batch(batch: &InjectionBatch, method: Option<&MethodRecord>) -> Self {
        let solvent_usage = method.and_then(|m| {
            let profile = m.gradient_profile();
            if profile.is_empty() {
                None
            } else {
                let size = u32::try_from(batch.actual_batch_size).unwrap_or(u32::MAX);
                Some(calculate_solvent_usage(&profile, size, m.injection_volume))
            }
        });

        let method_name = batch
            .method_name
            .clone()
            .or_else(|| method.map(|m| m.name.clone()))
            .unwrap_or_else(|| "Unknown".to_string());

        Self {
            batch_id: batch.batch_id.clone(),
            sample_id: batch.sample_id.clone(),
            injection_range: batch.injection_range(),
            method: method_name,
            column: batch.column_name.clone().unwrap_or_else(|| "Unknown".to_string()),
            injection_date: batch.injection_date,
            batch_size: batch.actual_batch_size,
            run_successful: batch.run_successful,
            solvent_usage,
        }
    }
}

impl fmt::Display for BatchReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .injection_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        let status = if self.run_successful { "Success" } else { "Failed" };

        write!(
            f,
            "{:<12} {:<10} {:<24} {:<20} {:>4}  {:<7}  {}",
            self.injection_range,
            date,
            self.method,
            self.column,
            self.batch_size,
            status,
            self.sample_id.as_deref().unwrap_or("-")
        )?;

        match &self.solvent_usage {
            Some(usage) => write!(f, "  [{}]", usage),
            None => write!(f, "  [no gradient data available]"),
        }
    }
}

/// Build report rows for batches, looking methods up by id
pub fn batch_report(batches: &[InjectionBatch], methods: &[MethodRecord]) -> Vec<BatchReportRow> {
    let by_id: HashMap<&str, &MethodRecord> = methods.iter().map(|m| (m.id.as_str(), m)).collect();

    batches
        .iter()
        .map(|batch| BatchReportRow::from_batch(batch, by_id.get(batch.method_id.as_str()).copied()))
        .collect()
}
