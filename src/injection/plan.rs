use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{InjectionError, InjectionRecord};

/// Numbering for a batch about to be created on a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPlan {
    /// Fresh batch identifier
    pub batch_id: String,
    /// Column receiving the injections
    pub column_id: String,
    /// Method used for every injection
    pub method_id: String,
    /// First injection number of the batch
    pub first_injection_number: u32,
    /// Number of injections
    pub batch_size: u32,
}

impl BatchPlan {
    /// Injection numbers occupied by the batch (empty for a zero-size plan)
    #[allow(clippy::reversed_empty_ranges)]
    pub fn injection_numbers(&self) -> RangeInclusive<u32> {
        match self.batch_size.checked_sub(1) {
            Some(span) => {
                self.first_injection_number..=self.first_injection_number.saturating_add(span)
            }
            None => 1..=0,
        }
    }

    /// Build the records to insert for this batch
    pub fn draft_records(
        &self,
        sample_id: Option<&str>,
        injection_date: DateTime<Utc>,
    ) -> Vec<InjectionRecord> {
        self.injection_numbers()
            .map(|number| {
                let mut record = InjectionRecord::new(
                    Uuid::new_v4().to_string(),
                    number,
                    self.method_id.as_str(),
                    self.column_id.as_str(),
                );
                record.batch_id = Some(self.batch_id.clone());
                record.batch_size = Some(self.batch_size);
                record.sample_id = sample_id.map(str::to_string);
                record.injection_date = Some(injection_date);
                record.run_successful = Some(true);
                record
            })
            .collect()
    }
}

/// Next free injection number on a column (1 for an unused column)
pub fn next_injection_number(records: &[InjectionRecord], column_id: &str) -> u32 {
    last_injection_number(records, column_id).map_or(1, |last| last.saturating_add(1))
}

/// Allocate a batch id and contiguous injection numbers for a new batch
pub fn plan_batch(
    records: &[InjectionRecord],
    column_id: &str,
    method_id: &str,
    batch_size: u32,
) -> Result<BatchPlan, InjectionError> {
    if batch_size == 0 {
        return Err(InjectionError::EmptyBatch);
    }

    let overflow = |first| InjectionError::NumberOverflow {
        first,
        size: batch_size,
    };
    let first = match last_injection_number(records, column_id) {
        Some(last) => last.checked_add(1).ok_or_else(|| overflow(last))?,
        None => 1,
    };
    first
        .checked_add(batch_size - 1)
        .ok_or_else(|| overflow(first))?;

    Ok(BatchPlan {
        batch_id: Uuid::new_v4().to_string(),
        column_id: column_id.to_string(),
        method_id: method_id.to_string(),
        first_injection_number: first,
        batch_size,
    })
}

fn last_injection_number(records: &[InjectionRecord], column_id: &str) -> Option<u32> {
    records
        .iter()
        .filter(|r| r.column_id == column_id)
        .map(|r| r.injection_number)
        .max()
}
