use std::cmp::Ordering;
use std::collections::HashMap;

use log::debug;

use super::{InjectionBatch, InjectionRecord, SuccessPolicy};

/// Grouping key: a real batch id, or the position of a record without one.
/// Kept distinct so a legacy record whose id matches some batch id never
/// joins that batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum GroupKey<'a> {
    Batch(&'a str),
    Record(usize),
}

/// Group injection records into one batch per batch identifier.
///
/// Each record without a batch identifier becomes its own singleton batch,
/// reported under the record's id. Batch sizes are recomputed from the members present, and
/// batches are returned newest first; batches without any date sort last.
pub fn aggregate_into_batches(
    records: &[InjectionRecord],
    policy: SuccessPolicy,
) -> Vec<InjectionBatch> {
    let mut index: HashMap<GroupKey<'_>, usize> = HashMap::new();
    let mut batches: Vec<InjectionBatch> = Vec::new();

    for (position, record) in records.iter().enumerate() {
        let key = match record.batch_id.as_deref() {
            Some(batch_id) => GroupKey::Batch(batch_id),
            None => {
                debug!(
                    "Injection {} has no batch id, keeping it as a singleton batch",
                    record.id
                );
                GroupKey::Record(position)
            }
        };

        let existing = index.get(&key).copied();
        match existing {
            Some(slot) => {
                let batch = &mut batches[slot];
                batch.min_injection_number = batch.min_injection_number.min(record.injection_number);
                batch.max_injection_number = batch.max_injection_number.max(record.injection_number);
                batch.run_successful = policy.merge(batch.run_successful, record.succeeded());
                batch.injections.push(record.clone());
            }
            None => {
                index.insert(key, batches.len());
                batches.push(InjectionBatch::seed(record));
            }
        }
    }

    for batch in &mut batches {
        batch.actual_batch_size = batch.injections.len();
    }

    // Stable sort keeps first-seen order among equal dates
    batches.sort_by(|a, b| match (a.injection_date, b.injection_date) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    debug!(
        "Aggregated {} injection records into {} batches",
        records.len(),
        batches.len()
    );
    batches
}

/// Batches whose stored `batch_size` needs rewriting after deletions
pub fn stale_batches(batches: &[InjectionBatch]) -> Vec<&InjectionBatch> {
    batches
        .iter()
        .filter(|batch| batch.stored_batch_size_is_stale())
        .collect()
}
