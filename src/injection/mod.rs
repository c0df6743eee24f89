//! # Injection Module
//!
//! Injection records as stored by the persistence layer, and the batch view
//! built on top of them.
//!
//! Injections created together share a `batch_id` and occupy a contiguous run
//! of injection numbers on their column. Individual injections can be deleted
//! later, so the `batch_size` stored on each record goes stale; the batch view
//! always recomputes its size from the records that survive.
//!
//! ## Operations
//!
//! - [`aggregate_into_batches`]: group records into one [`InjectionBatch`]
//!   per batch identifier, newest first
//! - [`stale_batches`]: batches whose stored size no longer matches
//! - [`next_injection_number`] and [`plan_batch`]: number a new batch on a
//!   column

mod aggregate;
mod batch;
mod error;
mod plan;
mod policy;
mod record;

#[cfg(test)]
mod tests;

pub use aggregate::{aggregate_into_batches, stale_batches};
pub use batch::InjectionBatch;
pub use error::InjectionError;
pub use plan::{next_injection_number, plan_batch, BatchPlan};
pub use policy::SuccessPolicy;
pub use record::InjectionRecord;
