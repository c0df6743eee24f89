use anyhow::{Context, Result};
use lcms_track::injection::plan_batch;
use lcms_track::records::load_injections;
use log::info;
use std::path::PathBuf;

/// Allocate a batch id and injection numbers for a new batch
pub fn run(injections: PathBuf, column_id: &str, method_id: &str, size: u32) -> Result<()> {
    let records = load_injections(&injections).context("Failed to load injections")?;

    let plan = plan_batch(&records, column_id, method_id, size)?;
    let numbers = plan.injection_numbers();
    info!(
        "Planned batch {} on column {}: #{}-{}",
        plan.batch_id,
        column_id,
        numbers.start(),
        numbers.end()
    );

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
