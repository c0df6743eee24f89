use anyhow::{Context, Result};
use lcms_track::export::batch_report;
use lcms_track::injection::{aggregate_into_batches, stale_batches, SuccessPolicy};
use lcms_track::records::{load_injections, load_methods};
use log::{info, warn};
use std::path::PathBuf;

/// Group injections into batches and print one row per batch
pub fn run(
    injections: PathBuf,
    methods: Option<PathBuf>,
    policy: SuccessPolicy,
    json: bool,
) -> Result<()> {
    let records = load_injections(&injections).context("Failed to load injections")?;
    let methods = match methods {
        Some(path) => load_methods(&path).context("Failed to load methods")?,
        None => Vec::new(),
    };

    info!(
        "Grouping {} injections (success policy: {})",
        records.len(),
        policy
    );
    let batches = aggregate_into_batches(&records, policy);

    for batch in stale_batches(&batches) {
        warn!(
            "Batch {} stores a stale batch size; {} injections remain",
            batch.batch_id, batch.actual_batch_size
        );
    }

    let rows = batch_report(&batches, &methods);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Injection Batches");
    println!("=================");
    if rows.is_empty() {
        println!("No injections found.");
        return Ok(());
    }

    println!(
        "{:<12} {:<10} {:<24} {:<20} {:>4}  {:<7}  Sample",
        "Range", "Date", "Method", "Column", "Size", "Status"
    );
    for row in &rows {
        println!("{}", row);
    }

    let total: f64 = rows
        .iter()
        .filter_map(|r| r.solvent_usage.map(|u| u.total_volume_ml))
        .sum();
    println!();
    println!(
        "{} batches, {} injections, {:.2} mL estimated solvent",
        rows.len(),
        records.len(),
        total
    );

    Ok(())
}
