use anyhow::{Context, Result};
use lcms_track::lifetime::{
    column_usage, current_guard_column, guard_column_usage, GuardStatus, LifetimeConfig,
};
use lcms_track::records::{load_guard_columns, load_injections};
use log::info;
use std::path::PathBuf;

/// Report guard and analytical column wear for one column
pub fn run(
    guards: PathBuf,
    injections: PathBuf,
    column_id: &str,
    estimated_lifetime: Option<u32>,
    config: &LifetimeConfig,
) -> Result<()> {
    let guards = load_guard_columns(&guards).context("Failed to load guard columns")?;
    let records = load_injections(&injections).context("Failed to load injections")?;

    let total = records.iter().filter(|r| r.column_id == column_id).count();
    let total = u32::try_from(total).context("Too many injections on column")?;
    info!("Column {}: {} injections", column_id, total);

    println!("Column Wear");
    println!("===========");
    println!("Column: {}", column_id);
    println!("Total injections: {}", total);

    let column = column_usage(total, estimated_lifetime, config);
    if let Some(lifetime) = column.estimated_lifetime {
        println!(
            "Column usage: {:.1}% of {} injections ({:?})",
            column.usage_percent, lifetime, column.status
        );
    }
    println!();

    let Some(guard) = current_guard_column(&guards, column_id) else {
        println!("No guard column installed.");
        return Ok(());
    };

    let usage = guard_column_usage(guard, total, config);
    println!("Guard column: {} (installed {})", guard.part_number, guard.installed_date.format("%Y-%m-%d"));
    println!("  Injections since install: {}", usage.injections_since_install);
    println!("  Expected lifetime:        {}", usage.expected_lifetime);
    println!("  Remaining injections:     {}", usage.remaining_injections);
    println!("  Usage:                    {:.1}%", usage.usage_percent);

    let status = match usage.status {
        GuardStatus::Good => "Good",
        GuardStatus::Warning => "Replace soon",
        GuardStatus::Overdue => "Overdue for replacement",
    };
    println!("  Status:                   {}", status);

    Ok(())
}
