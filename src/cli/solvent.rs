use anyhow::{Context, Result};
use lcms_track::records::load_method;
use lcms_track::solvent::calculate_solvent_usage;
use log::{info, warn};
use std::path::PathBuf;

/// Estimate solvent usage for a batch run with one method
pub fn run(
    method: PathBuf,
    batch_size: u32,
    injection_volume: Option<f64>,
    json: bool,
) -> Result<()> {
    let method = load_method(&method).context("Failed to load method")?;
    let profile = method.gradient_profile();
    let injection_volume = injection_volume.or(method.injection_volume);

    info!("Method: {} ({} gradient steps)", method.name, profile.len());
    if profile.is_empty() {
        warn!("Method '{}' has no usable gradient data", method.name);
    }

    let usage = calculate_solvent_usage(&profile, batch_size, injection_volume);

    if json {
        println!("{}", serde_json::to_string_pretty(&usage)?);
        return Ok(());
    }

    println!("Solvent Usage Estimate");
    println!("======================");
    println!("Method:      {}", method.name);
    println!("Batch size:  {} injections", batch_size);
    if let Some(volume) = injection_volume {
        println!("Injection:   {} per injection", volume);
    }
    if profile.has_interval() {
        println!("Gradient:    {:.1} min over {} steps", profile.duration_min(), profile.len());
    } else {
        println!("Gradient:    no gradient data available");
    }
    println!();
    println!("Solvent A:   {:>10.2} mL", usage.solvent_a_ml);
    println!("Solvent B:   {:>10.2} mL", usage.solvent_b_ml);
    println!("Total:       {:>10.2} mL", usage.total_volume_ml);

    Ok(())
}
