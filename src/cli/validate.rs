use anyhow::{Context, Result};
use lcms_track::records::load_method;
use lcms_track::validator::validate_gradient;
use log::info;
use std::path::PathBuf;

/// Validate a method's stored gradient table
pub fn run(method: PathBuf) -> Result<()> {
    let method = load_method(&method).context("Failed to load method")?;

    info!("Gradient Validator");
    info!("==================");
    info!("Method: {}", method.name);
    info!("");

    let report = validate_gradient(method.gradient_steps.clone(), method.name.as_str());

    // Use colorized output if available
    #[cfg(feature = "colorized_output")]
    {
        println!("{}", report.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", report);
    }

    // Exit with error code if validation failed
    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
