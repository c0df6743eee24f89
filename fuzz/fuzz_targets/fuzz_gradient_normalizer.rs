#![no_main]

use libfuzzer_sys::fuzz_target;
use lcms_track::gradient::{normalize_gradient_profile, RawGradient};
use lcms_track::solvent::calculate_solvent_usage;

fuzz_target!(|data: &[u8]| {
    // Stored gradients arrive as arbitrary text; normalization must never panic
    let text = String::from_utf8_lossy(data).into_owned();
    let profile = normalize_gradient_profile(RawGradient::Json(text));

    // Whatever survives normalization must be usable by the calculator
    let _ = calculate_solvent_usage(&profile, 96, Some(5.0));

    // Normalizing a profile's own steps is a fixed point
    let again = normalize_gradient_profile(profile.clone());
    assert_eq!(again, profile);
});
