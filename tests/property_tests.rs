//! Property-based tests for gradient normalization, solvent estimates and
//! batch aggregation

use lcms_track::gradient::{normalize_gradient_profile, GradientStep};
use lcms_track::injection::{aggregate_into_batches, InjectionRecord, SuccessPolicy};
use lcms_track::solvent::{calculate_solvent_usage, per_injection_usage, SolventUsage};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// A physically plausible gradient step
fn step_strategy() -> impl Strategy<Value = GradientStep> {
    (0.0f64..60.0, 0.0f64..=100.0, 0.0f64..2.0).prop_map(|(time, percent_a, flow_rate)| {
        GradientStep::new(time, percent_a, 100.0 - percent_a, flow_rate)
    })
}

fn injection_strategy() -> impl Strategy<Value = InjectionRecord> {
    (0u32..8, 1u32..500, any::<bool>(), proptest::option::of(any::<bool>())).prop_map(
        |(batch, number, legacy, success)| {
            // Legacy rows reuse batch-like ids to exercise key collisions
            let id = if legacy { format!("B{}", batch) } else { format!("r{}", number) };
            let mut record = InjectionRecord::new(id, number, "m1", "c1");
            if !legacy {
                record.batch_id = Some(format!("B{}", batch));
            }
            record.run_successful = success;
            record
        },
    )
}

// ============================================================================
// Solvent usage
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_usage_is_non_negative(
        steps in proptest::collection::vec(step_strategy(), 0..12),
        batch_size in 0u32..500,
        volume in proptest::option::of(-50.0f64..50.0),
    ) {
        let usage = calculate_solvent_usage(&normalize_gradient_profile(steps), batch_size, volume);
        prop_assert!(usage.solvent_a_ml >= 0.0);
        prop_assert!(usage.solvent_b_ml >= 0.0);
        prop_assert!(usage.total_volume_ml >= 0.0);
    }

    #[test]
    fn prop_short_profiles_use_nothing(
        steps in proptest::collection::vec(step_strategy(), 0..2),
        batch_size in 0u32..500,
    ) {
        let usage = calculate_solvent_usage(&normalize_gradient_profile(steps), batch_size, Some(5.0));
        prop_assert_eq!(usage, SolventUsage::ZERO);
    }

    #[test]
    fn prop_empty_batch_uses_nothing(steps in proptest::collection::vec(step_strategy(), 0..12)) {
        let usage = calculate_solvent_usage(&normalize_gradient_profile(steps), 0, Some(5.0));
        prop_assert!(usage.is_zero());
    }

    #[test]
    fn prop_usage_scales_with_batch_size(
        steps in proptest::collection::vec(step_strategy(), 2..12),
        batch_size in 1u32..200,
    ) {
        let profile = normalize_gradient_profile(steps);
        let single = per_injection_usage(&profile);
        let batch = calculate_solvent_usage(&profile, batch_size, None);

        // Both sides are rounded to 0.01 mL, the single side before scaling
        let tolerance = 0.005 * f64::from(batch_size) + 0.01;
        prop_assert!((batch.solvent_a_ml - single.solvent_a_ml * f64::from(batch_size)).abs() <= tolerance);
        prop_assert!((batch.solvent_b_ml - single.solvent_b_ml * f64::from(batch_size)).abs() <= tolerance);
    }

    #[test]
    fn prop_total_is_sum_of_solvents(
        steps in proptest::collection::vec(step_strategy(), 2..12),
        batch_size in 1u32..200,
    ) {
        let usage = calculate_solvent_usage(&normalize_gradient_profile(steps), batch_size, None);
        // Three independent roundings to 0.01 mL
        prop_assert!((usage.total_volume_ml - (usage.solvent_a_ml + usage.solvent_b_ml)).abs() <= 0.016);
    }
}

// ============================================================================
// Gradient normalization
// ============================================================================

proptest! {
    #[test]
    fn prop_normalized_profile_is_time_ordered(steps in proptest::collection::vec(step_strategy(), 0..16)) {
        let count = steps.len();
        let profile = normalize_gradient_profile(steps);
        prop_assert_eq!(profile.len(), count);
        prop_assert!(profile.segments().all(|(a, b)| a.time <= b.time));
    }

    #[test]
    fn prop_normalization_is_idempotent(steps in proptest::collection::vec(step_strategy(), 0..16)) {
        let once = normalize_gradient_profile(steps);
        let twice = normalize_gradient_profile(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_json_input_keeps_every_step(steps in proptest::collection::vec(step_strategy(), 0..16)) {
        let json = serde_json::to_string(&steps).unwrap();
        let profile = normalize_gradient_profile(json);
        prop_assert_eq!(profile.len(), steps.len());
        prop_assert!(profile.segments().all(|(a, b)| a.time <= b.time));
    }

    #[test]
    fn prop_arbitrary_text_never_panics(text in ".{0,200}") {
        let profile = normalize_gradient_profile(text);
        let _ = calculate_solvent_usage(&profile, 10, Some(1.0));
    }
}

// ============================================================================
// Batch aggregation
// ============================================================================

proptest! {
    #[test]
    fn prop_batches_partition_records(records in proptest::collection::vec(injection_strategy(), 0..64)) {
        let batches = aggregate_into_batches(&records, SuccessPolicy::LastSeen);

        let total: usize = batches.iter().map(|b| b.actual_batch_size).sum();
        prop_assert_eq!(total, records.len());

        for batch in &batches {
            prop_assert_eq!(batch.actual_batch_size, batch.injections.len());
            prop_assert!(batch.min_injection_number <= batch.max_injection_number);
            let numbers = batch.min_injection_number..=batch.max_injection_number;
            let in_range = batch.injections.iter().all(|r| numbers.contains(&r.injection_number));
            prop_assert!(in_range);
        }
    }

    #[test]
    fn prop_legacy_records_are_singletons(records in proptest::collection::vec(injection_strategy(), 0..64)) {
        let legacy = records.iter().filter(|r| r.batch_id.is_none()).count();
        let batches = aggregate_into_batches(&records, SuccessPolicy::LastSeen);

        let singletons = batches
            .iter()
            .filter(|b| b.injections.iter().all(|r| r.batch_id.is_none()))
            .count();
        prop_assert_eq!(singletons, legacy);
        for batch in &batches {
            let mixed = batch.injections.iter().any(|r| r.batch_id.is_none()) && batch.actual_batch_size > 1;
            prop_assert!(!mixed);
        }
    }

    #[test]
    fn prop_all_succeeded_is_strict(records in proptest::collection::vec(injection_strategy(), 1..64)) {
        for batch in aggregate_into_batches(&records, SuccessPolicy::AllSucceeded) {
            let expected = batch.injections.iter().all(|r| r.succeeded());
            prop_assert_eq!(batch.run_successful, expected);
        }
    }

    #[test]
    fn prop_last_seen_follows_last_member(records in proptest::collection::vec(injection_strategy(), 1..64)) {
        for batch in aggregate_into_batches(&records, SuccessPolicy::LastSeen) {
            let last = batch.injections.last().map(|r| r.succeeded());
            prop_assert_eq!(Some(batch.run_successful), last);
        }
    }
}
