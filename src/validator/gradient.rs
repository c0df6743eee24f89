use crate::gradient::{parse_gradient_profile, GradientProfile, GradientStep, RawGradient};

use super::{CheckStatus, ValidationCheck, ValidationReport};

/// Allowed deviation of `percent_a + percent_b` from 100
pub const COMPOSITION_TOLERANCE: f64 = 0.01;

const STRUCTURE: &str = "Gradient structure";
const STEP_COUNT: &str = "Step count";
const COMPOSITION: &str = "Composition";
const PERCENT_RANGE: &str = "Percentage range";
const FLOW_RATE: &str = "Flow rate";
const TIME_VALUES: &str = "Time values";
const TIME_ORDERING: &str = "Time ordering";

/// Run every gradient check against a stored gradient.
///
/// `subject` names the gradient in the rendered report, usually the method
/// name. A gradient that does not decode gets a single failed structure check.
pub fn validate_gradient(raw: impl Into<RawGradient>, subject: impl Into<String>) -> ValidationReport {
    let mut report = ValidationReport::new(subject);

    let profile = match parse_gradient_profile(raw) {
        Ok(profile) => profile,
        Err(e) => {
            report.add_check(ValidationCheck::flagging(
                STRUCTURE,
                CheckStatus::Failed,
                vec![e.to_string()],
            ));
            return report;
        }
    };

    report.usable_steps = Some(profile.len());
    report.add_check(ValidationCheck::passed(STRUCTURE));
    report.add_check(check_step_count(&profile));
    report.add_check(flag_steps(
        &profile,
        COMPOSITION,
        |s| (s.composition_total() - 100.0).abs() > COMPOSITION_TOLERANCE,
        |s| format!("A + B = {} at {} min", s.composition_total(), s.time),
    ));
    report.add_check(flag_steps(
        &profile,
        PERCENT_RANGE,
        |s| !(0.0..=100.0).contains(&s.percent_a) || !(0.0..=100.0).contains(&s.percent_b),
        |s| format!("A = {}%, B = {}% at {} min", s.percent_a, s.percent_b, s.time),
    ));
    report.add_check(flag_steps(
        &profile,
        FLOW_RATE,
        |s| s.flow_rate <= 0.0,
        |s| format!("{} mL/min at {} min", s.flow_rate, s.time),
    ));
    report.add_check(flag_steps(
        &profile,
        TIME_VALUES,
        |s| s.time < 0.0,
        |s| format!("{} min", s.time),
    ));
    report.add_check(check_time_ordering(&profile));

    report
}

fn check_step_count(profile: &GradientProfile) -> ValidationCheck {
    let finding = match profile.len() {
        0 => "no steps stored",
        1 => "a single step defines no time interval",
        _ => return ValidationCheck::passed(STEP_COUNT),
    };
    ValidationCheck::flagging(STEP_COUNT, CheckStatus::Warning, vec![finding.to_string()])
}

/// Fail the check with one finding per step matching `is_bad`
fn flag_steps(
    profile: &GradientProfile,
    name: &'static str,
    is_bad: impl Fn(&GradientStep) -> bool,
    describe: impl Fn(&GradientStep) -> String,
) -> ValidationCheck {
    let findings = profile
        .steps()
        .iter()
        .filter(|&s| is_bad(s))
        .map(describe)
        .collect();

    ValidationCheck::flagging(name, CheckStatus::Failed, findings)
}

fn check_time_ordering(profile: &GradientProfile) -> ValidationCheck {
    let findings = profile
        .segments()
        .filter(|(a, b)| a.time == b.time)
        .map(|(a, _)| format!("two steps at {} min", a.time))
        .collect();

    ValidationCheck::flagging(TIME_ORDERING, CheckStatus::Warning, findings)
}
