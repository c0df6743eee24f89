use log::debug;
use serde_json::{Map, Value};

use super::{GradientError, GradientProfile, GradientStep, RawGradient};

/// Field names checked on each stored step, with their camelCase spelling
const FIELDS: [(&str, &str); 4] = [
    ("time", "time"),
    ("percent_a", "percentA"),
    ("percent_b", "percentB"),
    ("flow_rate", "flowRate"),
];

/// Normalize an untrusted gradient into a validated, time-ordered profile.
///
/// Never fails: any malformed input yields an empty profile. Use
/// [`parse_gradient_profile`] to learn why a gradient was rejected.
pub fn normalize_gradient_profile(raw: impl Into<RawGradient>) -> GradientProfile {
    match parse_gradient_profile(raw) {
        Ok(profile) => profile,
        Err(e) => {
            debug!("Discarding gradient: {}", e);
            GradientProfile::default()
        }
    }
}

/// Validate and sort an untrusted gradient, reporting the first problem found.
///
/// Missing input is not an error and yields an empty profile.
pub fn parse_gradient_profile(raw: impl Into<RawGradient>) -> Result<GradientProfile, GradientError> {
    let steps = match raw.into() {
        RawGradient::Missing => Vec::new(),
        RawGradient::Steps(steps) => check_typed(steps)?,
        RawGradient::Json(text) => steps_from_value(&unwrap_encoded(decode(&text)?)?)?,
        RawGradient::Value(value) => steps_from_value(&unwrap_encoded(value)?)?,
    };

    Ok(GradientProfile::from_sorted(sort_by_time(steps)))
}

fn check_typed(steps: Vec<GradientStep>) -> Result<Vec<GradientStep>, GradientError> {
    for (index, step) in steps.iter().enumerate() {
        let values = [step.time, step.percent_a, step.percent_b, step.flow_rate];
        for (&(field, _), value) in FIELDS.iter().zip(values) {
            if !value.is_finite() {
                return Err(GradientError::NonFinite { index, field });
            }
        }
    }
    Ok(steps)
}

fn decode(text: &str) -> Result<Value, GradientError> {
    serde_json::from_str(text).map_err(|e| GradientError::InvalidJson(e.to_string()))
}

/// jsonb columns sometimes hold the gradient double-encoded as a string
fn unwrap_encoded(value: Value) -> Result<Value, GradientError> {
    match value {
        Value::String(text) => decode(&text),
        other => Ok(other),
    }
}

fn steps_from_value(value: &Value) -> Result<Vec<GradientStep>, GradientError> {
    let items = match value {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => return Err(GradientError::NotAnArray(json_kind(other))),
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => step_from_object(index, map),
            _ => Err(GradientError::StepNotAnObject { index }),
        })
        .collect()
}

fn step_from_object(index: usize, map: &Map<String, Value>) -> Result<GradientStep, GradientError> {
    let mut values = [0.0_f64; 4];
    for (slot, (field, alias)) in values.iter_mut().zip(FIELDS) {
        let number = map
            .get(field)
            .or_else(|| map.get(alias))
            .and_then(Value::as_f64)
            .ok_or(GradientError::MissingField { index, field })?;
        if !number.is_finite() {
            return Err(GradientError::NonFinite { index, field });
        }
        *slot = number;
    }

    let [time, percent_a, percent_b, flow_rate] = values;
    Ok(GradientStep::new(time, percent_a, percent_b, flow_rate))
}

/// Stable ascending sort; equal times keep their input order
fn sort_by_time(mut steps: Vec<GradientStep>) -> Vec<GradientStep> {
    steps.sort_by(|a, b| a.time.total_cmp(&b.time));
    steps
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
