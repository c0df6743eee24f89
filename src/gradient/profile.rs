use serde::Serialize;

use super::GradientStep;

/// A validated gradient: every step well-formed, ordered by time
///
/// Construct one with [`super::normalize_gradient_profile`]. An empty profile
/// means no usable gradient data was stored for the method.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GradientProfile {
    steps: Vec<GradientStep>,
}

impl GradientProfile {
    /// Wrap steps that have already been checked and sorted
    pub(crate) fn from_sorted(steps: Vec<GradientStep>) -> Self {
        Self { steps }
    }

    /// Steps in ascending time order
    pub fn steps(&self) -> &[GradientStep] {
        &self.steps
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when no gradient data is available
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True when the profile spans at least one time interval
    pub fn has_interval(&self) -> bool {
        self.steps.len() >= 2
    }

    /// Run time covered by the gradient in minutes
    pub fn duration_min(&self) -> f64 {
        match (self.steps.first(), self.steps.last()) {
            (Some(first), Some(last)) => last.time - first.time,
            _ => 0.0,
        }
    }

    /// Iterate over consecutive step pairs
    pub fn segments(&self) -> impl Iterator<Item = (&GradientStep, &GradientStep)> {
        self.steps.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Consume the profile and return its steps
    pub fn into_steps(self) -> Vec<GradientStep> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a GradientProfile {
    type Item = &'a GradientStep;
    type IntoIter = std::slice::Iter<'a, GradientStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
