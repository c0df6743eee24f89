/// Reasons a stored gradient is rejected by the normalizer
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GradientError {
    /// Text input was not valid JSON
    #[error("Gradient is not valid JSON: {0}")]
    InvalidJson(String),

    /// Decoded value was not an array of steps
    #[error("Gradient must be an array of steps, found {0}")]
    NotAnArray(&'static str),

    /// A step was not a JSON object
    #[error("Gradient step {index} is not an object")]
    StepNotAnObject {
        /// Position of the step in the input
        index: usize,
    },

    /// A step lacks a numeric field
    #[error("Gradient step {index} has no numeric '{field}'")]
    MissingField {
        /// Position of the step in the input
        index: usize,
        /// Name of the missing field
        field: &'static str,
    },

    /// A step carries NaN or an infinite value
    #[error("Gradient step {index} has a non-finite '{field}'")]
    NonFinite {
        /// Position of the step in the input
        index: usize,
        /// Name of the offending field
        field: &'static str,
    },
}
