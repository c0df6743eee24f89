/// Errors that can occur while planning injection batches
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InjectionError {
    /// A batch must contain at least one injection
    #[error("Batch size must be at least 1")]
    EmptyBatch,

    /// The batch would run past the largest representable injection number
    #[error("Injection numbers starting at {first} cannot hold a batch of {size}")]
    NumberOverflow {
        /// First injection number of the planned batch
        first: u32,
        /// Requested batch size
        size: u32,
    },
}
