use std::path::PathBuf;

/// Errors that can occur while loading exported records
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// I/O error reading a records file
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON deserialization error
    #[error("Invalid records in {path}: {source}")]
    Json {
        /// File holding the invalid records
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}
