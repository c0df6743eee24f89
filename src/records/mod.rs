//! # Records Module
//!
//! Rows exported by the persistence layer, and loaders for JSON files holding
//! them. Each file is a JSON array of rows (or, for [`load_method`], a single
//! row object).

mod error;
mod method;

use std::fs;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use crate::injection::InjectionRecord;
use crate::lifetime::GuardColumn;

pub use error::RecordError;
pub use method::{IonizationMode, MethodRecord};

/// Load a single method row
pub fn load_method(path: impl AsRef<Path>) -> Result<MethodRecord, RecordError> {
    read_json(path.as_ref())
}

/// Load an array of method rows
pub fn load_methods(path: impl AsRef<Path>) -> Result<Vec<MethodRecord>, RecordError> {
    read_json(path.as_ref())
}

/// Load an array of injection rows
pub fn load_injections(path: impl AsRef<Path>) -> Result<Vec<InjectionRecord>, RecordError> {
    read_json(path.as_ref())
}

/// Load an array of guard column rows
pub fn load_guard_columns(path: impl AsRef<Path>) -> Result<Vec<GuardColumn>, RecordError> {
    read_json(path.as_ref())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, RecordError> {
    debug!("Reading records from {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| RecordError::Json {
        path: path.to_path_buf(),
        source,
    })
}
