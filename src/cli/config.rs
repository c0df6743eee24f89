//! TOML configuration file support.
//!
//! Lifetime thresholds, the guard-column catalog and the batch success policy
//! can be set in a config file instead of being compiled in:
//!
//! ```toml
//! # lcms-track.toml
//! [lifetime]
//! default_guard_lifetime = 1200
//! guard_warning_percent = 75.0
//!
//! [[lifetime.guard_types]]
//! part_number = "Ultra Guard"
//! expected_lifetime = 2000
//!
//! [batches]
//! success_policy = "all-succeeded"
//! ```

use anyhow::{Context, Result};
use lcms_track::injection::SuccessPolicy;
use lcms_track::lifetime::LifetimeConfig;
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for lcms-track.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Column and guard-column lifetime settings.
    #[serde(default)]
    pub lifetime: LifetimeConfig,

    /// Batch aggregation settings.
    #[serde(default)]
    pub batches: BatchesConfig,
}

/// Configuration for batch aggregation.
#[derive(Debug, Default, Deserialize)]
pub struct BatchesConfig {
    /// How a batch's success flag is derived from its injections.
    pub success_policy: Option<SuccessPolicy>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load the config file if one was given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
