//! Error types for scan planning.
//!
//! Planning is pure and synchronous, so every failure is a property of
//! the input configuration or the geometry derived from it. A rejected
//! configuration produces no plan, and therefore no stage commands and
//! no export output.

use std::io;
use thiserror::Error;

/// Errors that can occur while planning or exporting a scan.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// A configuration value makes the requested computation impossible.
    #[error("Invalid configuration: '{name}' {reason}")]
    InvalidConfiguration { name: String, reason: String },

    /// A derived quantity collapsed to zero or below where a non-empty
    /// scan was expected.
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// I/O error while loading a configuration or writing an export.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PlannerError {
    /// Invalid-configuration error for the named parameter.
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for planning operations.
pub type Result<T> = std::result::Result<T, PlannerError>;
