//! Error types for the MedTrack system.

use thiserror::Error;

/// Result type alias using our custom error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in MedTrack operations
#[derive(Error, Debug)]
pub enum Error {
    /// A submitted value failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// An operation referenced a medication id that is not registered
    #[error("Medication not found: {id}")]
    MedicationNotFound { id: String },

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration file could not be parsed
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}
