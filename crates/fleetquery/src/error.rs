//! Error types for fleetquery.
//!
//! Queries against a constructed fleet never fail; errors only arise while
//! building aircraft records or loading configuration and fleet files.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for fleetquery operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Fleet Errors ===
    /// An aircraft record failed validation.
    #[error("invalid aircraft '{name}': {reason}")]
    InvalidAircraft {
        /// Name of the rejected aircraft.
        name: String,
        /// Why the record was rejected.
        reason: String,
    },

    /// A fleet definition file could not be read or parsed.
    #[error("failed to load fleet from {path}: {source}")]
    FleetFile {
        /// Path to the fleet file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: Box<figment::Error>,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Serialization Errors ===
    /// Rendering JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for fleetquery operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid aircraft error.
    #[must_use]
    pub fn invalid_aircraft(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAircraft {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a fleet file error.
    #[must_use]
    pub fn fleet_file(path: impl Into<PathBuf>, source: figment::Error) -> Self {
        Self::FleetFile {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Check if this error rejected an aircraft record.
    #[must_use]
    pub fn is_invalid_aircraft(&self) -> bool {
        matches!(self, Self::InvalidAircraft { .. })
    }
}
