//! Configuration management for fleetquery.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults. The
//! configuration decides which fleet the query service is built over.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    value::magic::RelativePathBuf,
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::aircraft::Aircraft;
use crate::error::{Error, Result};
use crate::fleet::FleetService;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "fleetquery";

/// Environment variable prefix.
const ENV_PREFIX: &str = "FLEETQUERY_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FLEETQUERY_`, nested keys
///    separated by `__`, e.g. `FLEETQUERY_FLEET__PATH`)
/// 2. TOML config file at `~/.config/fleetquery/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fleet configuration.
    pub fleet: FleetConfig,
}

/// Fleet-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    /// Path to a TOML fleet definition.
    /// A relative path set in a config file is resolved against that file's
    /// directory; one set through the environment, against the working
    /// directory. When unset, the built-in fleet is used.
    pub path: Option<RelativePathBuf>,
    /// Use the built-in fleet even when `path` is set.
    pub use_default: bool,
}

/// On-disk layout of a fleet definition file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetFile {
    /// Aircraft in fleet order.
    #[serde(default)]
    pub aircraft: Vec<Aircraft>,
}

impl FleetFile {
    /// Read a fleet definition from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FleetFile`] if the file is missing, malformed, or
    /// contains an invalid aircraft record.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading fleet from {}", path.display());

        // Toml::file silently yields nothing for a missing file.
        if !path.is_file() {
            return Err(Error::fleet_file(
                path,
                figment::Error::from(format!("no such file: {}", path.display())),
            ));
        }

        Figment::from(Toml::file(path))
            .extract()
            .map_err(|source| Error::fleet_file(path, source))
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing config file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration at `config_path` and build its fleet.
    ///
    /// Ignores the default config file; only `config_path`, the environment,
    /// and defaults take part.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or its fleet file is invalid.
    pub fn load_fleet_from(config_path: impl Into<PathBuf>) -> Result<FleetService> {
        Self::load_from(Some(config_path.into()))?.build_fleet()
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.fleet.path {
            if path.original().as_os_str().is_empty() {
                return Err(Error::ConfigValidation {
                    message: "fleet.path must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// The fleet file to read, if the built-in fleet is not in use.
    #[must_use]
    pub fn fleet_path(&self) -> Option<PathBuf> {
        if self.fleet.use_default {
            None
        } else {
            self.fleet.path.as_ref().map(RelativePathBuf::relative)
        }
    }

    /// Build the fleet query service this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured fleet file cannot be loaded.
    pub fn build_fleet(&self) -> Result<FleetService> {
        match self.fleet_path() {
            Some(path) => {
                let file = FleetFile::load(&path)?;
                info!(
                    "Loaded {} aircraft from {}",
                    file.aircraft.len(),
                    path.display()
                );
                Ok(FleetService::new(file.aircraft))
            }
            None => {
                debug!("Using built-in fleet");
                Ok(FleetService::with_default_fleet())
            }
        }
    }
}
