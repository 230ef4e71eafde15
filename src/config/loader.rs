//! Configuration loader.
//!
//! This module provides the [`ConfigLoader`] which reads `calculator.yaml`
//! from a configuration directory.

use std::fs;
use std::path::Path;

use super::types::{CalculatorConfig, FormDefaults, ServerConfig};
use crate::error::{EngineError, EngineResult};

/// The configuration file expected inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "calculator.yaml";

/// Loads and provides access to the calculator configuration.
///
/// # Example
///
/// ```no_run
/// use decimo_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Listening on port {}", loader.server().port);
/// # Ok::<(), decimo_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `calculator.yaml` is missing (`ConfigNotFound`)
    /// - the file is not valid YAML or lacks a required field (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml::<CalculatorConfig>(&config_path)?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the form defaults.
    pub fn form_defaults(&self) -> FormDefaults {
        self.config.form_defaults
    }
}
