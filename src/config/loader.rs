//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! rate table from YAML.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftType;

use super::types::{PayrollConfig, PayrollConfigFile, RateTableMetadata};

/// Name of the rate table file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "payroll.yaml";

/// Loads and provides access to the payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── payroll.yaml   # Shift multipliers, leave credit, policies
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// let multiplier = loader.get_multiplier("Regular Holidays").unwrap();
/// println!("Regular holiday multiplier: {}x", multiplier);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `payroll.yaml` is missing, is not valid YAML, or
    /// describes an incomplete or inconsistent rate table.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let file_path = path.as_ref().join(CONFIG_FILE_NAME);
        let path_str = file_path.display().to_string();

        let content = fs::read_to_string(&file_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses configuration from YAML text. `source` names the origin of the
    /// text in error messages.
    pub fn from_yaml_str(content: &str, source: &str) -> EngineResult<Self> {
        let file: PayrollConfigFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            config: PayrollConfig::try_from(file)?,
        })
    }

    /// Returns a loader holding the built-in rate table.
    pub fn with_defaults() -> Self {
        Self {
            config: PayrollConfig::default(),
        }
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the rate table metadata.
    pub fn metadata(&self) -> &RateTableMetadata {
        self.config.metadata()
    }

    /// Gets the multiplier for a shift type by its display name.
    ///
    /// Unlike entry resolution, this lookup never falls back: an unknown name
    /// is an `UnknownShiftType` error.
    pub fn get_multiplier(&self, shift_type: &str) -> EngineResult<Decimal> {
        let shift: ShiftType = shift_type.parse()?;
        Ok(self.config.rate_table().multiplier(shift))
    }
}
