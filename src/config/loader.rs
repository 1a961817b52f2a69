//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! payroll rates from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::StatutoryRates;

/// Loads and provides access to the statutory rate configuration.
///
/// # Directory Structure
///
/// The configuration directory holds a single file:
/// ```text
/// config/payroll/
/// └── statutory.yaml   # EPF, professional tax, travel allowance rates
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// println!("Travel allowance: {}/day", loader.rates().travelling_allowance_per_day);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    rates: StatutoryRates,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/payroll")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the
    /// file is missing or contains invalid YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let statutory_path = path.as_ref().join("statutory.yaml");
        let rates = Self::load_yaml::<StatutoryRates>(&statutory_path)?;
        Ok(Self { rates })
    }

    /// Returns the loaded statutory rates.
    pub fn rates(&self) -> &StatutoryRates {
        &self.rates
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_load_reads_shipped_config() {
        let loader = ConfigLoader::load("./config/payroll").expect("Failed to load config");
        assert_eq!(loader.rates().epf_amount, Decimal::from(1800));
        assert_eq!(loader.rates(), &StatutoryRates::default());
    }

    #[test]
    fn test_load_missing_directory_is_config_not_found() {
        let result = ConfigLoader::load("./config/does-not-exist");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_default_loader_uses_default_rates() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.rates(), &StatutoryRates::default());
    }
}
