//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading ledger
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::money::is_valid_date_format;

use super::types::{
    FormatConfig, FormattingFile, LedgerConfig, OrganizationConfig, PayrollPolicy, PeriodStrategy,
};

/// Loads and provides access to ledger configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── organization.yaml   # Organisation name and contact details
/// └── formatting.yaml     # Currency/date formatting and payroll policy
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Organisation: {}", loader.organization().name);
/// # Ok::<(), payroll_ledger::error::LedgerError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: LedgerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or contains invalid YAML,
    /// or if the date format is not a renderable strftime pattern.
    pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();

        let organization = Self::load_yaml::<OrganizationConfig>(&path.join("organization.yaml"))?;
        let formatting_path = path.join("formatting.yaml");
        let formatting = Self::load_yaml::<FormattingFile>(&formatting_path)?;

        let date_format = &formatting.formatting.date_format;
        if !is_valid_date_format(date_format) {
            return Err(LedgerError::ConfigParseError {
                path: formatting_path.display().to_string(),
                message: format!("invalid date_format '{}'", date_format),
            });
        }

        debug!(
            path = %path.display(),
            organization = %organization.name,
            currency = %formatting.formatting.currency_code,
            "Loaded ledger configuration"
        );

        Ok(Self {
            config: LedgerConfig::new(organization, formatting.formatting, formatting.payroll),
        })
    }

    /// Builds a loader from already-constructed settings.
    pub fn from_config(config: LedgerConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> LedgerResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LedgerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| LedgerError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying ledger configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Returns the organisation details.
    pub fn organization(&self) -> &OrganizationConfig {
        self.config.organization()
    }

    /// Returns the formatting settings.
    pub fn formatting(&self) -> &FormatConfig {
        self.config.formatting()
    }

    /// Returns the payroll policy.
    pub fn payroll(&self) -> &PayrollPolicy {
        self.config.payroll()
    }

    /// Returns the configured period counting strategy.
    pub fn period_strategy(&self) -> PeriodStrategy {
        self.config.payroll().period_strategy
    }
}
