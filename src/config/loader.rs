//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CurrencyConfig, FiscalYearConfig, JurisdictionMetadata, PayrollConfig};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and resolves the fiscal-year parameters effective for a given year.
///
/// # Directory Structure
///
/// ```text
/// config/ro/
/// ├── jurisdiction.yaml   # Jurisdiction metadata
/// ├── currency.yaml       # Foreign currency and fallback exchange rate
/// └── years/
///     └── 2025.yaml       # Parameters effective from this year
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ro").unwrap();
/// let fiscal = loader.fiscal_year(2025).unwrap();
/// println!("Minimum wage: {}", fiscal.minimum_wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any required file is missing, contains invalid
    /// YAML, or holds a value outside its allowed domain.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<JurisdictionMetadata>(&path.join("jurisdiction.yaml"))?;
        let currency = Self::load_yaml::<CurrencyConfig>(&path.join("currency.yaml"))?;
        let years = Self::load_years(&path.join("years"))?;

        Self::from_parts(metadata, currency, years)
    }

    /// Builds a loader from already-parsed parts, applying the same
    /// validation as [`ConfigLoader::load`].
    pub fn from_parts(
        metadata: JurisdictionMetadata,
        currency: CurrencyConfig,
        years: Vec<FiscalYearConfig>,
    ) -> EngineResult<Self> {
        if currency.fallback_rate <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "currency.fallback_rate".to_string(),
                message: "must be positive".to_string(),
            });
        }
        for year in &years {
            Self::validate_year(year)?;
        }

        Ok(Self {
            config: PayrollConfig::new(metadata, currency, years),
        })
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

    /// Loads all fiscal-year files from the years directory.
    fn load_years(years_dir: &Path) -> EngineResult<Vec<FiscalYearConfig>> {
        let years_dir_str = years_dir.display().to_string();

        let entries = fs::read_dir(years_dir).map_err(|_| EngineError::ConfigNotFound {
            path: years_dir_str.clone(),
        })?;

        let mut years = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: years_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                years.push(Self::load_yaml::<FiscalYearConfig>(&path)?);
            }
        }

        if years.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no fiscal year files found)", years_dir_str),
            });
        }

        Ok(years)
    }

    fn validate_year(config: &FiscalYearConfig) -> EngineResult<()> {
        let hundred = Decimal::ONE_HUNDRED;
        let rates = [
            ("cas", config.rates.cas),
            ("cass", config.rates.cass),
            ("tax", config.rates.tax),
            ("cam", config.rates.cam),
        ];
        for (name, rate) in rates {
            if rate < Decimal::ZERO || rate > hundred {
                return Err(EngineError::InvalidConfig {
                    field: format!("{}.rates.{}", config.year, name),
                    message: format!("{} must be between 0 and 100", rate),
                });
            }
        }

        if config.minimum_wage <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: format!("{}.minimum_wage", config.year),
                message: "must be positive".to_string(),
            });
        }

        let deduction = &config.personal_deduction;
        if deduction.percentages.is_empty() {
            return Err(EngineError::InvalidConfig {
                field: format!("{}.personal_deduction.percentages", config.year),
                message: "at least one entry is required".to_string(),
            });
        }
        if deduction
            .percentages
            .iter()
            .any(|p| *p < Decimal::ZERO || *p > Decimal::ONE)
        {
            return Err(EngineError::InvalidConfig {
                field: format!("{}.personal_deduction.percentages", config.year),
                message: "entries must be fractions between 0 and 1".to_string(),
            });
        }
        if deduction.phase_out_band <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: format!("{}.personal_deduction.phase_out_band", config.year),
                message: "must be positive".to_string(),
            });
        }

        if config.relief.amount < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: format!("{}.relief.amount", config.year),
                message: "must not be negative".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        self.config.jurisdiction()
    }

    /// Returns the currency settings.
    pub fn currency(&self) -> &CurrencyConfig {
        self.config.currency()
    }

    /// Gets the fiscal-year parameters effective for a calendar year.
    ///
    /// The most recent configuration whose `year` is on or before the
    /// requested year wins, so a single file keeps applying until a newer
    /// one is added.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/ro")?;
    /// let fiscal = loader.fiscal_year(2026)?;
    /// assert_eq!(fiscal.year, 2025);
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn fiscal_year(&self, year: i32) -> EngineResult<&FiscalYearConfig> {
        self.config
            .years()
            .iter()
            .rfind(|fy| fy.year <= year)
            .ok_or(EngineError::FiscalYearNotFound { year })
    }

    /// Returns the most recent configured fiscal year.
    pub fn latest_year(&self) -> i32 {
        self.config.years().last().map_or(0, |fy| fy.year)
    }
}
