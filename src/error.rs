//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The payroll and calendar computations themselves are total; errors only
//! arise at the edges (configuration loading, request validation, and
//! calendar years the date type cannot represent).

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/jurisdiction.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/jurisdiction.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value outside its allowed domain.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// No fiscal-year configuration is effective for the requested year.
    #[error("No fiscal year configuration effective for {year}")]
    FiscalYearNotFound {
        /// The requested year.
        year: i32,
    },

    /// A request field was invalid.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The calendar year cannot be represented by the date type.
    #[error("Year {year} is outside the representable calendar range")]
    DateOutOfRange {
        /// The requested year.
        year: i32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "rates.cas".to_string(),
            message: "must be between 0 and 100".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'rates.cas': must be between 0 and 100"
        );
    }

    #[test]
    fn test_fiscal_year_not_found_displays_year() {
        let error = EngineError::FiscalYearNotFound { year: 2019 };
        assert_eq!(
            error.to_string(),
            "No fiscal year configuration effective for 2019"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "dependents".to_string(),
            message: "too many".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid input 'dependents': too many");
    }

    #[test]
    fn test_date_out_of_range_displays_year() {
        let error = EngineError::DateOutOfRange { year: 400_000 };
        assert_eq!(
            error.to_string(),
            "Year 400000 is outside the representable calendar range"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_year_not_found() -> EngineResult<()> {
            Err(EngineError::FiscalYearNotFound { year: 2000 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_year_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
