//! Application form configuration

use serde::Deserialize;

use crate::error::SchemaError;

/// Environment variable prefix, e.g. `QUICKLOAN_LOAN_AMOUNT_MIN`
pub const ENV_PREFIX: &str = "QUICKLOAN";

/// Tunable bounds of the loan application form
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Smallest loan amount accepted on the application form
    pub loan_amount_min: f64,
    /// Largest loan amount accepted on the application form
    pub loan_amount_max: f64,
    /// Log level
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            loan_amount_min: 1_000.0,
            loan_amount_max: 500_000.0,
            log_level: "info".to_string(),
        }
    }
}

impl ApplicationConfig {
    /// Loads configuration from `QUICKLOAN_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Loads configuration from any `config` source; unset keys keep their defaults
    pub fn from_source<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    /// Checks that the loan amount bounds are usable
    pub fn validate(&self) -> Result<(), SchemaError> {
        let (min, max) = (self.loan_amount_min, self.loan_amount_max);
        if !min.is_finite() || !max.is_finite() {
            return Err(SchemaError::configuration("loan amount bounds must be finite"));
        }
        if min <= 0.0 {
            return Err(SchemaError::configuration(format!(
                "loan_amount_min must be positive, got {}",
                min
            )));
        }
        if min > max {
            return Err(SchemaError::configuration(format!(
                "loan_amount_min {} exceeds loan_amount_max {}",
                min, max
            )));
        }
        Ok(())
    }
}
