//! Configuration loading and validation for the dashboard backend.
//!
//! Uses serde_yaml to load YAML configuration files with support for
//! environment variable overrides for the published sheet URLs.

mod app;
mod calculator;
mod duration;
mod error;
mod sheet;

pub use app::AppConfig;
pub use calculator::CalculatorConfig;
pub use error::ConfigError;
pub use sheet::SheetConfig;

use serde::Deserialize;
use std::{env, fs};

/// Root configuration structure for the dashboard backend.
///
/// Required sections: app. Optional sections: sheet, calculator.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Application-level settings like name and log level.
    pub app: AppConfig,
    /// Published sheet endpoints and fetch behavior (optional).
    #[serde(default)]
    pub sheet: SheetConfig,
    /// Calculator defaults (optional).
    pub calculator: Option<CalculatorConfig>,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    ///
    /// First loads environment variables from `.env` (if it exists), then
    /// the YAML config, then sheet URL overrides from the environment:
    /// - `RESULTS_SHEET_URL`, `TESTIMONIALS_SHEET_URL`
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore error if not found)
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        config.load_urls_from_env();
        config.validate()?;

        Ok(config)
    }

    /// Load sheet URL overrides from environment variables.
    fn load_urls_from_env(&mut self) {
        if let Ok(url) = env::var("RESULTS_SHEET_URL") {
            if !url.is_empty() {
                self.sheet.results_url = Some(url);
            }
        }
        if let Ok(url) = env::var("TESTIMONIALS_SHEET_URL") {
            if !url.is_empty() {
                self.sheet.testimonials_url = Some(url);
            }
        }
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.is_empty() {
            return Err(ConfigError::Validation("app.name is required".into()));
        }

        if let Some(ref url) = self.sheet.results_url {
            if url.is_empty() {
                return Err(ConfigError::Validation(
                    "sheet.results_url must not be empty".into(),
                ));
            }
        }

        if let Some(ref calculator) = self.calculator {
            if let Some(unit_value) = calculator.default_unit_value {
                if unit_value.is_sign_negative() {
                    return Err(ConfigError::Validation(
                        "calculator.default_unit_value must not be negative".into(),
                    ));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
