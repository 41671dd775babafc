//! # Settings Module
//!
//! ## Purpose
//! Configuration of the diffusion calculations and of the command line front end, persisted as
//! JSON (`diffusion_config.json` in the working directory by default).
//!
//! ## Configuration Format
//! ```json
//! {
//!   "proportion_tolerance": 0.001,
//!   "strict_units": false,
//!   "log_level": "info",
//!   "log_file": null
//! }
//! ```
//! Missing fields take their default values, a missing or broken file gives the default
//! configuration.
//!
//! ## Usage Pattern
//! ```rust
//! use DiffuThe::settings::Settings;
//!
//! let settings = Settings::load_or_default("no_such_config.json");
//! assert_eq!(settings.proportion_tolerance, 0.001);
//! assert!(!settings.strict_units);
//! ```
use crate::Diffusion::diffusion_errors::DiffusionError;
use crate::Diffusion::mixture::DEFAULT_PROPORTION_TOLERANCE;
use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "diffusion_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// allowed deviation of the sum of mole fractions from 1
    pub proportion_tolerance: f64,
    /// reject unknown temperature/pressure units instead of passing the value through
    pub strict_units: bool,
    /// off, error, warn, info, debug, trace
    pub log_level: String,
    /// optional log file in addition to the terminal
    pub log_file: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            proportion_tolerance: DEFAULT_PROPORTION_TOLERANCE,
            strict_units: false,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::load_or_default(DEFAULT_CONFIG_FILE)
    }
    /// Loads configuration from a JSON file.
    ///
    /// # Returns
    /// * `Ok(Settings)` - parsed configuration
    /// * `Err(DiffusionError)` - file missing, unreadable or not valid JSON
    pub fn load_config(config_file: &str) -> Result<Self, DiffusionError> {
        let content = fs::read_to_string(config_file)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }
    /// configuration from the file, defaults if the file is absent or invalid
    pub fn load_or_default(config_file: &str) -> Self {
        let (settings, error) = Self::load_reporting(config_file);
        if let Some(e) = error {
            warn!("failed to load settings from {}: {}, using defaults", config_file, e);
        }
        settings
    }
    /// Same as `load_or_default` but returns the load failure instead of logging it,
    /// for callers that run before the logger is initialized.
    pub fn load_reporting(config_file: &str) -> (Self, Option<DiffusionError>) {
        if !Path::new(config_file).exists() {
            return (Self::default(), None);
        }
        match Self::load_config(config_file) {
            Ok(settings) => (settings, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn save_config(&self, config_file: &str) -> Result<(), DiffusionError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_file, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), DiffusionError> {
        if !(self.proportion_tolerance >= 0.0 && self.proportion_tolerance < 1.0) {
            return Err(DiffusionError::InvalidParameter {
                what: "proportion tolerance",
                value: self.proportion_tolerance,
            });
        }
        self.level_filter().map(|_| ())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, DiffusionError> {
        match self.log_level.trim().to_lowercase().as_str() {
            "off" => Ok(LevelFilter::Off),
            "error" => Ok(LevelFilter::Error),
            "warn" => Ok(LevelFilter::Warn),
            "info" => Ok(LevelFilter::Info),
            "debug" => Ok(LevelFilter::Debug),
            "trace" => Ok(LevelFilter::Trace),
            other => Err(DiffusionError::ParseError(format!(
                "unknown log level: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.proportion_tolerance, 0.001);
        assert!(!settings.strict_units);
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let settings = Settings::load_or_default(path.to_str().unwrap());
        assert_eq!(settings, Settings::default());
        assert!(Settings::load_config(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let path = path.to_str().unwrap();
        let settings = Settings {
            proportion_tolerance: 0.01,
            strict_units: true,
            log_level: "debug".to_string(),
            log_file: Some("diffusion.log".to_string()),
        };
        settings.save_config(path).unwrap();
        let loaded = Settings::load_config(path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_and_broken_files() {
        let dir = tempdir().unwrap();
        let partial = dir.path().join("partial.json");
        fs::write(&partial, r#"{ "strict_units": true }"#).unwrap();
        let loaded = Settings::load_config(partial.to_str().unwrap()).unwrap();
        assert!(loaded.strict_units);
        assert_eq!(loaded.proportion_tolerance, 0.001);

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ strict_units: ").unwrap();
        assert!(matches!(
            Settings::load_config(broken.to_str().unwrap()),
            Err(DiffusionError::SerdeError(_))
        ));
        assert_eq!(
            Settings::load_or_default(broken.to_str().unwrap()),
            Settings::default()
        );

        let bad_level = dir.path().join("level.json");
        fs::write(&bad_level, r#"{ "log_level": "loud" }"#).unwrap();
        assert!(Settings::load_config(bad_level.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_tolerance_out_of_range() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tolerance.json");
        fs::write(&path, r#"{ "proportion_tolerance": 1.5 }"#).unwrap();
        let err = Settings::load_config(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(
            err,
            DiffusionError::InvalidParameter { what: "proportion tolerance", value } if value == 1.5
        ));
        let negative = Settings {
            proportion_tolerance: -0.1,
            ..Settings::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(DiffusionError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_load_reporting_returns_failure() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ strict_units: ").unwrap();
        let (settings, error) = Settings::load_reporting(broken.to_str().unwrap());
        assert_eq!(settings, Settings::default());
        assert!(matches!(error, Some(DiffusionError::SerdeError(_))));

        let absent = dir.path().join("absent.json");
        let (settings, error) = Settings::load_reporting(absent.to_str().unwrap());
        assert_eq!(settings, Settings::default());
        assert!(error.is_none());

        let good = dir.path().join("good.json");
        fs::write(&good, r#"{ "log_level": "debug" }"#).unwrap();
        let (settings, error) = Settings::load_reporting(good.to_str().unwrap());
        assert_eq!(settings.log_level, "debug");
        assert!(error.is_none());
    }
}
