//! Configuration for RosterForge generation runs.
//!
//! Load generation settings from TOML or YAML files to control work-rule
//! limits and balance flags without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use rosterforge_config::GenerationConfig;
//!
//! let config = GenerationConfig::from_toml_str(r#"
//!     ward_id = "icu-3f"
//!     year = 2025
//!     month = 6
//!
//!     max_consecutive_work_days = 5
//!     max_consecutive_nights = 2
//!     balance_weekends = true
//! "#).unwrap();
//!
//! assert_eq!(config.month, 6);
//! assert_eq!(config.max_consecutive_nights, 2);
//! // Unspecified tunables fall back to defaults.
//! assert!(config.min_rest_after_night);
//! ```
//!
//! Or build one from a ward record:
//!
//! ```
//! # use rosterforge_core::{Ward, WardId};
//! use rosterforge_config::GenerationConfig;
//!
//! # let ward = Ward {
//! #     id: WardId::from("icu-3f"),
//! #     name: "ICU".into(),
//! #     min_staff_day: 3,
//! #     min_staff_evening: 2,
//! #     min_staff_night: 2,
//! #     max_consecutive_nights: 3,
//! #     min_rest_hours: 8,
//! #     require_mixed_experience: true,
//! # };
//! let config = GenerationConfig::for_ward(&ward, 2025, 6);
//! assert_eq!(config.max_consecutive_nights, ward.max_consecutive_nights);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rosterforge_core::{Ward, WardId};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for one generation run of one ward and month.
///
/// The config's values govern the run even where they duplicate ward fields
/// (`max_consecutive_nights`, `require_mixed_experience`): callers usually
/// copy the ward's values in via [`GenerationConfig::for_ward`], but a
/// divergent config wins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GenerationConfig {
    /// Target ward.
    pub ward_id: WardId,
    /// Target year.
    pub year: i32,
    /// Target month, 1-based.
    pub month: u32,

    /// Maximum consecutive work days before a forced rest.
    #[serde(default = "defaults::max_consecutive_work_days")]
    pub max_consecutive_work_days: u32,
    /// Maximum consecutive night shifts.
    #[serde(default = "defaults::max_consecutive_nights")]
    pub max_consecutive_nights: u32,
    /// Forbid a DAY shift directly after a NIGHT shift.
    #[serde(default = "defaults::enabled")]
    pub min_rest_after_night: bool,

    /// Prefer nurses with fewer weekend shifts when staffing a weekend.
    #[serde(default = "defaults::enabled")]
    pub balance_weekends: bool,
    /// Reserved for future use; parsed and carried but not yet acted on.
    #[serde(default = "defaults::enabled")]
    pub balance_holidays: bool,
    /// Night distribution tunable; the per-shift quota deficit in the
    /// priority scorer is what actually spreads nights.
    #[serde(default = "defaults::enabled")]
    pub balance_night_shifts: bool,

    /// Require a senior-or-above nurse in any multi-person team.
    #[serde(default = "defaults::enabled")]
    pub require_mixed_experience: bool,
}

mod defaults {
    pub fn max_consecutive_work_days() -> u32 {
        5
    }

    pub fn max_consecutive_nights() -> u32 {
        3
    }

    pub fn enabled() -> bool {
        true
    }
}

impl GenerationConfig {
    /// Creates a configuration with default tunables.
    pub fn new(ward_id: impl Into<WardId>, year: i32, month: u32) -> Self {
        Self {
            ward_id: ward_id.into(),
            year,
            month,
            max_consecutive_work_days: defaults::max_consecutive_work_days(),
            max_consecutive_nights: defaults::max_consecutive_nights(),
            min_rest_after_night: true,
            balance_weekends: true,
            balance_holidays: true,
            balance_night_shifts: true,
            require_mixed_experience: true,
        }
    }

    /// Creates a configuration for a ward, copying the ward's own
    /// `max_consecutive_nights` and `require_mixed_experience` values.
    pub fn for_ward(ward: &Ward, year: i32, month: u32) -> Self {
        Self {
            max_consecutive_nights: ward.max_consecutive_nights,
            require_mixed_experience: ward.require_mixed_experience,
            ..Self::new(ward.id.clone(), year, month)
        }
    }

    /// Loads configuration from a file, dispatching on the extension
    /// (`.yaml`/`.yml` for YAML, anything else TOML).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or
    /// fails [`GenerationConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for values no run could honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=12).contains(&self.month) {
            return Err(ConfigError::Invalid(format!(
                "month must be 1..=12, got {}",
                self.month
            )));
        }
        if self.max_consecutive_work_days == 0 {
            return Err(ConfigError::Invalid(
                "max_consecutive_work_days must be at least 1".into(),
            ));
        }
        if self.max_consecutive_nights == 0 {
            return Err(ConfigError::Invalid(
                "max_consecutive_nights must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
