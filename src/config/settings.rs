//! Application settings configuration
//!
//! Defines the warning threshold and the status-to-exit-code mapping.

use crate::utils::ConfigError;
use chrono::Duration;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;

/// Process exit code for each check status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ExitCodes {
    #[serde(default = "default_ok_code")]
    pub ok: i32,
    #[serde(default = "default_warning_code")]
    pub warning: i32,
    #[serde(default = "default_failure_code")]
    pub expired: i32,
    #[serde(default = "default_failure_code")]
    pub unreadable: i32,
}

fn default_ok_code() -> i32 {
    0
}

fn default_warning_code() -> i32 {
    1
}

fn default_failure_code() -> i32 {
    2
}

fn default_warn_days() -> i64 {
    30
}

impl Default for ExitCodes {
    fn default() -> Self {
        Self {
            ok: default_ok_code(),
            warning: default_warning_code(),
            expired: default_failure_code(),
            unreadable: default_failure_code(),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Days before notAfter at which a certificate becomes WARNING
    #[serde(default = "default_warn_days")]
    pub warn_days: i64,
    #[serde(default)]
    pub exit_codes: ExitCodes,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            warn_days: default_warn_days(),
            exit_codes: ExitCodes::default(),
        }
    }
}

impl Settings {
    /// Load settings from the default config file
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;

        Self::from_toml(&content)
    }

    /// Parse and validate settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.warn_days < 0 {
            return Err(ConfigError::InvalidValue {
                key: "warn_days".to_string(),
                message: format!("must not be negative, got {}", self.warn_days),
            });
        }
        if Duration::try_days(self.warn_days).is_none() {
            return Err(ConfigError::InvalidValue {
                key: "warn_days".to_string(),
                message: format!("{} days is out of range", self.warn_days),
            });
        }
        Ok(())
    }

    /// Warning threshold; saturates for values `validate` would reject
    pub fn warn_threshold(&self) -> Duration {
        Duration::try_days(self.warn_days.max(0)).unwrap_or(Duration::MAX)
    }
}
