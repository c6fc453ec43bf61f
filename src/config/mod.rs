//! Configuration module for hh-ssl-cert-check
//!
//! Handles loading settings from TOML files.

pub mod settings;

pub use settings::{ExitCodes, Settings};

use crate::utils::ConfigError;
use std::path::Path;

/// Load settings from an explicit path, or from the default location
pub fn load_config(path: Option<&Path>) -> Result<Settings, ConfigError> {
    match path {
        Some(path) => Settings::load_from_file(path),
        None => Settings::load_default(),
    }
}
