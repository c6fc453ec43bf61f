//! Utility modules for hh-ssl-cert-check

pub mod error;

pub use error::{CheckerError, ConfigError, InspectError, PassphraseError, Result};
