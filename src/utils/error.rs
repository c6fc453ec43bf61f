//! Error types for hh-ssl-cert-check
//!
//! Per-file failures are `InspectError` values and never escape a single
//! check; they are folded into an `UNREADABLE` result instead. Only
//! configuration and passphrase problems abort a run.

use thiserror::Error;

/// Top-level error type for a whole run
#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Passphrase error: {0}")]
    Passphrase(#[from] PassphraseError),
}

/// Why a single certificate file could not be evaluated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InspectError {
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to read {path}: {message}")]
    FileRead { path: String, message: String },

    #[error("unsupported format: {detail}")]
    UnsupportedFormat { detail: String },

    #[error("cannot open PKCS#12 container: {message}")]
    DecryptionFailed { message: String },

    #[error("malformed certificate: {message}")]
    MalformedCertificate { message: String },

    #[error("certificate has no usable notAfter field")]
    MissingExpiryField,
}

impl InspectError {
    /// Stable name of the error kind, used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            InspectError::FileNotFound { .. } => "FileNotFound",
            InspectError::FileRead { .. } => "FileRead",
            InspectError::UnsupportedFormat { .. } => "UnsupportedFormat",
            InspectError::DecryptionFailed { .. } => "DecryptionFailed",
            InspectError::MalformedCertificate { .. } => "MalformedCertificate",
            InspectError::MissingExpiryField => "MissingExpiryField",
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        InspectError::MalformedCertificate {
            message: message.into(),
        }
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read configuration file {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Passphrase resolution errors
#[derive(Error, Debug)]
pub enum PassphraseError {
    #[error("environment variable {name} is not set")]
    EnvMissing { name: String },

    #[error("environment variable {name} is not valid Unicode")]
    EnvNotUnicode { name: String },

    #[error("failed to read passphrase file {path}: {message}")]
    FileUnreadable { path: String, message: String },
}

/// Result type alias using CheckerError
pub type Result<T> = std::result::Result<T, CheckerError>;
