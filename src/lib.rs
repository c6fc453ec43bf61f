//! hh-ssl-cert-check library
//!
//! Checks certificate files for expiry:
//! - PEM, DER and PKCS#12 (optionally passphrase-protected) inputs
//! - OK / WARNING / EXPIRED / UNREADABLE classification against a threshold
//! - Worst-case exit status across many files
//!
//! # Usage
//!
//! ```rust,no_run
//! use chrono::Duration;
//! use hh_ssl_cert_check::cert_ops::Inspector;
//! use std::path::Path;
//!
//! let inspector = Inspector::new(Duration::days(30));
//! let result = inspector.inspect(Path::new("/etc/ssl/certs/site.pem"), None);
//! println!("{}: {}", result.label(), result.status);
//! ```

pub mod cert_ops;
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod utils;

// Re-export commonly used types
pub use cert_ops::{inspect, Inspector};
pub use cli::Cli;
pub use config::{ExitCodes, Settings};
pub use models::{CertificateRecord, CheckResult, CheckStatus, DetectedFormat};
pub use utils::{CheckerError, InspectError, Result};
