//! Certificate record types

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Container format of a certificate file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DetectedFormat {
    Pem,
    Der,
    Pkcs12,
}

impl fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectedFormat::Pem => write!(f, "PEM"),
            DetectedFormat::Der => write!(f, "DER"),
            DetectedFormat::Pkcs12 => write!(f, "PKCS#12"),
        }
    }
}

/// The fields of one certificate needed to judge its expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRecord {
    /// File the certificate was read from
    pub path: PathBuf,
    /// Position inside the file (0 = leaf)
    pub index: usize,
    /// Container format of the file
    pub format: DetectedFormat,
    /// Subject distinguished name
    pub subject: Option<String>,
    /// Issuer distinguished name
    pub issuer: Option<String>,
    /// Serial number (colon-separated hex)
    pub serial: String,
    /// SHA-256 fingerprint of the DER encoding
    pub fingerprint: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
}

impl CertificateRecord {
    /// Seconds between `now` and notAfter, negative once expired
    pub fn seconds_remaining(&self, now: DateTime<Utc>) -> i64 {
        self.not_after.signed_duration_since(now).num_seconds()
    }

    /// Common name from the subject, if there is one
    pub fn common_name(&self) -> Option<&str> {
        self.subject.as_deref().and_then(extract_cn)
    }
}

/// Extract common name from a distinguished name string
fn extract_cn(dn: &str) -> Option<&str> {
    // DN format: "CN=example.com, O=Example Inc, ..."
    dn.split(',')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("CN="))
}
