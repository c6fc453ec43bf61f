//! Certificate Inspector
//!
//! Loads one certificate file and classifies its expiry. Every failure is
//! turned into an `UNREADABLE` result; nothing here returns an error.

use crate::cert_ops::{parser, reader};
use crate::models::{CertificateRecord, CheckResult, DetectedFormat};
use crate::utils::InspectError;
use chrono::{DateTime, Duration, Utc};
use std::path::Path;
use tracing::debug;

/// Judges certificate files against a single instant and threshold
#[derive(Debug, Clone, Copy)]
pub struct Inspector {
    now: DateTime<Utc>,
    threshold: Duration,
}

impl Inspector {
    /// Create an inspector that samples the wall clock once, now
    pub fn new(threshold: Duration) -> Self {
        Self::at(Utc::now(), threshold)
    }

    /// Create an inspector pinned to a given instant
    pub fn at(now: DateTime<Utc>, threshold: Duration) -> Self {
        Self { now, threshold }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    /// Check the leaf (first) certificate of a file
    pub fn inspect(&self, path: &Path, passphrase: Option<&str>) -> CheckResult {
        let (format, certs) = match reader::read_certificates(path, passphrase) {
            Ok(decoded) => decoded,
            Err(cause) => return CheckResult::unreadable(path, cause),
        };

        match certs.first() {
            Some(leaf) => self.check_one(path, 0, leaf, format),
            None => CheckResult::unreadable(path, InspectError::malformed("no certificates found")),
        }
    }

    /// Check every certificate in a file, in container order.
    ///
    /// A file that cannot be decoded yields a single result; after that each
    /// certificate is classified on its own.
    pub fn inspect_all(&self, path: &Path, passphrase: Option<&str>) -> Vec<CheckResult> {
        match reader::read_certificates(path, passphrase) {
            Ok((format, certs)) => certs
                .iter()
                .enumerate()
                .map(|(index, der)| self.check_one(path, index, der, format))
                .collect(),
            Err(cause) => vec![CheckResult::unreadable(path, cause)],
        }
    }

    fn check_one(&self, path: &Path, index: usize, der: &[u8], format: DetectedFormat) -> CheckResult {
        match parser::parse_record(der, path, index, format) {
            Ok(record) => self.evaluate(record),
            Err(cause) => CheckResult::unreadable(path, cause).at_index(index),
        }
    }

    fn evaluate(&self, record: CertificateRecord) -> CheckResult {
        let seconds_remaining = record.seconds_remaining(self.now);
        debug!(
            path = %record.path.display(),
            index = record.index,
            seconds_remaining,
            "evaluated certificate"
        );
        CheckResult::evaluated(record, seconds_remaining, self.threshold)
    }
}

/// Check one file with a freshly sampled clock
pub fn inspect(path: &Path, passphrase: Option<&str>, threshold: Duration) -> CheckResult {
    Inspector::new(threshold).inspect(path, passphrase)
}
