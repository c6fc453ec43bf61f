//! Check result types and expiry classification

use super::CertificateRecord;
use crate::config::ExitCodes;
use crate::utils::InspectError;
use chrono::Duration;
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of checking one certificate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Expired,
    Unreadable(InspectError),
}

impl CheckStatus {
    /// Upper-case label used in report lines
    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Warning => "WARNING",
            CheckStatus::Expired => "EXPIRED",
            CheckStatus::Unreadable(_) => "UNREADABLE",
        }
    }

    pub fn exit_code(&self, codes: &ExitCodes) -> i32 {
        match self {
            CheckStatus::Ok => codes.ok,
            CheckStatus::Warning => codes.warning,
            CheckStatus::Expired => codes.expired,
            CheckStatus::Unreadable(_) => codes.unreadable,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Ok)
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify remaining lifetime against the warning threshold.
///
/// Zero or fewer seconds left is EXPIRED; anything up to and including the
/// threshold is WARNING.
pub fn classify(seconds_remaining: i64, threshold: Duration) -> CheckStatus {
    if seconds_remaining <= 0 {
        CheckStatus::Expired
    } else if seconds_remaining <= threshold.num_seconds() {
        CheckStatus::Warning
    } else {
        CheckStatus::Ok
    }
}

/// Result of checking a single certificate (or a file that failed to load)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub path: PathBuf,
    /// Position of the certificate inside the file (0 = leaf)
    pub index: usize,
    pub record: Option<CertificateRecord>,
    pub seconds_remaining: Option<i64>,
    pub status: CheckStatus,
}

impl CheckResult {
    /// Result for a certificate that was parsed and classified
    pub fn evaluated(record: CertificateRecord, seconds_remaining: i64, threshold: Duration) -> Self {
        Self {
            path: record.path.clone(),
            index: record.index,
            status: classify(seconds_remaining, threshold),
            seconds_remaining: Some(seconds_remaining),
            record: Some(record),
        }
    }

    /// Result for a file that could not be evaluated
    pub fn unreadable(path: impl Into<PathBuf>, cause: InspectError) -> Self {
        Self {
            path: path.into(),
            index: 0,
            record: None,
            seconds_remaining: None,
            status: CheckStatus::Unreadable(cause),
        }
    }

    /// Attribute the result to a certificate other than the leaf
    pub fn at_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// The failure cause, if the file was unreadable
    pub fn cause(&self) -> Option<&InspectError> {
        match &self.status {
            CheckStatus::Unreadable(cause) => Some(cause),
            _ => None,
        }
    }

    /// Path as shown in reports; non-leaf certificates get an index suffix
    pub fn label(&self) -> String {
        if self.index > 0 {
            format!("{}[{}]", display_path(&self.path), self.index)
        } else {
            display_path(&self.path)
        }
    }
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

/// Worst exit code across all results; `codes.ok` when there are none
pub fn aggregate_exit_code<'a>(
    results: impl IntoIterator<Item = &'a CheckResult>,
    codes: &ExitCodes,
) -> i32 {
    results
        .into_iter()
        .map(|r| r.status.exit_code(codes))
        .fold(codes.ok, i32::max)
}
