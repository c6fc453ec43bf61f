//! Data models for hh-ssl-cert-check

pub mod certificate;
pub mod check_result;

pub use certificate::{CertificateRecord, DetectedFormat};
pub use check_result::{aggregate_exit_code, classify, CheckResult, CheckStatus};
