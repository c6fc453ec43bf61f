//! X.509 parsing into [`CertificateRecord`]

use crate::models::{CertificateRecord, DetectedFormat};
use crate::utils::InspectError;
use chrono::{DateTime, Utc};
use sha2::Digest;
use std::path::Path;
use x509_parser::prelude::*;

/// Parse a single DER-encoded certificate
pub fn parse_record(
    der: &[u8],
    path: &Path,
    index: usize,
    format: DetectedFormat,
) -> Result<CertificateRecord, InspectError> {
    let (_, cert) = X509Certificate::from_der(der)
        .map_err(|e| InspectError::malformed(format!("failed to parse certificate: {}", e)))?;

    let not_after =
        asn1_time_to_datetime(cert.validity().not_after).ok_or(InspectError::MissingExpiryField)?;
    let not_before = asn1_time_to_datetime(cert.validity().not_before)
        .ok_or_else(|| InspectError::malformed("invalid notBefore timestamp"))?;

    Ok(CertificateRecord {
        path: path.to_path_buf(),
        index,
        format,
        subject: non_empty(cert.subject().to_string()),
        issuer: non_empty(cert.issuer().to_string()),
        serial: colon_hex(&cert.serial.to_bytes_be()),
        fingerprint: colon_hex(&sha2::Sha256::digest(der)),
        not_before,
        not_after,
    })
}

/// Convert ASN.1 time to chrono DateTime
fn asn1_time_to_datetime(time: ASN1Time) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(time.timestamp(), 0)
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn colon_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(":")
}
