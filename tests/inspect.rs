//! Library-level tests for the certificate inspector

mod common;

use chrono::{Duration, TimeZone, Utc};
use common::{generate_cert, generate_cert_expiring_in, write_file, write_p12};
use hh_ssl_cert_check::cert_ops::{check_paths, Inspector};
use hh_ssl_cert_check::{CheckStatus, DetectedFormat, InspectError};

fn inspector_at_2024() -> Inspector {
    Inspector::at(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        Duration::days(30),
    )
}

#[test]
fn test_long_lived_pem_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let cert = generate_cert("test.example.com", 2099, 1, 1);
    let path = write_file(dir.path(), "test-cert.pem", &cert.pem);

    let inspector = inspector_at_2024();
    let result = inspector.inspect(&path, None);

    assert_eq!(result.status, CheckStatus::Ok);
    let record = result.record.as_ref().unwrap();
    assert_eq!(record.format, DetectedFormat::Pem);
    assert_eq!(record.index, 0);
    assert_eq!(record.common_name(), Some("test.example.com"));
    assert_eq!(
        record.not_after,
        Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(
        result.seconds_remaining,
        Some((record.not_after - inspector.now()).num_seconds())
    );
}

#[test]
fn test_seconds_remaining_against_wall_clock() {
    let dir = tempfile::tempdir().unwrap();
    let cert = generate_cert("clock.example.com", 2099, 1, 1);
    let path = write_file(dir.path(), "clock.pem", &cert.pem);

    let expected = (Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap() - Utc::now()).num_seconds();
    let result = hh_ssl_cert_check::inspect(&path, None, Duration::days(30));

    let actual = result.seconds_remaining.unwrap();
    assert!((expected - actual).abs() <= 5, "expected ~{}, got {}", expected, actual);
}

#[test]
fn test_past_certificate_is_expired() {
    let dir = tempfile::tempdir().unwrap();
    let cert = generate_cert("old.example.com", 2020, 1, 1);
    let path = write_file(dir.path(), "old.pem", &cert.pem);

    let result = inspector_at_2024().inspect(&path, None);

    assert_eq!(result.status, CheckStatus::Expired);
    assert!(result.seconds_remaining.unwrap() < 0);
}

#[test]
fn test_warning_threshold_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let cert = generate_cert("edge.example.com", 2099, 1, 1);
    let path = write_file(dir.path(), "edge.pem", &cert.pem);
    let not_after = Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap();
    let threshold = Duration::days(30);

    let at_threshold = Inspector::at(not_after - threshold, threshold).inspect(&path, None);
    assert_eq!(at_threshold.status, CheckStatus::Warning);
    assert_eq!(at_threshold.seconds_remaining, Some(threshold.num_seconds()));

    let just_outside = Inspector::at(not_after - threshold - Duration::seconds(1), threshold)
        .inspect(&path, None);
    assert_eq!(just_outside.status, CheckStatus::Ok);

    let at_expiry = Inspector::at(not_after, threshold).inspect(&path, None);
    assert_eq!(at_expiry.status, CheckStatus::Expired);
}

#[test]
fn test_soon_expiring_is_warning() {
    let dir = tempfile::tempdir().unwrap();
    let cert = generate_cert_expiring_in("soon.example.com", 10);
    let path = write_file(dir.path(), "soon.pem", &cert.pem);

    let result = Inspector::new(Duration::days(30)).inspect(&path, None);
    assert_eq!(result.status, CheckStatus::Warning);
}

#[test]
fn test_der_file() {
    let dir = tempfile::tempdir().unwrap();
    let cert = generate_cert("der.example.com", 2099, 1, 1);
    let path = write_file(dir.path(), "test-cert.der", &cert.der);

    let result = inspector_at_2024().inspect(&path, None);

    assert_eq!(result.status, CheckStatus::Ok);
    assert_eq!(result.record.unwrap().format, DetectedFormat::Der);
}

#[test]
fn test_pkcs12_with_correct_passphrase() {
    let dir = tempfile::tempdir().unwrap();
    let cert = generate_cert("p12.example.com", 2099, 1, 1);
    let path = write_p12(dir.path(), "store.p12", &cert, "correct horse");

    let result = inspector_at_2024().inspect(&path, Some("correct horse"));

    assert_eq!(result.status, CheckStatus::Ok);
    let record = result.record.unwrap();
    assert_eq!(record.format, DetectedFormat::Pkcs12);
    assert_eq!(record.common_name(), Some("p12.example.com"));
}

#[test]
fn test_pkcs12_with_wrong_passphrase_is_decryption_failure() {
    let dir = tempfile::tempdir().unwrap();
    let cert = generate_cert("p12.example.com", 2099, 1, 1);
    let path = write_p12(dir.path(), "store.p12", &cert, "correct horse");

    let result = inspector_at_2024().inspect(&path, Some("battery staple"));

    assert!(
        matches!(
            result.status,
            CheckStatus::Unreadable(InspectError::DecryptionFailed { .. })
        ),
        "unexpected status: {:?}",
        result.status
    );
    assert!(result.record.is_none());
}

#[test]
fn test_pkcs12_without_passphrase_needs_one() {
    let dir = tempfile::tempdir().unwrap();
    let cert = generate_cert("p12.example.com", 2099, 1, 1);
    let path = write_p12(dir.path(), "store.pfx", &cert, "correct horse");

    let result = inspector_at_2024().inspect(&path, None);
    assert_eq!(result.cause().map(|c| c.kind()), Some("DecryptionFailed"));
}

#[test]
fn test_missing_file_does_not_stop_other_paths() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_file(
        dir.path(),
        "good.pem",
        generate_cert("good.example.com", 2099, 1, 1).pem,
    );
    let missing = dir.path().join("missing.pem");
    let expired = write_file(
        dir.path(),
        "expired.pem",
        generate_cert("expired.example.com", 2020, 1, 1).pem,
    );

    let results = check_paths(&inspector_at_2024(), &[&missing, &good, &expired], None, false);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].cause().map(|c| c.kind()), Some("FileNotFound"));
    assert_eq!(results[1].status, CheckStatus::Ok);
    assert_eq!(results[2].status, CheckStatus::Expired);
}

#[test]
fn test_unsupported_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "notes.txt", "this is not a certificate");

    let result = inspector_at_2024().inspect(&path, None);
    assert_eq!(result.cause().map(|c| c.kind()), Some("UnsupportedFormat"));
}

#[test]
fn test_corrupt_pem_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "broken.pem",
        "-----BEGIN CERTIFICATE-----\nTm90IGEgY2VydGlmaWNhdGU=\n-----END CERTIFICATE-----\n",
    );

    let result = inspector_at_2024().inspect(&path, None);
    assert_eq!(result.cause().map(|c| c.kind()), Some("MalformedCertificate"));
}

#[test]
fn test_bundle_leaf_and_all() {
    let dir = tempfile::tempdir().unwrap();
    let leaf = generate_cert("leaf.example.com", 2099, 1, 1);
    let old = generate_cert("old-ca.example.com", 2020, 1, 1);
    let path = write_file(dir.path(), "bundle.pem", format!("{}{}", leaf.pem, old.pem));
    let inspector = inspector_at_2024();

    let leaf_result = inspector.inspect(&path, None);
    assert_eq!(leaf_result.status, CheckStatus::Ok);
    assert_eq!(leaf_result.label(), path.display().to_string());

    let all = inspector.inspect_all(&path, None);
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].status, CheckStatus::Ok);
    assert_eq!(all[1].status, CheckStatus::Expired);
    assert_eq!(all[1].label(), format!("{}[1]", path.display()));
}

#[test]
fn test_all_keeps_leaf_when_later_block_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let leaf = generate_cert("old-leaf.example.com", 2020, 1, 1);
    let bundle = format!(
        "{}-----BEGIN CERTIFICATE-----\nTm90IGEgY2VydGlmaWNhdGU=\n-----END CERTIFICATE-----\n",
        leaf.pem
    );
    let path = write_file(dir.path(), "bundle.pem", bundle);

    let all = inspector_at_2024().inspect_all(&path, None);

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].status, CheckStatus::Expired);
    assert_eq!(all[0].index, 0);
    assert_eq!(all[1].cause().map(|c| c.kind()), Some("MalformedCertificate"));
    assert_eq!(all[1].index, 1);
    assert_eq!(all[1].label(), format!("{}[1]", path.display()));
}

#[test]
fn test_pem_with_non_utf8_preamble() {
    let dir = tempfile::tempdir().unwrap();
    let cert = generate_cert("legacy.example.com", 2099, 1, 1);
    let mut data = b"Bag Attributes: \xff\xfe\n".to_vec();
    data.extend_from_slice(cert.pem.as_bytes());
    let path = write_file(dir.path(), "legacy.pem", data);

    let result = inspector_at_2024().inspect(&path, None);

    assert_eq!(result.status, CheckStatus::Ok);
    assert_eq!(result.record.unwrap().format, DetectedFormat::Pem);
}
