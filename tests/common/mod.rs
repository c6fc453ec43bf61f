//! Shared fixtures: certificates are generated per test run

#![allow(dead_code)]

use chrono::{Datelike, Duration, Utc};
use rcgen::{date_time_ymd, CertificateParams, DnType, KeyPair};
use std::path::{Path, PathBuf};

/// A generated certificate with its private key
pub struct TestCert {
    pub pem: String,
    pub der: Vec<u8>,
    pub key_der: Vec<u8>,
}

/// Self-signed certificate for `cn` valid until the given date (00:00 UTC)
pub fn generate_cert(cn: &str, year: i32, month: u8, day: u8) -> TestCert {
    let mut params = CertificateParams::new(vec![cn.to_string()]).unwrap();
    params.distinguished_name.push(DnType::CommonName, cn);
    params.not_before = date_time_ymd(2015, 1, 1);
    params.not_after = date_time_ymd(year, month, day);

    let key_pair = KeyPair::generate().unwrap();
    let cert = params.self_signed(&key_pair).unwrap();

    TestCert {
        pem: cert.pem(),
        der: cert.der().to_vec(),
        key_der: key_pair.serialize_der(),
    }
}

/// Certificate expiring `days` days from today (at midnight UTC)
pub fn generate_cert_expiring_in(cn: &str, days: i64) -> TestCert {
    let date = (Utc::now() + Duration::days(days)).date_naive();
    generate_cert(cn, date.year(), date.month() as u8, date.day() as u8)
}

pub fn write_file(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Write a PKCS#12 container holding `cert` and its key
pub fn write_p12(dir: &Path, name: &str, cert: &TestCert, password: &str) -> PathBuf {
    let p12_cert = p12_keystore::Certificate::from_der(&cert.der).unwrap();
    let local_key_id = {
        use sha2::Digest;
        sha2::Sha256::digest(&cert.der).to_vec()
    };
    let chain =
        p12_keystore::PrivateKeyChain::new(cert.key_der.clone(), &local_key_id, vec![p12_cert]);

    let mut keystore = p12_keystore::KeyStore::new();
    keystore.add_entry("cert", p12_keystore::KeyStoreEntry::PrivateKeyChain(chain));
    let data = keystore.writer(password).write().unwrap();

    write_file(dir, name, data)
}
