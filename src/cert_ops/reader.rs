//! Certificate file reading and format detection
//!
//! Auto-detects PEM, DER, and PKCS#12 formats and extracts DER-encoded
//! certificates through a per-format [`CertificateDecoder`].

use crate::models::DetectedFormat;
use crate::utils::InspectError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;
use x509_parser::prelude::*;

/// Turns the raw bytes of a certificate container into DER certificates.
///
/// The leaf certificate, when the container knows which one it is, comes
/// first.
pub trait CertificateDecoder {
    fn format(&self) -> DetectedFormat;

    fn decode(&self, data: &[u8], passphrase: Option<&str>) -> Result<Vec<Vec<u8>>, InspectError>;
}

/// Decoder for `-----BEGIN CERTIFICATE-----` blocks
pub struct PemDecoder;

/// Decoder for a single binary X.509 certificate
pub struct DerDecoder;

/// Decoder for PKCS#12 (.p12 / .pfx) containers
pub struct Pkcs12Decoder;

impl CertificateDecoder for PemDecoder {
    fn format(&self) -> DetectedFormat {
        DetectedFormat::Pem
    }

    fn decode(&self, data: &[u8], _passphrase: Option<&str>) -> Result<Vec<Vec<u8>>, InspectError> {
        let pems = ::pem::parse_many(data)
            .map_err(|e| InspectError::malformed(format!("failed to parse PEM: {}", e)))?;

        let certs: Vec<Vec<u8>> = pems
            .into_iter()
            .filter(|p| p.tag() == "CERTIFICATE")
            .map(|p| p.into_contents())
            .collect();

        if certs.is_empty() {
            return Err(InspectError::malformed("no CERTIFICATE blocks found in PEM file"));
        }

        Ok(certs)
    }
}

impl CertificateDecoder for DerDecoder {
    fn format(&self) -> DetectedFormat {
        DetectedFormat::Der
    }

    fn decode(&self, data: &[u8], _passphrase: Option<&str>) -> Result<Vec<Vec<u8>>, InspectError> {
        X509Certificate::from_der(data)
            .map_err(|e| InspectError::malformed(format!("failed to parse DER certificate: {}", e)))?;

        Ok(vec![data.to_vec()])
    }
}

impl CertificateDecoder for Pkcs12Decoder {
    fn format(&self) -> DetectedFormat {
        DetectedFormat::Pkcs12
    }

    fn decode(&self, data: &[u8], passphrase: Option<&str>) -> Result<Vec<Vec<u8>>, InspectError> {
        let pwd = passphrase.unwrap_or("");

        let keystore = p12_keystore::KeyStore::from_pkcs12(data, pwd).map_err(|e| {
            InspectError::DecryptionFailed {
                message: if passphrase.is_some() {
                    e.to_string()
                } else {
                    format!("{} (no passphrase supplied)", e)
                },
            }
        })?;

        let mut chain_certs = Vec::new();
        let mut loose_certs = Vec::new();

        for (_alias, entry) in keystore.entries() {
            match entry {
                p12_keystore::KeyStoreEntry::PrivateKeyChain(chain) => {
                    for cert in chain.chain() {
                        chain_certs.push(cert.as_der().to_vec());
                    }
                }
                p12_keystore::KeyStoreEntry::Certificate(cert) => {
                    loose_certs.push(cert.as_der().to_vec());
                }
            }
        }

        // Certificates bound to a private key are the ones being served
        chain_certs.extend(loose_certs);

        if chain_certs.is_empty() {
            return Err(InspectError::malformed("no certificates found in PKCS#12 container"));
        }

        Ok(chain_certs)
    }
}

/// Pick the decoder for a detected format
pub fn decoder_for(format: DetectedFormat) -> &'static dyn CertificateDecoder {
    match format {
        DetectedFormat::Pem => &PemDecoder,
        DetectedFormat::Der => &DerDecoder,
        DetectedFormat::Pkcs12 => &Pkcs12Decoder,
    }
}

/// Detect the format of certificate data, using the file name as a hint
pub fn detect_format(data: &[u8], path: Option<&Path>) -> Result<DetectedFormat, InspectError> {
    // PEM markers; text around the blocks need not be UTF-8
    const PEM_MARKER: &[u8] = b"-----BEGIN ";
    if data.windows(PEM_MARKER.len()).any(|w| w == PEM_MARKER) {
        return Ok(DetectedFormat::Pem);
    }

    if path.is_some_and(has_pkcs12_extension) {
        return Ok(DetectedFormat::Pkcs12);
    }

    // Check for PKCS#12 magic: ASN.1 SEQUENCE containing pkcs7-data OID
    if data.len() > 4 && data[0] == 0x30 && is_likely_pkcs12(data) {
        return Ok(DetectedFormat::Pkcs12);
    }

    if X509Certificate::from_der(data).is_ok() {
        return Ok(DetectedFormat::Der);
    }

    Err(InspectError::UnsupportedFormat {
        detail: "could not detect PEM, DER, or PKCS#12 content".to_string(),
    })
}

/// Detect format from raw bytes alone
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DetectedFormat, InspectError> {
    detect_format(data, None)
}

fn has_pkcs12_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("p12") || ext.eq_ignore_ascii_case("pfx"))
}

/// Heuristic to distinguish PKCS#12 from plain DER certificate.
fn is_likely_pkcs12(data: &[u8]) -> bool {
    // Look for the pkcs7-data OID: 06 09 2a 86 48 86 f7 0d 01 07 01
    let pkcs7_data_oid: [u8; 11] = [
        0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x07, 0x01,
    ];
    let search_len = data.len().min(50);
    data[..search_len]
        .windows(pkcs7_data_oid.len())
        .any(|w| w == pkcs7_data_oid)
}

/// Read a certificate file from disk
pub fn read_file(path: &Path) -> Result<Vec<u8>, InspectError> {
    std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => InspectError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => InspectError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        },
    })
}

/// Read certificates from a file, returning the detected format and the
/// DER-encoded certificates in container order.
pub fn read_certificates(
    path: &Path,
    passphrase: Option<&str>,
) -> Result<(DetectedFormat, Vec<Vec<u8>>), InspectError> {
    let data = read_file(path)?;
    let format = detect_format(&data, Some(path))?;
    let decoder = decoder_for(format);

    debug!(path = %path.display(), %format, "decoding certificate file");
    let certs = decoder.decode(&data, passphrase)?;
    debug!(path = %path.display(), count = certs.len(), "decoded certificates");

    Ok((decoder.format(), certs))
}
