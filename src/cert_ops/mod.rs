//! Certificate file operations module
//!
//! Reads PEM, DER, and PKCS#12 certificate files and judges their expiry.

pub mod inspector;
pub mod parser;
pub mod reader;
pub mod runner;

pub use inspector::{inspect, Inspector};
pub use reader::{
    decoder_for, detect_format, detect_format_from_bytes, read_certificates, CertificateDecoder,
    DerDecoder, PemDecoder, Pkcs12Decoder,
};
pub use runner::{check_paths, effective_settings, resolve_passphrase, run, PassphraseSource};
