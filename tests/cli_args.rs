use clap::Parser;
use hh_ssl_cert_check::cli::Cli;
use std::path::PathBuf;

#[test]
fn test_paths_and_defaults() {
    let cli = Cli::try_parse_from(["hh-ssl-cert-check", "a.pem", "b.p12"]).unwrap();
    assert_eq!(cli.paths, vec![PathBuf::from("a.pem"), PathBuf::from("b.p12")]);
    assert_eq!(cli.warn_days, None);
    assert!(!cli.all);
    assert!(!cli.json);
    assert_eq!(cli.passphrase_file, None);
    assert_eq!(cli.passphrase_env, None);
}

#[test]
fn test_path_required() {
    assert!(Cli::try_parse_from(["hh-ssl-cert-check"]).is_err());
}

#[test]
fn test_warn_days() {
    let cli = Cli::try_parse_from(["hh-ssl-cert-check", "--warn-days", "14", "a.pem"]).unwrap();
    assert_eq!(cli.warn_days, Some(14));
    assert!(Cli::try_parse_from(["hh-ssl-cert-check", "--warn-days", "-3", "a.pem"]).is_err());
}

#[test]
fn test_passphrase_sources_are_exclusive() {
    let result = Cli::try_parse_from([
        "hh-ssl-cert-check",
        "a.p12",
        "--passphrase-file",
        "pass.txt",
        "--passphrase-env",
        "P12_PASS",
    ]);
    assert!(result.is_err());

    let cli = Cli::try_parse_from(["hh-ssl-cert-check", "a.p12", "--passphrase-file", "pass.txt"])
        .unwrap();
    assert_eq!(cli.passphrase_file, Some(PathBuf::from("pass.txt")));
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["hh-ssl-cert-check", "-q", "-v", "a.pem"]).is_err());
}
