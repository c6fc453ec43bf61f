//! CLI argument definitions using clap

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hh-ssl-cert-check")]
#[command(author = "Nikita Kovaliov")]
#[command(version)]
#[command(about = "Check SSL certificate files (PEM, DER, PKCS#12) for expiry", long_about = None)]
#[command(group(ArgGroup::new("passphrase").args(["passphrase_file", "passphrase_env"])))]
pub struct Cli {
    /// Certificate files to check
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Warn when a certificate expires within this many days
    /// (overrides the config file)
    #[arg(short = 'w', long, value_name = "N")]
    pub warn_days: Option<u32>,

    /// Read the PKCS#12 passphrase from a file
    #[arg(long, value_name = "FILE")]
    pub passphrase_file: Option<PathBuf>,

    /// Read the PKCS#12 passphrase from an environment variable
    #[arg(long, value_name = "VAR")]
    pub passphrase_env: Option<String>,

    /// Check every certificate in each file, not only the leaf
    #[arg(short, long)]
    pub all: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Show certificate details under each line
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print certificates that are not OK
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to a TOML config file (default: config/default.toml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
