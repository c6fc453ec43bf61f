//! hh-ssl-cert-check - check SSL certificate files for expiry

use clap::Parser;
use hh_ssl_cert_check::cert_ops;
use hh_ssl_cert_check::output::print_error;
use hh_ssl_cert_check::Cli;
use tracing_subscriber::EnvFilter;

/// Exit code for errors that stop the run before any file is checked
const FATAL_EXIT_CODE: i32 = 2;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Handle color preference
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    match cert_ops::run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            print_error(&format!("{:#}", e));
            std::process::exit(FATAL_EXIT_CODE);
        }
    }
}
