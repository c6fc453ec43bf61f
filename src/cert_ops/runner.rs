//! Runner for a full check invocation
//!
//! Resolves settings and the passphrase, inspects every path in order and
//! reduces the results to a single process exit code.

use crate::cert_ops::inspector::Inspector;
use crate::cli::Cli;
use crate::config::{self, Settings};
use crate::models::{aggregate_exit_code, CheckResult};
use crate::output;
use crate::utils::{CheckerError, PassphraseError};
use std::env::VarError;
use std::path::Path;
use tracing::{debug, warn};

/// Where the PKCS#12 passphrase comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassphraseSource<'a> {
    File(&'a Path),
    Env(&'a str),
}

impl<'a> PassphraseSource<'a> {
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        if let Some(path) = &cli.passphrase_file {
            Some(PassphraseSource::File(path))
        } else {
            cli.passphrase_env
                .as_deref()
                .map(PassphraseSource::Env)
        }
    }

    /// Read the passphrase, stripping one trailing line ending from files
    pub fn resolve(&self) -> Result<String, PassphraseError> {
        match self {
            PassphraseSource::File(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|e| PassphraseError::FileUnreadable {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    })?;
                let trimmed = content
                    .strip_suffix('\n')
                    .map(|s| s.strip_suffix('\r').unwrap_or(s))
                    .unwrap_or(&content);
                Ok(trimmed.to_string())
            }
            PassphraseSource::Env(name) => std::env::var(name).map_err(|e| match e {
                VarError::NotPresent => PassphraseError::EnvMissing {
                    name: name.to_string(),
                },
                VarError::NotUnicode(_) => PassphraseError::EnvNotUnicode {
                    name: name.to_string(),
                },
            }),
        }
    }
}

/// Settings with CLI overrides applied
pub fn effective_settings(cli: &Cli) -> Result<Settings, CheckerError> {
    let mut settings = config::load_config(cli.config.as_deref())?;
    if let Some(days) = cli.warn_days {
        settings.warn_days = i64::from(days);
        settings.validate()?;
    }
    Ok(settings)
}

/// Inspect each path in order; one bad file never stops the rest
pub fn check_paths(
    inspector: &Inspector,
    paths: &[impl AsRef<Path>],
    passphrase: Option<&str>,
    all_certs: bool,
) -> Vec<CheckResult> {
    let mut results = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        let checked = if all_certs {
            inspector.inspect_all(path, passphrase)
        } else {
            vec![inspector.inspect(path, passphrase)]
        };

        for result in &checked {
            if let Some(cause) = result.cause() {
                warn!(path = %path.display(), kind = cause.kind(), "{}", cause);
            }
        }
        results.extend(checked);
    }

    results
}

/// Resolve the passphrase named on the command line, if any
pub fn resolve_passphrase(cli: &Cli) -> Result<Option<String>, CheckerError> {
    PassphraseSource::from_cli(cli)
        .map(|source| source.resolve())
        .transpose()
        .map_err(CheckerError::from)
}

/// Run a full invocation, returning the process exit code
pub fn run(cli: &Cli) -> Result<i32, anyhow::Error> {
    let settings = effective_settings(cli)?;
    let passphrase = resolve_passphrase(cli)?;

    let inspector = Inspector::new(settings.warn_threshold());
    debug!(
        now = %inspector.now(),
        threshold_secs = inspector.threshold().num_seconds(),
        "starting checks"
    );

    let results = check_paths(&inspector, &cli.paths, passphrase.as_deref(), cli.all);

    if cli.json {
        output::print_json(&results)?;
    } else {
        output::print_results(&results, cli.verbose, cli.quiet);
    }

    Ok(aggregate_exit_code(&results, &settings.exit_codes))
}
