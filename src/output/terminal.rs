//! Terminal output formatting
//!
//! One line per checked certificate:
//! `<path>: <STATUS> (<N days M hours remaining|overdue>)`

use crate::models::{CheckResult, CheckStatus};
use console::{style, StyledObject};

const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;

/// Human-readable remaining (or overdue) lifetime
pub fn describe_remaining(seconds_remaining: i64) -> String {
    let abs = seconds_remaining.unsigned_abs() as i64;
    let days = abs / SECONDS_PER_DAY;
    let hours = (abs % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let direction = if seconds_remaining > 0 { "remaining" } else { "overdue" };

    format!(
        "{} {} {} {} {}",
        days,
        plural(days, "day"),
        hours,
        plural(hours, "hour"),
        direction
    )
}

fn plural(n: i64, word: &str) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

fn styled_status(status: &CheckStatus) -> StyledObject<&'static str> {
    let label = status.label();
    match status {
        CheckStatus::Ok => style(label).green(),
        CheckStatus::Warning => style(label).yellow().bold(),
        CheckStatus::Expired => style(label).red().bold(),
        CheckStatus::Unreadable(_) => style(label).red(),
    }
}

/// Format the status line for a single result
pub fn format_result_line(result: &CheckResult) -> String {
    let detail = match (&result.status, result.seconds_remaining) {
        (CheckStatus::Unreadable(cause), _) => cause.to_string(),
        (_, Some(seconds)) => describe_remaining(seconds),
        (_, None) => String::new(),
    };

    format!(
        "{}: {} ({})",
        result.label(),
        styled_status(&result.status),
        detail
    )
}

/// Extra lines shown under a result in verbose mode
pub fn format_details(result: &CheckResult) -> Vec<String> {
    let Some(record) = &result.record else {
        return Vec::new();
    };

    let pairs = [
        ("Format", record.format.to_string()),
        ("Subject", record.subject.clone().unwrap_or_else(|| "-".to_string())),
        ("Issuer", record.issuer.clone().unwrap_or_else(|| "-".to_string())),
        ("Serial", record.serial.clone()),
        (
            "Valid From",
            record.not_before.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        ),
        (
            "Valid Until",
            record.not_after.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        ),
        ("SHA-256", record.fingerprint.clone()),
    ];

    let max_key_len = pairs.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    pairs
        .iter()
        .map(|(key, value)| {
            let dots = ".".repeat(max_key_len.saturating_sub(key.len()) + 2);
            format!("    {} {} {}", style(key).dim(), style(dots).dim(), value)
        })
        .collect()
}

/// Print all results to stdout
pub fn print_results(results: &[CheckResult], verbose: bool, quiet: bool) {
    for result in results {
        if quiet && result.status.is_ok() {
            continue;
        }
        println!("{}", format_result_line(result));
        if verbose {
            for line in format_details(result) {
                println!("{}", line);
            }
        }
    }
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), message);
}
