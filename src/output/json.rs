//! JSON output formatter

use crate::models::{CheckResult, DetectedFormat};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON-serializable view of one check
#[derive(Debug, Serialize)]
pub struct JsonCheck {
    pub path: String,
    pub index: usize,
    pub format: Option<DetectedFormat>,
    pub status: &'static str,
    pub seconds_remaining: Option<i64>,
    pub not_after: Option<DateTime<Utc>>,
    pub subject: Option<String>,
    pub issuer: Option<String>,
    pub fingerprint: Option<String>,
    pub error_kind: Option<&'static str>,
    pub error: Option<String>,
}

impl From<&CheckResult> for JsonCheck {
    fn from(result: &CheckResult) -> Self {
        let record = result.record.as_ref();
        let cause = result.cause();
        Self {
            path: result.path.display().to_string(),
            index: result.index,
            format: record.map(|r| r.format),
            status: result.status.label(),
            seconds_remaining: result.seconds_remaining,
            not_after: record.map(|r| r.not_after),
            subject: record.and_then(|r| r.subject.clone()),
            issuer: record.and_then(|r| r.issuer.clone()),
            fingerprint: record.map(|r| r.fingerprint.clone()),
            error_kind: cause.map(|c| c.kind()),
            error: cause.map(|c| c.to_string()),
        }
    }
}

/// Render results as a pretty JSON array
pub fn to_json(results: &[CheckResult]) -> serde_json::Result<String> {
    let checks: Vec<JsonCheck> = results.iter().map(JsonCheck::from).collect();
    serde_json::to_string_pretty(&checks)
}

/// Print results as JSON to stdout
pub fn print_json(results: &[CheckResult]) -> anyhow::Result<()> {
    println!("{}", to_json(results)?);
    Ok(())
}
