use serde::Serialize;

use super::format::millis;
use crate::error::{AppError, AppResult, ReportError};
use crate::probe::{HostStats, RunReport};

#[derive(Debug, Serialize)]
struct HostRecord<'report> {
    host: &'report str,
    success: u64,
    failed: u64,
    errors: u64,
    min_ms: Option<u64>,
    max_ms: Option<u64>,
    avg_ms: Option<u64>,
}

impl<'report> From<&'report HostStats> for HostRecord<'report> {
    fn from(stats: &'report HostStats) -> Self {
        Self {
            host: &stats.host,
            success: stats.success,
            failed: stats.failed,
            errors: stats.errors,
            min_ms: millis(stats.min),
            max_ms: millis(stats.max),
            avg_ms: millis(stats.avg),
        }
    }
}

/// Renders the report as a pretty-printed JSON array, one object per host,
/// latencies in milliseconds and `null` when absent.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(report: &RunReport) -> AppResult<String> {
    if report.is_empty() {
        return Ok(String::new());
    }
    let records: Vec<HostRecord<'_>> = report.hosts().iter().map(HostRecord::from).collect();
    let mut rendered = serde_json::to_string_pretty(&records)
        .map_err(|err| AppError::report(ReportError::Serialize { source: err }))?;
    rendered.push('\n');
    Ok(rendered)
}
