use std::fmt::Write as _;
use std::time::Duration;

use crate::error::{AppError, AppResult, ReportError};

const MILLIS_PER_SECOND: u128 = 1_000;

pub(super) fn write_line(output: &mut String, line: &str) -> AppResult<()> {
    writeln!(output, "{}", line)
        .map_err(|err| AppError::report(ReportError::WriteLine { source: err }))
}

/// Seconds with three decimals (`1.250`); absent values render empty.
pub(super) fn format_seconds(value: Option<Duration>) -> String {
    value.map_or_else(String::new, |duration| {
        let millis = duration.as_millis();
        let seconds = millis.checked_div(MILLIS_PER_SECOND).unwrap_or(0);
        let fraction = millis.checked_rem(MILLIS_PER_SECOND).unwrap_or(0);
        format!("{}.{:03}", seconds, fraction)
    })
}

pub(super) fn millis(value: Option<Duration>) -> Option<u64> {
    value.map(|duration| u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}
