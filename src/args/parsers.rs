use std::path::Path;
use std::time::Duration;

use url::Url;

use super::types::{HostList, PositiveU64};
use crate::error::{AppError, AppResult, ValidationError};

const SUPPORTED_SCHEMES: [&str; 2] = ["http", "https"];

/// Checks that `value` is an absolute http(s) URL with a network location.
///
/// # Errors
///
/// Returns an error when the value is not a URL, uses another scheme, or has
/// no host.
pub fn validate_host(value: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(value).map_err(|err| ValidationError::InvalidHost {
        value: value.to_owned(),
        source: err,
    })?;

    let scheme = parsed.scheme();
    if !SUPPORTED_SCHEMES.contains(&scheme) {
        return Err(ValidationError::UnsupportedScheme {
            value: value.to_owned(),
            scheme: scheme.to_owned(),
        });
    }

    // The url crate accepts `http:example.com` for special schemes; require
    // the authority to be spelled out.
    // the url crate also repairs `http:///example.com` into a valid authority
    let has_authority = value
        .get(scheme.len()..)
        .and_then(|rest| rest.strip_prefix("://"))
        .is_some_and(|authority| !authority.is_empty() && !authority.starts_with(['/', '\\']));
    if !has_authority || parsed.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::MissingNetworkLocation {
            value: value.to_owned(),
        });
    }

    Ok(())
}

pub(crate) fn validate_hosts<I>(hosts: I) -> Result<HostList, ValidationError>
where
    I: IntoIterator<Item = String>,
{
    let mut validated = Vec::new();
    for host in hosts {
        validate_host(&host)?;
        validated.push(host);
    }
    Ok(HostList::new(validated))
}

/// Parses a comma-separated host list, trimming whitespace around entries.
///
/// # Errors
///
/// Returns an error for the first entry that is not a valid host.
pub fn parse_hosts(s: &str) -> Result<HostList, ValidationError> {
    validate_hosts(s.split(',').map(|host| host.trim().to_owned()))
}

/// Reads hosts from a file, one per line. Blank lines are skipped, so an
/// empty file yields an empty list.
///
/// # Errors
///
/// Returns an error when the file cannot be read or a line is not a valid host.
pub fn read_host_file(path: &str) -> Result<HostList, ValidationError> {
    let content =
        std::fs::read_to_string(path).map_err(|err| ValidationError::ReadHostFile {
            path: Path::new(path).to_path_buf(),
            source: err,
        })?;
    validate_hosts(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned),
    )
}

pub(super) fn parse_positive_u64(s: &str) -> AppResult<PositiveU64> {
    s.parse::<PositiveU64>().map_err(AppError::from)
}

pub(crate) fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    let value = s.trim();
    if value.is_empty() {
        return Err(AppError::validation(ValidationError::DurationEmpty));
    }

    let mut digits_len = 0usize;
    for ch in value.chars() {
        if ch.is_ascii_digit() {
            digits_len = digits_len.saturating_add(1);
        } else {
            break;
        }
    }
    if digits_len == 0 {
        return Err(AppError::validation(
            ValidationError::InvalidDurationFormat {
                value: value.to_owned(),
            },
        ));
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part.parse().map_err(|err| {
        AppError::validation(ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })
    })?;

    let unit = if unit_part.is_empty() { "s" } else { unit_part };
    let duration = match unit {
        "ms" => Duration::from_millis(number),
        "s" => Duration::from_secs(number),
        "m" => {
            let secs = number
                .checked_mul(60)
                .ok_or_else(|| AppError::validation(ValidationError::DurationOverflow))?;
            Duration::from_secs(secs)
        }
        "h" => {
            let secs = number
                .checked_mul(60)
                .and_then(|seconds| seconds.checked_mul(60))
                .ok_or_else(|| AppError::validation(ValidationError::DurationOverflow))?;
            Duration::from_secs(secs)
        }
        _ => {
            return Err(AppError::validation(ValidationError::InvalidDurationUnit {
                unit: unit.to_owned(),
            }));
        }
    };

    if duration.as_millis() == 0 {
        return Err(AppError::validation(ValidationError::DurationZero));
    }

    Ok(duration)
}
