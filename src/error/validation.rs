use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid host '{value}': {source}")]
    InvalidHost {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Invalid host '{value}'. Scheme must be http or https, got '{scheme}'.")]
    UnsupportedScheme { value: String, scheme: String },
    #[error("Invalid host '{value}'. Network location must not be empty.")]
    MissingNetworkLocation { value: String },
    #[error("Failed to read host file '{path}': {source}")]
    ReadHostFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Missing hosts (set --hosts or --file, or provide them in config).")]
    MissingHosts,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
