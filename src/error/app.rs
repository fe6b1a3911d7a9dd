use thiserror::Error;

use super::{ConfigError, HttpError, ReportError, ValidationError};

/// Exit status for usage and input validation failures.
pub const USAGE_EXIT_CODE: u8 = 2;
/// Exit status for every other failure.
pub const FAILURE_EXIT_CODE: u8 = 1;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn http<E>(error: E) -> Self
    where
        E: Into<HttpError>,
    {
        error.into().into()
    }

    pub fn report<E>(error: E) -> Self
    where
        E: Into<ReportError>,
    {
        error.into().into()
    }

    /// Process exit status for this error.
    ///
    /// Bad input (invalid hosts, counts, host files, config values) exits with
    /// 2 like a CLI usage error; run-time failures such as an unwritable
    /// output file exit with 1.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Validation(_) | AppError::Config(_) => USAGE_EXIT_CODE,
            AppError::Clap { source } => {
                u8::try_from(source.exit_code()).unwrap_or(USAGE_EXIT_CODE)
            }
            AppError::Io { .. } | AppError::Http(_) | AppError::Report(_) => FAILURE_EXIT_CODE,
        }
    }
}
