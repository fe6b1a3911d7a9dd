use std::time::Duration;

use serde::Deserialize;

use crate::args::{OutputFormat, parse_duration_arg};
use crate::error::{AppError, AppResult, ConfigError};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub hosts: Option<Vec<String>>,
    pub file: Option<String>,
    pub count: Option<u64>,
    pub output: Option<String>,
    pub format: Option<OutputFormat>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub redirect: Option<u32>,
    pub no_ua: Option<bool>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}

/// Either whole seconds (`timeout = 5`) or a duration string (`timeout = "250ms"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self, field: &'static str) -> AppResult<Duration> {
        let parsed = match self {
            DurationValue::Seconds(secs) => parse_duration_arg(&secs.to_string()),
            DurationValue::Text(text) => parse_duration_arg(text),
        };
        parsed.map_err(|err| match err {
            AppError::Validation(source) => {
                AppError::config(ConfigError::InvalidDuration { field, source })
            }
            other @ (AppError::Io { .. }
            | AppError::Clap { .. }
            | AppError::Config(_)
            | AppError::Http(_)
            | AppError::Report(_)) => other,
        })
    }
}
