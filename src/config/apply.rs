use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{PositiveU64, ProbeArgs, read_host_file};
use crate::args::parsers::validate_hosts;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Flags given on the command
/// line always win over the config file.
///
/// # Errors
///
/// Returns an error when config values are invalid or conflict with each other.
pub fn apply_config(
    args: &mut ProbeArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if config.hosts.is_some() && config.file.is_some() {
        return Err(AppError::config(ConfigError::Conflict {
            left: "hosts",
            right: "file",
        }));
    }

    if !is_cli(matches, "hosts") && !is_cli(matches, "file") {
        if let Some(hosts) = config.hosts.as_ref() {
            let trimmed = hosts.iter().map(|host| host.trim().to_owned());
            args.hosts = Some(
                validate_hosts(trimmed)
                    .map_err(|err| AppError::config(ConfigError::InvalidHosts { source: err }))?,
            );
        } else if let Some(path) = config.file.as_deref() {
            args.file = Some(
                read_host_file(path)
                    .map_err(|err| AppError::config(ConfigError::InvalidHosts { source: err }))?,
            );
        }
    }

    if !is_cli(matches, "count")
        && let Some(count) = config.count
    {
        args.count = ensure_positive_u64(count, "count")?;
    }

    if !is_cli(matches, "output")
        && let Some(output) = config.output.clone()
    {
        args.output = Some(output);
    }

    if !is_cli(matches, "format")
        && let Some(format) = config.format
    {
        args.format = format;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = timeout.to_duration("timeout")?;
    }

    if !is_cli(matches, "connect_timeout")
        && let Some(timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = timeout.to_duration("connect_timeout")?;
    }

    if !is_cli(matches, "redirect_limit")
        && let Some(limit) = config.redirect
    {
        args.redirect_limit = limit;
    }

    if !is_cli(matches, "no_ua")
        && let Some(no_ua) = config.no_ua
    {
        args.no_ua = no_ua;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_u64(value: u64, field: &str) -> AppResult<PositiveU64> {
    PositiveU64::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}
