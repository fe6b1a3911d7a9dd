use clap::{ArgGroup, Parser};
use std::time::Duration;

use super::parsers::{parse_duration_arg, parse_hosts, parse_positive_u64, read_host_file};
use super::types::{HostList, OutputFormat, PositiveU64};
use crate::error::{AppError, AppResult, ValidationError};

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "sites-checker",
    version,
    about = "Checks sites availability: probes every host N times concurrently and reports success, failure, and latency statistics per host."
)]
#[command(group(ArgGroup::new("input").args(["hosts", "file"]).multiple(false)))]
pub struct ProbeArgs {
    /// List of hosts, separated by comma
    #[arg(long, short = 'H', value_name = "HOSTS", value_parser = parse_hosts)]
    pub hosts: Option<HostList>,

    /// File with list of hosts, one per line
    #[arg(long, short = 'F', value_name = "PATH", value_parser = read_host_file)]
    pub file: Option<HostList>,

    /// Number of requests sent to each host
    #[arg(long, short = 'C', default_value = "1", value_parser = parse_positive_u64)]
    pub count: PositiveU64,

    /// File to save the report to. If not specified, the report is printed to the console
    #[arg(long, short = 'O')]
    pub output: Option<String>,

    /// Report format
    #[arg(long = "format", default_value = "table", ignore_case = true)]
    pub format: OutputFormat,

    /// Request timeout (supports ms/s/m/h)
    #[arg(long = "timeout", default_value = "10s", value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Timeout for establishing a new connection (supports ms/s/m/h)
    #[arg(long = "connect-timeout", default_value = "5s", value_parser = parse_duration_arg)]
    pub connect_timeout: Duration,

    /// Maximum number of redirects to follow (0 disables redirects)
    #[arg(long = "redirect", default_value = "10")]
    pub redirect_limit: u32,

    /// Do not send the default User-Agent header
    #[arg(long = "no-ua")]
    pub no_ua: bool,

    /// Path to config file (TOML/JSON). Defaults to ./sites-checker.toml or ./sites-checker.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by SITES_CHECKER_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl ProbeArgs {
    /// Hosts from `--hosts` or `--file`, whichever was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingHosts`] when neither was supplied.
    pub fn host_list(&self) -> AppResult<&HostList> {
        self.hosts
            .as_ref()
            .or(self.file.as_ref())
            .ok_or_else(|| AppError::validation(ValidationError::MissingHosts))
    }
}
