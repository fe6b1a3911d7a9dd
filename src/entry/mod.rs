mod plan;


use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::ProbeArgs;
use crate::config::{apply_config, load_config};
use crate::error::AppResult;
use plan::{build_plan, execute_plan};

/// Runs the CLI with the process arguments.
///
/// # Errors
///
/// Returns an error when arguments or config are invalid, the HTTP client
/// cannot be built, or the report cannot be written. Probe failures are
/// never errors; they are counted in the report.
pub fn run() -> AppResult<()> {
    run_from(std::env::args_os())
}

/// Same as [`run`] with explicit arguments (the first item is the binary
/// name).
///
/// # Errors
///
/// See [`run`].
pub fn run_from<I, T>(raw_args: I) -> AppResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let (mut args, matches) = parse_args(raw_args)?;

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    crate::system::logger::init_logging(args.verbose, args.no_color);

    let plan = build_plan(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(execute_plan(&plan))
}

fn parse_args<I, T>(raw_args: I) -> AppResult<(ProbeArgs, ArgMatches)>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = ProbeArgs::command().get_matches_from(raw_args);
    let args = ProbeArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}
