use std::time::Duration;

use reqwest::{Client, redirect};
use tracing::error;

use crate::args::{DEFAULT_USER_AGENT, ProbeArgs};
use crate::error::{AppError, AppResult, HttpError};

/// Redirect limit used when the configured value does not fit `usize`.
const FALLBACK_REDIRECT_LIMIT: usize = 10;

/// Client knobs taken from the CLI/config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub redirect_limit: u32,
    pub user_agent: Option<&'static str>,
}

impl ClientSettings {
    #[must_use]
    pub fn from_args(args: &ProbeArgs) -> Self {
        Self {
            request_timeout: args.request_timeout,
            connect_timeout: args.connect_timeout,
            redirect_limit: args.redirect_limit,
            user_agent: if args.no_ua {
                None
            } else {
                Some(DEFAULT_USER_AGENT)
            },
        }
    }
}

/// Builds the HTTP client shared by every probe of a run. The client pools
/// connections per host, so probes against the same host reuse sockets.
///
/// # Errors
///
/// Returns an error when the TLS backend or client cannot be initialised.
pub fn build_client(settings: &ClientSettings) -> AppResult<Client> {
    let mut client_builder = Client::builder()
        .timeout(settings.request_timeout)
        .connect_timeout(settings.connect_timeout);

    if let Some(user_agent) = settings.user_agent {
        client_builder = client_builder.user_agent(user_agent);
    }

    if settings.redirect_limit == 0 {
        client_builder = client_builder.redirect(redirect::Policy::none());
    } else {
        client_builder = client_builder.redirect(redirect::Policy::limited(
            usize::try_from(settings.redirect_limit).unwrap_or(FALLBACK_REDIRECT_LIMIT),
        ));
    }

    client_builder.build().map_err(|err| {
        error!("Failed to build HTTP client: {}", err);
        AppError::http(HttpError::BuildClientFailed { source: err })
    })
}
