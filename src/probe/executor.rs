use tokio::time::Instant;
use tracing::debug;

use super::types::{Outcome, round_to_millis};
use crate::http::ProbeTransport;

/// Sends one GET to `host` and classifies the result.
///
/// Transport failures become [`Outcome::Error`]; they never escape as errors,
/// so sibling probes and other hosts are unaffected.
pub async fn probe_once<T>(transport: &T, host: &str) -> Outcome
where
    T: ProbeTransport + ?Sized,
{
    let start = Instant::now();
    match transport.get(host).await {
        Ok(response) => {
            let elapsed = round_to_millis(response.received_at.saturating_duration_since(start));
            if response.is_success() {
                Outcome::Success { elapsed }
            } else {
                debug!(status = response.status, "Probe to {} failed", host);
                Outcome::Failed { elapsed }
            }
        }
        Err(err) => {
            debug!("Probe to {} errored: {}", host, err);
            Outcome::Error { kind: err.kind }
        }
    }
}
