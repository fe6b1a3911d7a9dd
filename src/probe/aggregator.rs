use futures_util::future::join_all;
use tracing::debug;

use super::executor::probe_once;
use super::types::HostStats;
use crate::args::PositiveU64;
use crate::http::ProbeTransport;

/// Runs `count` concurrent probes against `host` and folds them once all of
/// them have finished.
pub async fn probe_host<T>(transport: &T, host: &str, count: PositiveU64) -> HostStats
where
    T: ProbeTransport + ?Sized,
{
    let probes = (0..count.get()).map(|_| probe_once(transport, host));
    let outcomes = join_all(probes).await;

    let stats = HostStats::from_outcomes(host, &outcomes);
    debug!(
        success = stats.success,
        failed = stats.failed,
        errors = stats.errors,
        "Finished probing {}",
        host
    );
    stats
}
