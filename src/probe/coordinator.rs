use futures_util::future::join_all;
use tokio::time::Instant;
use tracing::info;

use super::aggregator::probe_host;
use super::types::RunReport;
use crate::args::{HostList, PositiveU64};
use crate::http::ProbeTransport;

/// Probes every host concurrently over one shared transport.
///
/// The report lists hosts in input order no matter which finishes first. An
/// empty host list yields an empty report without touching the network.
pub async fn run_probes<T>(transport: &T, hosts: &HostList, count: PositiveU64) -> RunReport
where
    T: ProbeTransport + ?Sized,
{
    if hosts.is_empty() {
        return RunReport::default();
    }

    info!(hosts = hosts.len(), count = count.get(), "Probing hosts");
    let started = Instant::now();

    let stats = join_all(hosts.iter().map(|host| probe_host(transport, host, count))).await;

    info!(
        "Probed {} hosts in {}ms",
        stats.len(),
        started.elapsed().as_millis()
    );
    RunReport::new(stats)
}
