use std::time::Duration;

use crate::http::TransportErrorKind;

const MICROS_PER_MILLI: u128 = 1_000;
const HALF_MILLI_MICROS: u128 = 500;

/// Classified result of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Response with a 2xx/3xx status.
    Success { elapsed: Duration },
    /// Response with any other status.
    Failed { elapsed: Duration },
    /// No response at all. Carries no timing.
    Error { kind: TransportErrorKind },
}

/// Statistics for every probe sent to one host.
///
/// `min`, `max` and `avg` are either all present or all absent; they are
/// absent exactly when no probe produced a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostStats {
    pub host: String,
    pub success: u64,
    pub failed: u64,
    pub errors: u64,
    pub min: Option<Duration>,
    pub max: Option<Duration>,
    pub avg: Option<Duration>,
}

impl HostStats {
    /// Folds a complete set of outcomes for `host`. The result does not depend
    /// on the order of `outcomes`.
    #[must_use]
    pub fn from_outcomes(host: &str, outcomes: &[Outcome]) -> Self {
        let mut success: u64 = 0;
        let mut failed: u64 = 0;
        let mut errors: u64 = 0;
        let mut min: Option<Duration> = None;
        let mut max: Option<Duration> = None;
        let mut total_millis: u128 = 0;

        for outcome in outcomes {
            let elapsed = match *outcome {
                Outcome::Success { elapsed } => {
                    success = success.saturating_add(1);
                    elapsed
                }
                Outcome::Failed { elapsed } => {
                    failed = failed.saturating_add(1);
                    elapsed
                }
                Outcome::Error { .. } => {
                    errors = errors.saturating_add(1);
                    continue;
                }
            };
            min = Some(min.map_or(elapsed, |current| current.min(elapsed)));
            max = Some(max.map_or(elapsed, |current| current.max(elapsed)));
            total_millis = total_millis.saturating_add(elapsed.as_millis());
        }

        let timed = u128::from(success.saturating_add(failed));
        let avg = mean_millis(total_millis, timed).map(Duration::from_millis);

        Self {
            host: host.to_owned(),
            success,
            failed,
            errors,
            min,
            max,
            avg,
        }
    }

    /// Number of probes folded into these stats.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.success
            .saturating_add(self.failed)
            .saturating_add(self.errors)
    }
}

/// Per-host statistics in the order the hosts were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    hosts: Vec<HostStats>,
}

impl RunReport {
    #[must_use]
    pub const fn new(hosts: Vec<HostStats>) -> Self {
        Self { hosts }
    }

    #[must_use]
    pub fn hosts(&self) -> &[HostStats] {
        &self.hosts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hosts.len()
    }
}

/// Rounds to the nearest millisecond (three decimals of a second), half up.
#[must_use]
pub fn round_to_millis(elapsed: Duration) -> Duration {
    let millis = elapsed
        .as_micros()
        .saturating_add(HALF_MILLI_MICROS)
        .checked_div(MICROS_PER_MILLI)
        .unwrap_or(0);
    Duration::from_millis(u64::try_from(millis).unwrap_or(u64::MAX))
}

/// Arithmetic mean of `count` millisecond values summing to `total`, rounded
/// half up. `None` when there are no values.
fn mean_millis(total: u128, count: u128) -> Option<u64> {
    let doubled_count = count.checked_mul(2).filter(|value| *value > 0)?;
    let rounded = total
        .saturating_mul(2)
        .saturating_add(count)
        .checked_div(doubled_count)?;
    Some(u64::try_from(rounded).unwrap_or(u64::MAX))
}
