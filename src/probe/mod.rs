//! The concurrent probe engine.
//!
//! [`run_probes`] fans out one aggregation per host, each aggregation fans out
//! `count` single GET probes, and results fold back up into a host-ordered
//! [`RunReport`]. Every concurrent unit returns an owned value; folding happens
//! in the task that awaited the results, so no state is shared between probes.
mod aggregator;
mod coordinator;
mod executor;
mod types;


pub use aggregator::probe_host;
pub use coordinator::run_probes;
pub use executor::probe_once;
pub use types::{HostStats, Outcome, RunReport, round_to_millis};
