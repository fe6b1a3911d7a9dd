use tracing::error;

use crate::args::{HostList, OutputFormat, PositiveU64, ProbeArgs};
use crate::error::AppResult;
use crate::http::{ClientSettings, ProbeTransport, ReqwestTransport, build_client};
use crate::probe::run_probes;
use crate::report::{render, write_report};

/// Everything a run needs once args and config are merged and validated.
#[derive(Debug, Clone)]
pub(super) struct RunPlan {
    pub(super) hosts: HostList,
    pub(super) count: PositiveU64,
    pub(super) client: ClientSettings,
    pub(super) output: Option<String>,
    pub(super) format: OutputFormat,
}

pub(super) fn build_plan(args: &ProbeArgs) -> AppResult<RunPlan> {
    let hosts = args.host_list().inspect_err(|_| {
        error!("Missing hosts (set --hosts or --file, or provide them in config).");
    })?;

    Ok(RunPlan {
        hosts: hosts.clone(),
        count: args.count,
        client: ClientSettings::from_args(args),
        output: args.output.clone(),
        format: args.format,
    })
}

pub(super) async fn execute_plan(plan: &RunPlan) -> AppResult<()> {
    let client = build_client(&plan.client)?;
    let transport = ReqwestTransport::new(client);
    execute_with_transport(&transport, plan).await
}

pub(super) async fn execute_with_transport<T>(transport: &T, plan: &RunPlan) -> AppResult<()>
where
    T: ProbeTransport + ?Sized,
{
    let report = run_probes(transport, &plan.hosts, plan.count).await;
    let rendered = render(&report, plan.format)?;
    write_report(&rendered, plan.output.as_deref()).await
}
