use std::sync::Arc;

use tracing::{debug, info};

use crate::args::LoadArgs;
use crate::domain::{RequestSpec, RunConfig};
use crate::error::AppResult;
use crate::http::{DispatchTotals, RateScheduler, build_client};
use crate::metrics::MetricsAggregator;
use crate::report::{EmittedReport, emit};
use crate::sinks::{FileReportSink, ReportSink};

use super::read_body;

#[derive(Debug)]
pub struct RunOutcome {
    pub report: EmittedReport,
    pub totals: DispatchTotals,
}

/// Validates the arguments and the loaded body into an immutable run config.
///
/// # Errors
///
/// Returns an error for an invalid verb, URL, rate, request cap or status.
pub fn build_run_config(args: &LoadArgs, body: Option<Vec<u8>>) -> AppResult<RunConfig> {
    let request = RequestSpec::new(&args.method, &args.url, body, args.bearer_token.clone())?;
    let config = RunConfig::new(
        args.rate,
        args.max_requests,
        args.expected_status_code,
        request,
    )?;
    Ok(config)
}

/// Executes one run and emits its report.
///
/// Everything that can reject the run is checked before the first request
/// goes out.
///
/// # Errors
///
/// Returns an error when the body cannot be read, the arguments are invalid,
/// or the HTTP client cannot be built. Failing to save the report is not an
/// error.
pub async fn run_local(args: &LoadArgs) -> AppResult<RunOutcome> {
    let body = read_body(args.json_file.as_deref()).await?;
    let config = build_run_config(args, body)?;
    let client = build_client()?;
    debug!(
        "Dispatching {} {} every {:?} until {} responses",
        config.request().verb(),
        config.request().url(),
        config.tick_interval(),
        config.max_requests()
    );

    println!("Starting Loadr Requests...");
    let aggregator = Arc::new(MetricsAggregator::new());
    let mut scheduler = RateScheduler::new(config, client, aggregator);
    let summary = scheduler.run().await;
    let totals = scheduler.totals();
    info!(
        "Run finished after {:?} with {} responses",
        summary.elapsed, totals.counted
    );

    let sink = (!args.no_save).then(|| FileReportSink::new(&args.reports_dir));
    let report = emit(&summary, sink.as_ref().map(|sink| sink as &dyn ReportSink)).await?;

    Ok(RunOutcome { report, totals })
}
