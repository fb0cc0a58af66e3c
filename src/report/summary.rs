use std::time::Duration;

use tokio::time::Instant;

use crate::domain::RequestSpec;
use crate::metrics::MetricsState;

/// Everything the rendered report shows, computed once after the run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub endpoint: String,
    pub verb: String,
    pub total_requests: u64,
    pub total_successes: u64,
    pub average_latency: Duration,
    pub max_latency: Duration,
    pub min_latency: Duration,
    pub requested_rate: f64,
    /// Successes per second of elapsed time, scaled by 100.
    pub successes_per_second_x100: u64,
    pub elapsed: Duration,
    /// Attempts that never produced a response. Logged, not rendered.
    pub transport_failures: u64,
}

/// Summarizes a finished run, measuring elapsed time up to now.
#[must_use]
pub fn summarize(
    state: &MetricsState,
    request: &RequestSpec,
    run_start: Instant,
    requested_rate: f64,
) -> ReportSummary {
    summarize_elapsed(state, request, run_start.elapsed(), requested_rate)
}

#[must_use]
pub fn summarize_elapsed(
    state: &MetricsState,
    request: &RequestSpec,
    elapsed: Duration,
    requested_rate: f64,
) -> ReportSummary {
    ReportSummary {
        endpoint: request.url().to_string(),
        verb: request.verb().to_owned(),
        total_requests: state.total_requests,
        total_successes: state.total_successes,
        average_latency: state.average_latency(),
        max_latency: state.max_latency,
        min_latency: state.observed_min_latency(),
        requested_rate,
        successes_per_second_x100: per_second_x100(state.bucketed_successes(), elapsed),
        elapsed,
        transport_failures: 0,
    }
}

fn per_second_x100(count: u64, elapsed: Duration) -> u64 {
    let scaled = u128::from(count)
        .saturating_mul(100_000)
        .checked_div(elapsed.as_millis())
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}
