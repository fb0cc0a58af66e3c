use std::sync::Arc;

use reqwest::Client;
use tokio::task::{JoinError, JoinSet};
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, error, warn};

use crate::domain::RunConfig;
use crate::error::HttpError;
use crate::metrics::{MetricsAggregator, RequestOutcome};
use crate::report::{ReportSummary, summarize};

use super::RequestExecutor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerPhase {
    Idle,
    Ticking,
    Draining,
    Done,
}

/// Counters kept by the control loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchTotals {
    pub dispatched: u64,
    pub counted: u64,
    pub transport_failures: u64,
}

impl DispatchTotals {
    fn settle(&mut self, joined: Result<Result<RequestOutcome, HttpError>, JoinError>) {
        match joined {
            Ok(Ok(_outcome)) => self.counted = self.counted.saturating_add(1),
            Ok(Err(err)) => {
                warn!("{}", err);
                self.transport_failures = self.transport_failures.saturating_add(1);
            }
            Err(err) => {
                error!("Request task failed: {}", err);
                self.transport_failures = self.transport_failures.saturating_add(1);
            }
        }
    }
}

/// Drives one run: ticks at the configured interval, dispatches one attempt
/// per tick, and stops once `max_requests` attempts have completed with a
/// response.
///
/// An attempt is dispatched only while completed plus in-flight attempts stay
/// below the cap, so the run never records more than `max_requests`
/// exchanges. Attempts that fail before a response free their slot and are
/// retried on a later tick.
#[derive(Debug)]
pub struct RateScheduler {
    config: RunConfig,
    client: Client,
    aggregator: Arc<MetricsAggregator>,
    phase: SchedulerPhase,
    totals: DispatchTotals,
}

impl RateScheduler {
    #[must_use]
    pub const fn new(
        config: RunConfig,
        client: Client,
        aggregator: Arc<MetricsAggregator>,
    ) -> Self {
        Self {
            config,
            client,
            aggregator,
            phase: SchedulerPhase::Idle,
            totals: DispatchTotals {
                dispatched: 0,
                counted: 0,
                transport_failures: 0,
            },
        }
    }

    #[must_use]
    pub const fn phase(&self) -> SchedulerPhase {
        self.phase
    }

    #[must_use]
    pub const fn totals(&self) -> DispatchTotals {
        self.totals
    }

    /// Runs to completion and summarizes the aggregator.
    pub async fn run(&mut self) -> ReportSummary {
        let run_start = Instant::now();
        let executor = Arc::new(RequestExecutor::new(
            self.client.clone(),
            Arc::clone(self.config.request()),
            Arc::clone(&self.aggregator),
            self.config.expected_status_code(),
            run_start,
        ));
        let max_requests = self.config.max_requests();
        let period = self.config.tick_interval();
        let first_tick = run_start.checked_add(period).unwrap_or(run_start);
        let mut ticker = interval_at(first_tick, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut tasks: JoinSet<Result<RequestOutcome, HttpError>> = JoinSet::new();

        self.transition(SchedulerPhase::Ticking);
        while self.totals.counted < max_requests {
            tokio::select! {
                _ = ticker.tick() => {
                    let in_flight = u64::try_from(tasks.len()).unwrap_or(u64::MAX);
                    if self.totals.counted.saturating_add(in_flight) < max_requests {
                        let executor = Arc::clone(&executor);
                        tasks.spawn(async move { executor.execute().await });
                        self.totals.dispatched = self.totals.dispatched.saturating_add(1);
                    }
                }
                Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                    self.totals.settle(joined);
                }
            }
        }

        self.transition(SchedulerPhase::Draining);
        while let Some(joined) = tasks.join_next().await {
            self.totals.settle(joined);
        }

        self.transition(SchedulerPhase::Done);
        debug!(
            "Dispatched {} attempt(s), {} completed, {} failed before a response",
            self.totals.dispatched, self.totals.counted, self.totals.transport_failures
        );
        ReportSummary {
            transport_failures: self.totals.transport_failures,
            ..summarize(
                &self.aggregator.snapshot(),
                self.config.request(),
                run_start,
                self.config.requests_per_second(),
            )
        }
    }

    fn transition(&mut self, next: SchedulerPhase) {
        debug!("Scheduler {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}
