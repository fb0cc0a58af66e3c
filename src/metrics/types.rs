use std::collections::BTreeMap;
use std::time::Duration;

use tokio::time::Instant;

/// Result of one completed HTTP exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOutcome {
    pub latency: Duration,
    pub success: bool,
    /// Whole seconds between run start and completion.
    pub second_offset: u64,
}

impl RequestOutcome {
    #[must_use]
    pub const fn new(latency: Duration, success: bool, second_offset: u64) -> Self {
        Self {
            latency,
            success,
            second_offset,
        }
    }

    /// Stamps an outcome that completed at `completed_at`.
    #[must_use]
    pub fn completed(
        latency: Duration,
        success: bool,
        run_start: Instant,
        completed_at: Instant,
    ) -> Self {
        let second_offset = completed_at.saturating_duration_since(run_start).as_secs();
        Self::new(latency, success, second_offset)
    }
}

/// Accumulated counters. `min_latency` starts at `Duration::MAX` so the first
/// sample always replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsState {
    pub total_requests: u64,
    pub total_successes: u64,
    pub total_latency: Duration,
    pub max_latency: Duration,
    pub min_latency: Duration,
    pub successes_by_second: BTreeMap<u64, u64>,
}

impl Default for MetricsState {
    fn default() -> Self {
        Self {
            total_requests: 0,
            total_successes: 0,
            total_latency: Duration::ZERO,
            max_latency: Duration::ZERO,
            min_latency: Duration::MAX,
            successes_by_second: BTreeMap::new(),
        }
    }
}

impl MetricsState {
    pub(super) fn apply(&mut self, outcome: RequestOutcome) {
        self.total_requests = self.total_requests.saturating_add(1);
        self.total_latency = self.total_latency.saturating_add(outcome.latency);
        self.max_latency = self.max_latency.max(outcome.latency);
        self.min_latency = self.min_latency.min(outcome.latency);
        if outcome.success {
            self.total_successes = self.total_successes.saturating_add(1);
            let bucket = self
                .successes_by_second
                .entry(outcome.second_offset)
                .or_insert(0);
            *bucket = bucket.saturating_add(1);
        }
    }

    /// Mean latency over all recorded requests; zero when nothing was recorded.
    #[must_use]
    pub fn average_latency(&self) -> Duration {
        let nanos = self
            .total_latency
            .as_nanos()
            .checked_div(u128::from(self.total_requests))
            .unwrap_or(0);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// Smallest recorded latency, or zero before the first record.
    #[must_use]
    pub fn observed_min_latency(&self) -> Duration {
        if self.total_requests == 0 {
            Duration::ZERO
        } else {
            self.min_latency
        }
    }

    /// Sum of the per-second success buckets.
    #[must_use]
    pub fn bucketed_successes(&self) -> u64 {
        self.successes_by_second
            .values()
            .fold(0_u64, |acc, count| acc.saturating_add(*count))
    }
}
