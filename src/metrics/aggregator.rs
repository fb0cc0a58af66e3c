use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{MetricsState, RequestOutcome};

/// Shared accumulator for one run. Every mutation and every snapshot goes
/// through the same lock, so readers never observe a half-applied record.
#[derive(Debug, Default)]
pub struct MetricsAggregator {
    state: Mutex<MetricsState>,
}

impl MetricsAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, outcome: RequestOutcome) {
        self.lock().apply(outcome);
    }

    /// Point-in-time copy of the accumulated state.
    #[must_use]
    pub fn snapshot(&self) -> MetricsState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, MetricsState> {
        // `apply` cannot panic mid-update, so a poisoned state is still whole.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
