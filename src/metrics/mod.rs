//! Thread-safe accumulation of per-request outcomes.
mod aggregator;
mod types;


pub use aggregator::MetricsAggregator;
pub use types::{MetricsState, RequestOutcome};
