//! Request execution and rate-limited dispatch.
mod client;
mod executor;
mod rate;
mod scheduler;


pub use client::build_client;
pub use executor::RequestExecutor;
pub use rate::tick_interval;
pub use scheduler::{DispatchTotals, RateScheduler, SchedulerPhase};
