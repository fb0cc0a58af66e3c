use std::sync::Arc;
use std::time::Duration;

use crate::args::PositiveU64;
use crate::error::ValidationError;
use crate::http::tick_interval;

use super::RequestSpec;

/// Immutable parameters of one run, owned by the scheduler.
#[derive(Debug, Clone)]
pub struct RunConfig {
    requests_per_second: f64,
    tick_interval: Duration,
    max_requests: PositiveU64,
    expected_status_code: u16,
    request: Arc<RequestSpec>,
}

impl RunConfig {
    /// Validates the rate and request cap.
    ///
    /// # Errors
    ///
    /// Returns an error when the rate is not a finite number above zero (or so
    /// high that the dispatch interval rounds to zero), when `max_requests` is
    /// zero or negative, or when the success status code is outside 100..=999.
    pub fn new(
        requests_per_second: f64,
        max_requests: i64,
        expected_status_code: u16,
        request: RequestSpec,
    ) -> Result<Self, ValidationError> {
        let tick_interval = tick_interval(requests_per_second)?;
        let max_requests = PositiveU64::try_from(max_requests)?;
        if !(100..=999).contains(&expected_status_code) {
            return Err(ValidationError::InvalidStatusCode {
                value: expected_status_code,
            });
        }
        Ok(Self {
            requests_per_second,
            tick_interval,
            max_requests,
            expected_status_code,
            request: Arc::new(request),
        })
    }

    #[must_use]
    pub const fn requests_per_second(&self) -> f64 {
        self.requests_per_second
    }

    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    #[must_use]
    pub const fn max_requests(&self) -> u64 {
        self.max_requests.get()
    }

    #[must_use]
    pub const fn expected_status_code(&self) -> u16 {
        self.expected_status_code
    }

    #[must_use]
    pub const fn request(&self) -> &Arc<RequestSpec> {
        &self.request
    }
}
