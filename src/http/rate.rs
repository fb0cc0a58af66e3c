use std::time::Duration;

use crate::error::ValidationError;

/// Converts a requests-per-second rate into the spacing between dispatches.
///
/// # Errors
///
/// Returns an error when the rate is not a finite number above zero, or when
/// it is so high that the interval cannot be represented.
pub fn tick_interval(requests_per_second: f64) -> Result<Duration, ValidationError> {
    if !requests_per_second.is_finite() || requests_per_second <= 0.0 {
        return Err(ValidationError::InvalidRate {
            value: requests_per_second,
        });
    }
    Duration::try_from_secs_f64(requests_per_second.recip())
        .ok()
        .filter(|interval| !interval.is_zero())
        .ok_or(ValidationError::RateTooHigh {
            value: requests_per_second,
        })
}
