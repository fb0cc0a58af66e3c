use crate::error::ValidationError;

pub(crate) fn parse_bool_env(s: &str) -> Result<bool, ValidationError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        }),
    }
}

/// Parses the raw rate; range checks happen when the run config is built.
pub(crate) fn parse_rate(s: &str) -> Result<f64, ValidationError> {
    s.trim()
        .parse::<f64>()
        .map_err(|err| ValidationError::InvalidFloat { source: err })
}

/// Parses the raw request cap; zero and negative values are kept so the
/// run config can reject them with a dedicated error.
pub(crate) fn parse_max_requests(s: &str) -> Result<i64, ValidationError> {
    s.trim()
        .parse::<i64>()
        .map_err(|err| ValidationError::InvalidNumber { source: err })
}
