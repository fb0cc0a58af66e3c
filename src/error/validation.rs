use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid rate '{value}'. Requests per second must be a finite number > 0.")]
    InvalidRate { value: f64 },
    #[error("Rate '{value}' is too high; the dispatch interval would be zero.")]
    RateTooHigh { value: f64 },
    #[error("Invalid max '{value}'. max must be an integer greater than 0.")]
    InvalidMaxRequests { value: i64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid rate value: {source}")]
    InvalidFloat {
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[error("Invalid HTTP verb '{value}'.")]
    InvalidMethod { value: String },
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported URL scheme '{scheme}'. Use http or https.")]
    UnsupportedScheme { scheme: String },
    #[error("URL is missing host.")]
    UrlMissingHost,
    #[error("Invalid status code {value}. Use a value between 100 and 999.")]
    InvalidStatusCode { value: u16 },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
