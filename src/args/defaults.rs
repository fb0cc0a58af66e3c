pub(crate) const DEFAULT_USER_AGENT: &str = concat!("loadr/", env!("CARGO_PKG_VERSION"));

pub(crate) const DEFAULT_RATE: f64 = 10.0;
pub(crate) const DEFAULT_MAX_REQUESTS: i64 = 50;
pub(crate) const DEFAULT_URL: &str = "https://example.com";
pub(crate) const DEFAULT_METHOD: &str = "GET";
pub(crate) const DEFAULT_STATUS_CODE: u16 = 200;
/// Relative to the working directory.
pub(crate) const DEFAULT_REPORTS_DIR: &str = ".reports";
