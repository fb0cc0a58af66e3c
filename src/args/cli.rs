use clap::Parser;

use super::defaults::{
    DEFAULT_MAX_REQUESTS, DEFAULT_METHOD, DEFAULT_RATE, DEFAULT_REPORTS_DIR, DEFAULT_STATUS_CODE,
    DEFAULT_URL,
};
use super::parsers::{parse_bool_env, parse_max_requests, parse_rate};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Rate-driven async HTTP load generator - fixed-interval dispatch, count-bounded runs, and latency/throughput reports.",
    next_help_heading = "Advanced Options"
)]
pub struct LoadArgs {
    /// Number of requests per second
    #[arg(
        long,
        short = 'r',
        env = "LOADR_RATE",
        default_value_t = DEFAULT_RATE,
        allow_negative_numbers = true,
        value_parser = parse_rate,
        help_heading = "Common Options"
    )]
    pub rate: f64,

    /// Maximum number of counted requests to send (must be > 0)
    #[arg(
        long = "max",
        short = 'm',
        env = "LOADR_MAX",
        default_value_t = DEFAULT_MAX_REQUESTS,
        allow_negative_numbers = true,
        value_parser = parse_max_requests,
        help_heading = "Common Options"
    )]
    pub max_requests: i64,

    /// The URL to make requests to
    #[arg(
        long,
        short = 'u',
        env = "LOADR_URL",
        default_value = DEFAULT_URL,
        help_heading = "Common Options"
    )]
    pub url: String,

    /// Type of HTTP request (GET, POST, PUT, DELETE, etc.)
    #[arg(
        long = "type",
        short = 'X',
        alias = "method",
        default_value = DEFAULT_METHOD,
        help_heading = "Common Options"
    )]
    pub method: String,

    /// Path to the JSON file with request data
    #[arg(long = "json", short = 'j', help_heading = "Common Options")]
    pub json_file: Option<String>,

    /// Bearer token for authorization
    #[arg(long = "token", short = 'k', env = "LOADR_TOKEN", hide_env_values = true)]
    pub bearer_token: Option<String>,

    /// Status code counted as a successful response
    #[arg(long = "status", default_value_t = DEFAULT_STATUS_CODE)]
    pub expected_status_code: u16,

    /// Directory for saved reports
    #[arg(long = "reports-dir", default_value = DEFAULT_REPORTS_DIR)]
    pub reports_dir: String,

    /// Print the report without saving it
    #[arg(long = "no-save")]
    pub no_save: bool,

    /// Path to config file (TOML/JSON). Defaults to ./loadr.toml or ./loadr.json if present.
    #[arg(long, short = 'c', help_heading = "Common Options")]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by LOADR_LOG/RUST_LOG)
    #[arg(long, short = 'v', alias = "debug", help_heading = "Common Options")]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
