use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::LoadArgs;

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Flags given on the command
/// line or through the environment always win; range checks happen later when the run config is built.
pub fn apply_config(args: &mut LoadArgs, matches: &ArgMatches, config: ConfigFile) {
    if !is_explicit(matches, "rate")
        && let Some(rate) = config.rate
    {
        args.rate = rate;
    }

    if !is_explicit(matches, "max_requests")
        && let Some(max) = config.max
    {
        args.max_requests = max;
    }

    if !is_explicit(matches, "url")
        && let Some(url) = config.url
    {
        args.url = url;
    }

    if !is_explicit(matches, "method")
        && let Some(method) = config.method
    {
        args.method = method;
    }

    if !is_explicit(matches, "json_file")
        && let Some(json) = config.json
    {
        args.json_file = Some(json);
    }

    if !is_explicit(matches, "bearer_token")
        && let Some(token) = config.token
    {
        args.bearer_token = Some(token);
    }

    if !is_explicit(matches, "expected_status_code")
        && let Some(status) = config.status
    {
        args.expected_status_code = status;
    }

    if !is_explicit(matches, "reports_dir")
        && let Some(reports_dir) = config.reports_dir
    {
        args.reports_dir = reports_dir;
    }
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}
