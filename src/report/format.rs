use std::fmt::Write as _;

use crate::error::SinkError;

use super::ReportSummary;

const SEPARATOR: &str = "--------------------";

/// Renders the labeled report lines, one `Label: value` per line.
///
/// # Errors
///
/// Returns an error if writing into the buffer fails.
pub fn render_report(summary: &ReportSummary) -> Result<String, SinkError> {
    let mut output = String::new();
    write_line(&mut output, &format!("Endpoint: {}", summary.endpoint))?;
    write_line(&mut output, &format!("HTTP Verb: {}", summary.verb))?;
    write_line(&mut output, SEPARATOR)?;
    write_line(&mut output, "Performance Metrics:")?;
    write_line(
        &mut output,
        &format!("Total Requests Sent: {}", summary.total_requests),
    )?;
    write_line(
        &mut output,
        &format!("Total Responses Received: {}", summary.total_successes),
    )?;
    write_line(
        &mut output,
        &format!("Average Latency: {:?}", summary.average_latency),
    )?;
    write_line(
        &mut output,
        &format!("Max Latency: {:?}", summary.max_latency),
    )?;
    write_line(
        &mut output,
        &format!("Min Latency: {:?}", summary.min_latency),
    )?;
    write_line(
        &mut output,
        &format!("Requests Per Second (Sent): {:.2}", summary.requested_rate),
    )?;
    write_line(
        &mut output,
        &format!(
            "Responses Per Second (Received): {}",
            format_x100(summary.successes_per_second_x100)
        ),
    )?;
    Ok(output)
}

fn write_line(output: &mut String, line: &str) -> Result<(), SinkError> {
    writeln!(output, "{}", line).map_err(|err| SinkError::WriteLine { source: err })
}

pub(super) fn format_x100(value: u64) -> String {
    format!("{}.{:02}", value / 100, value % 100)
}
