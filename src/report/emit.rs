use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::error::SinkError;
use crate::sinks::ReportSink;

use super::{ReportSummary, render_report};

/// Where the persisted copy of a report went.
#[derive(Debug)]
pub enum Persisted {
    Skipped,
    Saved(PathBuf),
    Failed(SinkError),
}

#[derive(Debug)]
pub struct EmittedReport {
    pub text: String,
    pub persisted: Persisted,
}

/// Prints the report to stdout, then hands it to `sink` when one is given.
///
/// A sink failure is logged and returned in [`Persisted::Failed`]; the console
/// report has already been printed by then.
///
/// # Errors
///
/// Returns an error only if the report text cannot be rendered.
pub async fn emit(
    summary: &ReportSummary,
    sink: Option<&dyn ReportSink>,
) -> Result<EmittedReport, SinkError> {
    let text = render_report(summary)?;
    println!("{}", text);

    if summary.transport_failures > 0 {
        warn!(
            "{} request(s) failed before a response and were not counted",
            summary.transport_failures
        );
    }

    let Some(sink) = sink else {
        return Ok(EmittedReport {
            text,
            persisted: Persisted::Skipped,
        });
    };
    let persisted = match sink.persist(&text).await {
        Ok(path) => {
            info!("Report saved to {}", path.display());
            println!("Results saved to {}", path.display());
            Persisted::Saved(path)
        }
        Err(err) => {
            error!("Failed to save report: {}", err);
            Persisted::Failed(err)
        }
    };

    Ok(EmittedReport { text, persisted })
}
