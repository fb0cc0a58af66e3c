//! Final run summary: computation, fixed-format rendering and delivery.
mod emit;
mod format;
mod summary;


pub use emit::{EmittedReport, Persisted, emit};
pub use format::render_report;
pub use summary::{ReportSummary, summarize, summarize_elapsed};
