//! Destinations for the finished report text.
mod writers;


pub use writers::{FileReportSink, ReportSink};
