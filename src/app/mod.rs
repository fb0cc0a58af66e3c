//! Local run orchestration from parsed arguments to the emitted report.
mod body;
mod runner;


pub use body::read_body;
pub use runner::{RunOutcome, build_run_config, run_local};
