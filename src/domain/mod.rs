//! Validated, immutable descriptions of a load run.
mod request;
mod run;


pub use request::RequestSpec;
pub use run::RunConfig;
