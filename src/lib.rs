//! Core library for the `loadr` CLI.
//!
//! Provides the building blocks used by the binary: CLI argument types,
//! configuration loading, the validated run description, the request
//! executor and rate scheduler, the shared metrics aggregator, and report
//! rendering and persistence.
pub mod app;
pub mod args;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod metrics;
pub mod report;
pub mod sinks;
