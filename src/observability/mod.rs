//! # Observability
//!
//! Structured logging for the CLI. Log events go to stderr so that menu and
//! listing output on stdout stays readable.

pub mod logging;

pub use logging::{init_logging, LogFormat, LoggingConfig};
