//! Logging setup for the native build-a-bot binaries.
//!
//! Wraps `tracing-subscriber` with the two output formats the CLI offers:
//! human-readable for terminals and JSON for log shippers.

pub mod logging;

pub use logging::{init_logging, init_logging_json};
