//! Utilities
//!
//! Logging setup and the diagnostics collaborator.

pub mod logging;

pub use logging::{LogReporter, Reporter, setup_logging};
