//! Logging utilities
//!
//! Provides logging setup and the [`Reporter`] the provider emits its
//! diagnostics through.

use log::{debug, error, info};

/// Setup logging for the binary
pub fn setup_logging() {
    env_logger::init();
}

/// Diagnostics sink with the three levels the provider uses
pub trait Reporter {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards diagnostics to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn debug(&self, message: &str) {
        debug!("{}", message);
    }

    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }
}
