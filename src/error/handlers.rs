//! Error handlers
//!
//! Provides handling for errors that abort startup.

use crate::error::types::ProviderError;
use log::error;

/// Exit status used when the host must not start
pub const FATAL_EXIT_CODE: i32 = 1;

/// Handle a fatal provider error
pub fn handle_error(err: &ProviderError) {
    error!("{}", err);
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &ProviderError) -> i32 {
    match err {
        ProviderError::DirectoryCreation { .. } => FATAL_EXIT_CODE,
        ProviderError::NotADirectory(_) => FATAL_EXIT_CODE,
        ProviderError::Settings(_) => 2,
    }
}
