//! Error types
//!
//! Only failures that must stop the host from starting live here. Symlink
//! problems are reported and swallowed by the provider instead.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal provider errors
#[derive(Debug)]
pub enum ProviderError {
    /// A required directory could not be created and does not exist.
    DirectoryCreation { path: PathBuf, source: io::Error },
    /// Creation lost a race to something that is not a directory.
    NotADirectory(PathBuf),
    /// The binary's settings could not be loaded or failed validation.
    Settings(config::ConfigError),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::DirectoryCreation { path, source } => write!(
                f,
                "WebsliceProvider: Directory [{}] could not be created: {}",
                path.display(),
                source
            ),
            ProviderError::NotADirectory(path) => write!(
                f,
                "WebsliceProvider: Directory [{}] could not be created: path exists and is not a directory",
                path.display()
            ),
            ProviderError::Settings(e) => write!(f, "Settings error: {}", e),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::DirectoryCreation { source, .. } => Some(source),
            ProviderError::NotADirectory(_) => None,
            ProviderError::Settings(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for ProviderError {
    fn from(error: config::ConfigError) -> Self {
        ProviderError::Settings(error)
    }
}

impl ProviderError {
    /// Path that caused the failure, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ProviderError::DirectoryCreation { path, .. } => Some(path),
            ProviderError::NotADirectory(path) => Some(path),
            ProviderError::Settings(_) => None,
        }
    }
}
