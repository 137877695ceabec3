//! File system storage management
//!
//! Filesystem capability used by the provider and idempotent directory
//! creation on top of it.

pub mod filesystem;

pub use filesystem::{Filesystem, OsFilesystem, ensure_directory_exists};
