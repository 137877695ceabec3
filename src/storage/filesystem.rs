//! File system operations
//!
//! Several instances may start at once against the same shared mount, so
//! every operation here tolerates another process having done the work
//! first.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ProviderError;

/// Directory mode for created storage paths
#[cfg(unix)]
const DIRECTORY_MODE: u32 = 0o755;

/// Filesystem operations the provider needs
pub trait Filesystem {
    /// Whether any entry exists at `path`, without following a final symlink
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` resolves to a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Target of the symlink at `path`, or `None` if it is not a symlink
    fn read_link(&self, path: &Path) -> Option<PathBuf>;

    /// Create `path` and any missing parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create a symlink at `link` pointing to `target`
    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()>;
}

/// The real filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_link(&self, path: &Path) -> Option<PathBuf> {
        fs::read_link(path).ok()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIRECTORY_MODE);
        }
        builder.create(path)
    }

    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        create_symlink(target, link)
    }
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

#[cfg(not(any(unix, windows)))]
fn create_symlink(_target: &Path, _link: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symlinks are not supported on this platform",
    ))
}

/// Make sure `path` exists as a directory.
///
/// A failed create is fine as long as the directory is there afterwards
/// (another instance won the race). Anything else is fatal.
pub fn ensure_directory_exists(fs: &dyn Filesystem, path: &Path) -> Result<(), ProviderError> {
    if fs.is_dir(path) {
        return Ok(());
    }

    match fs.create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(_) if fs.is_dir(path) => Ok(()),
        Err(_) if fs.exists(path) => Err(ProviderError::NotADirectory(path.to_path_buf())),
        Err(source) => Err(ProviderError::DirectoryCreation {
            path: path.to_path_buf(),
            source,
        }),
    }
}
