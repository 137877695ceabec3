//! Storage path remapping
//!
//! Points the host's writable storage at directories that exist on a
//! read-only-root instance.

use crate::error::ProviderError;
use crate::paths::Layout;
use crate::storage::{Filesystem, ensure_directory_exists};
use crate::store::{COOKIE_DRIVER, ConfigStore, FILE_DRIVER, keys};

/// Force file-backed drivers and redirect every mapped path.
///
/// Each directory is in place before its key is written. The first
/// directory that cannot be created aborts with that path.
pub fn remap_paths(
    layout: &Layout,
    config: &mut dyn ConfigStore,
    fs: &dyn Filesystem,
) -> Result<(), ProviderError> {
    config.set(keys::GLIDE_CACHE_DRIVER, FILE_DRIVER);
    config.set(keys::SESSION_DRIVER, COOKIE_DRIVER);

    for mapping in layout.mappings() {
        ensure_directory_exists(fs, mapping.category.directory_for(&mapping.path))?;
        config.set(mapping.key, &mapping.path.to_string_lossy());
    }

    Ok(())
}
