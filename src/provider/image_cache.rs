//! Image manipulation cache link
//!
//! Keeps generated images on the shared mount and exposes them under the
//! host's public image route through a symlink. Nothing in here aborts
//! startup: without the link, images are regenerated on demand.

use std::path::PathBuf;

use crate::paths::Layout;
use crate::storage::{Filesystem, ensure_directory_exists};
use crate::store::{ConfigStore, keys};
use crate::utils::Reporter;

/// What happened to the public image route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The host has no image route configured
    RouteUnset,
    /// The correct symlink was already in place
    AlreadyLinked { link: PathBuf, target: PathBuf },
    /// Something else occupies the link path and was left alone
    Conflict { link: PathBuf },
    /// A directory or the symlink could not be created
    Failed { link: PathBuf, reason: String },
    Created { link: PathBuf, target: PathBuf },
}

impl LinkOutcome {
    /// Whether the route now serves the shared cache
    pub fn is_linked(&self) -> bool {
        matches!(
            self,
            LinkOutcome::AlreadyLinked { .. } | LinkOutcome::Created { .. }
        )
    }
}

/// Route values the host treats as empty
fn route_is_unset(route: Option<&str>) -> bool {
    match route.map(str::trim) {
        None | Some("") | Some("0") => true,
        Some(_) => false,
    }
}

/// Point the image cache at shared storage and link the public route to it
pub fn setup_image_cache_link(
    layout: &Layout,
    config: &mut dyn ConfigStore,
    fs: &dyn Filesystem,
    reporter: &dyn Reporter,
) -> LinkOutcome {
    let route = config.get(keys::IMAGE_ROUTE);
    if route_is_unset(route.as_deref()) {
        reporter.debug("WebsliceProvider: image manipulation cache route is not set, skipping setup");
        return LinkOutcome::RouteUnset;
    }
    let route = route.unwrap_or_default();

    let target = layout.image_cache_target();
    let link = layout.public_path(&route);

    config.set(keys::IMAGE_CACHE_PATH, &target.to_string_lossy());

    for path in [&target, &link] {
        let Some(parent) = path.parent() else {
            continue;
        };
        if let Err(e) = ensure_directory_exists(fs, parent) {
            reporter.error(&e.to_string());
            return LinkOutcome::Failed {
                link: link.clone(),
                reason: e.to_string(),
            };
        }
    }

    if fs.read_link(&link).as_deref() == Some(target.as_path()) {
        return LinkOutcome::AlreadyLinked { link, target };
    }

    if fs.exists(&link) {
        reporter.error(&format!(
            "WebsliceProvider: Link [{}] already exists, not creating symlink",
            link.display()
        ));
        return LinkOutcome::Conflict { link };
    }

    match fs.symlink(&target, &link) {
        Ok(()) => {
            reporter.info(&format!(
                "WebsliceProvider: Created symlink from [{}] to [{}]",
                link.display(),
                target.display()
            ));
            LinkOutcome::Created { link, target }
        }
        Err(e) => {
            reporter.error(&format!(
                "WebsliceProvider: Could not create symlink from [{}] to [{}]: {}",
                link.display(),
                target.display(),
                e
            ));
            LinkOutcome::Failed {
                link,
                reason: e.to_string(),
            }
        }
    }
}
