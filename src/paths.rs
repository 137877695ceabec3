//! Storage layout
//!
//! Where each redirected configuration key points, relative to the two
//! storage roots of a serverless instance.

use std::path::{Path, PathBuf};

use crate::store::keys;

/// Instance-local storage, discarded on redeploy
pub const TEMP_PATH: &str = "/tmp/storage";

/// Storage mounted across instances and deployments
pub const SHARED_PATH: &str = "/mnt/data/website/shared";

/// Persistent home of the image manipulation cache, under the shared root
const IMAGE_CACHE_SUFFIX: &str = "public/glide-cache";

/// How the directory for a mapped path is prepared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCategory {
    /// Instance-local directory, created as-is
    Ephemeral,
    /// Shared file, its parent directory is created
    SharedFile,
    /// Shared directory, created as-is
    SharedDir,
}

impl PathCategory {
    /// Directory that must exist before `path` is handed to the host
    pub fn directory_for<'a>(&self, path: &'a Path) -> &'a Path {
        match self {
            PathCategory::Ephemeral | PathCategory::SharedDir => path,
            PathCategory::SharedFile => path.parent().unwrap_or(path),
        }
    }
}

/// One redirected configuration key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapping {
    pub key: &'static str,
    pub path: PathBuf,
    pub category: PathCategory,
}

/// Relative suffixes per category, in processing order
const MAPPINGS: [(&str, &str, PathCategory); 7] = [
    (keys::FILE_CACHE_PATH, "framework/cache/data", PathCategory::Ephemeral),
    (keys::COMPILED_VIEWS, "framework/views", PathCategory::Ephemeral),
    (keys::GLIDE_CACHE_PATH, "framework/cache/glide", PathCategory::Ephemeral),
    (keys::LOG_SINGLE_PATH, "logs/laravel.log", PathCategory::SharedFile),
    (keys::LOG_DAILY_PATH, "logs/laravel.log", PathCategory::SharedFile),
    (keys::LOG_EMERGENCY_PATH, "logs/laravel.log", PathCategory::SharedFile),
    (keys::FORM_SUBMISSIONS, "form-submissions", PathCategory::SharedDir),
];

/// Roots the provider works under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub temp_root: PathBuf,
    pub shared_root: PathBuf,
    pub public_root: PathBuf,
}

impl Layout {
    /// The fixed serverless roots, with the host's public document root
    pub fn webslice(public_root: impl Into<PathBuf>) -> Self {
        Self::new(TEMP_PATH, SHARED_PATH, public_root)
    }

    pub fn new(
        temp_root: impl Into<PathBuf>,
        shared_root: impl Into<PathBuf>,
        public_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            temp_root: temp_root.into(),
            shared_root: shared_root.into(),
            public_root: public_root.into(),
        }
    }

    /// Every redirected key with its absolute path
    pub fn mappings(&self) -> Vec<PathMapping> {
        MAPPINGS
            .iter()
            .map(|&(key, suffix, category)| {
                let root = match category {
                    PathCategory::Ephemeral => &self.temp_root,
                    PathCategory::SharedFile | PathCategory::SharedDir => &self.shared_root,
                };
                PathMapping {
                    key,
                    path: root.join(suffix),
                    category,
                }
            })
            .collect()
    }

    /// Shared directory the image cache route should resolve to
    pub fn image_cache_target(&self) -> PathBuf {
        self.shared_root.join(IMAGE_CACHE_SUFFIX)
    }

    /// Public path for a route; leading separators on the route are ignored
    pub fn public_path(&self, route: &str) -> PathBuf {
        let route = route.trim_start_matches(['/', '\\']);
        if route.is_empty() {
            self.public_root.clone()
        } else {
            self.public_root.join(route)
        }
    }
}
