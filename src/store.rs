//! Host configuration store
//!
//! The host keeps a dotted-key configuration map. The provider only ever
//! reads one key and overwrites a handful of others.

use std::collections::BTreeMap;

/// Configuration keys the provider reads or writes
pub mod keys {
    pub const GLIDE_CACHE_DRIVER: &str = "cache.stores.glide.driver";
    pub const SESSION_DRIVER: &str = "session.driver";

    pub const FILE_CACHE_PATH: &str = "cache.stores.file.path";
    pub const COMPILED_VIEWS: &str = "view.compiled";
    pub const GLIDE_CACHE_PATH: &str = "cache.stores.glide.path";

    pub const LOG_SINGLE_PATH: &str = "logging.channels.single.path";
    pub const LOG_DAILY_PATH: &str = "logging.channels.daily.path";
    pub const LOG_EMERGENCY_PATH: &str = "logging.channels.emergency.path";

    pub const FORM_SUBMISSIONS: &str = "statamic.forms.submissions";

    pub const IMAGE_ROUTE: &str = "statamic.assets.image_manipulation.route";
    pub const IMAGE_CACHE_PATH: &str = "statamic.assets.image_manipulation.cache_path";
}

/// Driver values forced regardless of paths
pub const FILE_DRIVER: &str = "file";
pub const COOKIE_DRIVER: &str = "cookie";

/// Key-value access to the host configuration
pub trait ConfigStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, ordered by key
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryConfigStore {
    values: BTreeMap<String, String>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
