//! Webslice provider
//!
//! Reconfigures a host application for a serverless instance whose root
//! filesystem is read-only. Runs once at startup, before the host serves
//! anything.

pub mod image_cache;
pub mod remap;

pub use image_cache::{LinkOutcome, setup_image_cache_link};
pub use remap::remap_paths;

use crate::env::EnvSource;
use crate::error::ProviderError;
use crate::gate::{self, GateDecision};
use crate::paths::Layout;
use crate::storage::Filesystem;
use crate::store::ConfigStore;
use crate::utils::Reporter;

/// Result of a successful registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The gate declined; nothing was touched
    Skipped(GateDecision),
    /// Paths were remapped; carries what happened to the image route
    Configured(LinkOutcome),
}

impl Registration {
    pub fn is_configured(&self) -> bool {
        matches!(self, Registration::Configured(_))
    }
}

/// Startup hook wiring the gate, path remapping and the image cache link
pub struct WebsliceProvider<'a> {
    layout: Layout,
    fs: &'a dyn Filesystem,
    reporter: &'a dyn Reporter,
}

impl<'a> WebsliceProvider<'a> {
    pub fn new(layout: Layout, fs: &'a dyn Filesystem, reporter: &'a dyn Reporter) -> Self {
        Self {
            layout,
            fs,
            reporter,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Run the provider if the environment asks for it.
    ///
    /// An `Err` means a required directory is missing and the host must
    /// not start.
    pub fn register(
        &self,
        env: &dyn EnvSource,
        config: &mut dyn ConfigStore,
    ) -> Result<Registration, ProviderError> {
        let decision = gate::check(env, self.reporter);
        if !decision.is_active() {
            return Ok(Registration::Skipped(decision));
        }

        self.configure(config).map(Registration::Configured)
    }

    /// Remap storage paths, then set up the image cache link
    pub fn configure(&self, config: &mut dyn ConfigStore) -> Result<LinkOutcome, ProviderError> {
        remap_paths(&self.layout, config, self.fs)?;
        Ok(setup_image_cache_link(
            &self.layout,
            config,
            self.fs,
            self.reporter,
        ))
    }
}
