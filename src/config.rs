//! Configuration management for the provider binary
//!
//! Only the host-specific inputs are configurable. The storage roots are
//! compiled in (see [`crate::paths`]).

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Optional settings file in the working directory (`webslice.toml`)
const SETTINGS_FILE: &str = "webslice";

/// Prefix for environment overrides, e.g. `WEBSLICE_APP_PUBLIC_ROOT`
const ENV_PREFIX: &str = "WEBSLICE_APP";

/// Settings for running the provider outside the host framework
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderSettings {
    /// Public document root of the host application
    #[serde(default = "default_public_root")]
    pub public_root: String,

    /// Value of the host's image manipulation route, if it has one
    #[serde(default)]
    pub image_route: Option<String>,
}

fn default_public_root() -> String {
    "public".to_string()
}

impl ProviderSettings {
    /// Load settings from `webslice.toml` with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let settings: ProviderSettings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.public_root.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "public_root cannot be empty".into(),
            ));
        }
        Ok(())
    }

    /// Get public root as PathBuf
    pub fn public_root_path(&self) -> PathBuf {
        PathBuf::from(&self.public_root)
    }
}
