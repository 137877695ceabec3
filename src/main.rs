//! Webslice provider - Entry Point
//!
//! Runs the provider against the real filesystem and prints the resulting
//! configuration overrides as `key=value` lines for the host to pick up.

use log::{debug, info};
use std::process;

use webslice_provider::config::ProviderSettings;
use webslice_provider::env::ProcessEnv;
use webslice_provider::error::handlers::{error_to_exit_code, handle_error};
use webslice_provider::error::ProviderError;
use webslice_provider::paths::Layout;
use webslice_provider::storage::OsFilesystem;
use webslice_provider::store::{ConfigStore, MemoryConfigStore, keys};
use webslice_provider::utils::{LogReporter, setup_logging};
use webslice_provider::{Registration, WebsliceProvider};

fn run() -> Result<MemoryConfigStore, ProviderError> {
    let settings = ProviderSettings::load()?;
    debug!("Loaded settings: {:?}", settings);

    let mut config = MemoryConfigStore::new();
    if let Some(route) = &settings.image_route {
        config.set(keys::IMAGE_ROUTE, route);
    }
    let seeded = config.clone();

    let fs = OsFilesystem;
    let reporter = LogReporter;
    let provider = WebsliceProvider::new(Layout::webslice(settings.public_root_path()), &fs, &reporter);

    match provider.register(&ProcessEnv, &mut config)? {
        Registration::Skipped(_) => Ok(MemoryConfigStore::new()),
        Registration::Configured(outcome) => {
            info!("Webslice provider configured (image cache linked: {})", outcome.is_linked());
            let mut overrides = MemoryConfigStore::new();
            for (key, value) in config.iter() {
                if seeded.get(key).as_deref() != Some(value) {
                    overrides.set(key, value);
                }
            }
            Ok(overrides)
        }
    }
}

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    setup_logging();

    match run() {
        Ok(overrides) => {
            for (key, value) in overrides.iter() {
                println!("{key}={value}");
            }
        }
        Err(e) => {
            handle_error(&e);
            process::exit(error_to_exit_code(&e));
        }
    }
}
