//! Webslice provider
//!
//! Startup hook that redirects a host application's writable storage to
//! the ephemeral and shared mounts of a serverless instance, and links the
//! public image cache route to shared storage.

pub mod config;
pub mod env;
pub mod error;
pub mod gate;
pub mod paths;
pub mod provider;
pub mod storage;
pub mod store;
pub mod utils;

#[cfg(test)]
mod testing;

pub use error::ProviderError;
pub use provider::{LinkOutcome, Registration, WebsliceProvider};
