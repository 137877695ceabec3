//! Error handling
//!
//! Defines the fatal error tier raised while configuring the host.

pub mod handlers;
pub mod types;

pub use types::*;
