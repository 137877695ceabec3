//! Environment access
//!
//! Flags are read through [`EnvSource`] so the gate can be driven from a
//! plain map in tests instead of the process environment.

use std::collections::HashMap;

/// Read-only view of environment variables
pub trait EnvSource {
    /// Raw value of `key`, or `None` when unset
    fn var(&self, key: &str) -> Option<String>;

    /// Whether `key` is set to a truthy value
    fn flag(&self, key: &str) -> bool {
        self.var(key).as_deref().is_some_and(is_truthy)
    }
}

/// The real process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed set of variables
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Values the host framework treats as false once an env var is read
const FALSY_VALUES: [&str; 8] = [
    "", "0", "false", "(false)", "null", "(null)", "empty", "(empty)",
];

/// Framework truthiness for an environment value
pub fn is_truthy(value: &str) -> bool {
    let value = value.trim().to_ascii_lowercase();
    !FALSY_VALUES.contains(&value.as_str())
}
