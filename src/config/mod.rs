//! Configuration collaborator
//!
//! The catalog only ever reads single keys, so the interface is a flat
//! key/value store. Hosts with richer configuration systems implement
//! [`ConfigStore`] over whatever they already have; [`MemoryConfig`] and
//! the TOML-file [`Settings`] cover embedding and standalone use.

mod loader;

pub use loader::load_settings;
pub use loader::load_settings_from;
pub use loader::Settings;

use std::collections::HashMap;

/// Read-only key/value configuration access
pub trait ConfigStore: Send + Sync {
    /// Get the value for `key`, or `default` when the key is unset
    fn get(&self, key: &str, default: &str) -> String;
}

/// In-memory configuration store
#[derive(Debug, Clone, Default)]
pub struct MemoryConfig {
    values: HashMap<String, String>,
}

impl MemoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl ConfigStore for MemoryConfig {
    fn get(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}
