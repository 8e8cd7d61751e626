//! Data attribute map
//!
//! data-* attribute access for rendered elements. Keys are stored verbatim
//! (kebab case), without the data- prefix.

use std::collections::HashMap;

/// String map backing an element's data-* attributes.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    data: HashMap<String, String>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(|s| s.as_str())
    }

    /// Set a value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    /// Remove a key, returning whether it was present
    pub fn remove(&mut self, key: &str) -> bool {
        self.data.remove(key).is_some()
    }

    /// Check if a key is present
    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Serialize to attribute pairs with the data- prefix
    pub fn to_attributes(&self) -> Vec<(String, String)> {
        let mut attrs: Vec<_> = self
            .data
            .iter()
            .map(|(k, v)| (format!("data-{k}"), v.clone()))
            .collect();
        attrs.sort();
        attrs
    }
}
