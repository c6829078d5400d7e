// Auxiliary tenant data bag
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;

/// Free-form tenant reference data, keyed by identifiers agreed out of band
/// between the tenant package and its components.
///
/// Absent keys and shape mismatches degrade to empty/`None`; nothing in here
/// can fail a bundle.
#[derive(Debug, Clone, Default)]
pub struct CustomData {
    entries: BTreeMap<String, Value>,
}

impl CustomData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Deserializes the value under `key` into `T`. Absent key or a value of
    /// the wrong shape both read as `None`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.entries.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("custom data entry {} has unexpected shape: {}", key, e);
                None
            }
        }
    }

    /// Reference-list accessor: absent key yields an empty list.
    pub fn get_strings(&self, key: &str) -> Vec<String> {
        self.get_as(key).unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
