use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

/// Declared fallback values for a factory's options
///
/// Maps option keys to well-known service references. Immutable once
/// built; factories return a fresh value from a pure associated function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultOptions(BTreeMap<String, String>);

impl DefaultOptions {
    /// Create an empty set of defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a default value for `key`
    pub fn with(mut self, key: impl Into<String>, reference: impl Into<String>) -> Self {
        self.0.insert(key.into(), reference.into());
        self
    }

    /// Default reference for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether a default exists for `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate `(key, reference)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of declared defaults
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no defaults are declared
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DefaultOptions {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Options resolved for one identifier
///
/// Explicit configuration merged over [`DefaultOptions`]. Keys beyond the
/// declared defaults are passed through untouched; nothing validates them
/// against a schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OptionsBag(BTreeMap<String, Value>);

impl OptionsBag {
    /// Bag holding exactly the defaults
    pub fn from_defaults(defaults: &DefaultOptions) -> Self {
        Self(
            defaults
                .iter()
                .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
                .collect(),
        )
    }

    /// Overlay explicit entries, replacing defaults key by key
    pub fn merge(mut self, explicit: &Map<String, Value>) -> Self {
        for (key, value) in explicit {
            self.0.insert(key.clone(), value.clone());
        }
        self
    }

    /// Raw value for `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Value for `key` when it is a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Whether the bag has a value for `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of resolved options
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the bag is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
