//! Shared key/value space that presets and configuration code write into.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::collections::BTreeMap;

use crate::manager::ConfigError;

/// Configuration values produced by a scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Context {
    values: BTreeMap<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get a value that an earlier preset or the configuration body must have set.
    pub fn require(&self, key: &str) -> Result<&Value, ConfigError> {
        self.values
            .get(key)
            .ok_or_else(|| ConfigError::MissingContextKey(key.to_string()))
    }

    /// Get a required value and deserialize it into `T`.
    pub fn require_as<T: DeserializeOwned>(&self, key: &str) -> Result<T, ConfigError> {
        let value = self.require(key)?.clone();
        serde_yaml::from_value(value).map_err(|e| ConfigError::InvalidContextValue {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.values
    }
}

impl Extend<(String, Value)> for Context {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl FromIterator<(String, Value)> for Context {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Context {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
