use crate::error::NumeralCommonError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Visualization settings keyed by dotted setting names such as `scalar.decimals`.
///
/// Settings are layered: a base layer (e.g. settings derived from the data)
/// is overlaid by more specific layers (e.g. settings chosen by the user),
/// where the later layer wins key-by-key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(IndexMap<String, Value>);

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of settings
    pub fn from_json(json: &str) -> Result<Self, NumeralCommonError> {
        let value: Value = serde_json::from_str(json)?;
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(NumeralCommonError::SettingsNotAnObject(other.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up a setting, treating an explicit JSON `null` like a missing key
    pub fn get_non_null(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Look up a setting that is a non-empty string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn with<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Overlay `other` on top of this layer. Keys present in `other` replace
    /// the values in `self`; keys only in `self` are kept in their original position.
    pub fn overlay(mut self, other: &Settings) -> Self {
        for (key, value) in other.iter() {
            self.0.insert(key.clone(), value.clone());
        }
        self
    }

    /// Merge layers in order, later layers winning
    pub fn layered<'a, I: IntoIterator<Item = &'a Settings>>(layers: I) -> Self {
        layers
            .into_iter()
            .fold(Settings::new(), |merged, layer| merged.overlay(layer))
    }
}

impl FromIterator<(String, Value)> for Settings {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
