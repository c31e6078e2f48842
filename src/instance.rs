//! Widget instance data: the flat field map the host persists per placement.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Field holding the widget block title.
pub const TITLE_FIELD: &str = "title";

/// Saved or submitted widget fields.
///
/// Empty values and absent keys are equivalent for [`WidgetInstance::get`].
/// Insertion order is preserved when serializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct WidgetInstance {
    fields: Vec<(String, String)>,
}

impl WidgetInstance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-empty value for a field
    pub fn get(&self, key: &str) -> Option<&str> {
        self.raw(key).filter(|v| !v.is_empty())
    }

    /// Stored value for a field, including empty strings
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Non-empty widget title
    pub fn title(&self) -> Option<&str> {
        self.get(TITLE_FIELD)
    }

    /// Set a field, replacing any previous value in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for WidgetInstance {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut instance = WidgetInstance::new();
        for (key, value) in iter {
            instance.set(key, value);
        }
        instance
    }
}

// Non-string values from a form post or a hand-edited file are treated as unset.
impl From<Map<String, Value>> for WidgetInstance {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect()
    }
}

impl Serialize for WidgetInstance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
