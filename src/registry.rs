//! Profile registry: ordered set of supported networks.
//!
//! Keys are unique. Registry order drives both the rendered link list and the
//! edit form.

use serde::{Deserialize, Serialize};

/// Built-in networks, in display order.
pub const DEFAULT_PROFILES: &[(&str, &str)] = &[
    ("feed", "Feed"),
    ("wordpress", "WordPress"),
    ("github", "GitHub"),
    ("googleplus", "Google+"),
    ("facebook", "Facebook"),
    ("twitter", "Twitter"),
];

/// A supported network: stable key plus display title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub key: String,
    pub title: String,
}

impl ProfileEntry {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
        }
    }
}

/// Ordered registry of profile entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ProfileEntry>", into = "Vec<ProfileEntry>")]
pub struct ProfileRegistry {
    entries: Vec<ProfileEntry>,
}

impl ProfileRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in networks
    pub fn defaults() -> Self {
        DEFAULT_PROFILES
            .iter()
            .map(|(key, title)| ProfileEntry::new(*key, *title))
            .collect()
    }

    /// Insert an entry. An existing key keeps its position and takes the new title.
    pub fn insert(&mut self, key: impl Into<String>, title: impl Into<String>) {
        let entry = ProfileEntry::new(key, title);
        match self.entries.iter_mut().find(|e| e.key == entry.key) {
            Some(existing) => existing.title = entry.title,
            None => self.entries.push(entry),
        }
    }

    /// Remove an entry by key
    pub fn remove(&mut self, key: &str) -> Option<ProfileEntry> {
        let index = self.entries.iter().position(|e| e.key == key)?;
        Some(self.entries.remove(index))
    }

    /// Move the listed keys to the front, in the given order.
    ///
    /// Unlisted entries follow in their current relative order; unknown keys
    /// are ignored.
    pub fn reorder<S: AsRef<str>>(&mut self, keys: &[S]) {
        let mut ordered = Vec::with_capacity(self.entries.len());
        for key in keys {
            if let Some(entry) = self.remove(key.as_ref()) {
                ordered.push(entry);
            }
        }
        ordered.append(&mut self.entries);
        self.entries = ordered;
    }

    pub fn get(&self, key: &str) -> Option<&ProfileEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProfileEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ProfileEntry> for ProfileRegistry {
    fn from_iter<I: IntoIterator<Item = ProfileEntry>>(iter: I) -> Self {
        let mut registry = ProfileRegistry::new();
        for entry in iter {
            registry.insert(entry.key, entry.title);
        }
        registry
    }
}

impl From<Vec<ProfileEntry>> for ProfileRegistry {
    fn from(entries: Vec<ProfileEntry>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<ProfileRegistry> for Vec<ProfileEntry> {
    fn from(registry: ProfileRegistry) -> Self {
        registry.entries
    }
}

impl<'a> IntoIterator for &'a ProfileRegistry {
    type Item = &'a ProfileEntry;
    type IntoIter = std::slice::Iter<'a, ProfileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
