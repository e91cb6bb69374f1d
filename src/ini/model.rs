// src/ini/model.rs

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::errors::{IniError, Result};

/// Name of the implicit section that holds key/value lines appearing before
/// any `[section]` header.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// An INI file held in memory.
///
/// Sections are kept in the order their headers first appeared. Every name in
/// `section_order` has exactly one entry in `sections` and vice versa.
///
/// ```ini
/// app_mode = development
///
/// [server]
/// port = 9999
/// ```
///
/// yields the section order `["DEFAULT", "server"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    section_order: Vec<String>,
    sections: HashMap<String, Section>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new, empty section and return it.
    ///
    /// Fails on an empty name or a name that is already present; on failure
    /// neither the order nor the mapping is touched.
    pub fn new_section(&mut self, name: &str) -> Result<&mut Section> {
        if name.is_empty() {
            return Err(IniError::EmptySectionName);
        }
        if self.sections.contains_key(name) {
            return Err(IniError::DuplicateSection(name.to_string()));
        }
        self.section_order.push(name.to_string());
        Ok(self.sections.entry(name.to_string()).or_default())
    }

    /// Section names in order of first appearance.
    pub fn section_names(&self) -> &[String] {
        &self.section_order
    }

    /// Look up a section by its exact name. There is no fallback to the
    /// default section; ask for `DEFAULT_SECTION` explicitly.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub(crate) fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Convenience: value of `key` inside `section`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// Iterate `(name, section)` pairs in section order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.section_order
            .iter()
            .filter_map(|name| self.sections.get(name).map(|s| (name.as_str(), s)))
    }

    pub fn len(&self) -> usize {
        self.section_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.section_order.is_empty()
    }
}

impl Serialize for Config {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, section) in self.sections() {
            map.serialize_entry(name, section)?;
        }
        map.end()
    }
}

/// Key/value pairs of a single section. Keys are unique; inserting an
/// existing key fails instead of overwriting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Section {
    entries: BTreeMap<String, String>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key/value pair. No trimming happens here; the parser hands
    /// over already normalised text. Empty keys are accepted.
    pub fn new_entry(&mut self, key: &str, value: &str) -> Result<()> {
        if self.entries.contains_key(key) {
            return Err(IniError::DuplicateKey(key.to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(key, value)` pairs, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
