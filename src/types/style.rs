//! Style tables built from attribute directives.
//!
//! Each region or path type may carry fill attributes (`forest attributes
//! fill="green"`), stroke attributes for splines (`road path attributes
//! ...`) and a raw path geometry for its icon (`tree path M ...`). The
//! text, glow and label directives each hold a single attribute map.

use std::collections::HashMap;

/// An ordered list of SVG attributes.
///
/// Setting an existing key replaces its value in place, so the first
/// occurrence decides the position and the last decides the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, overwriting any earlier value for the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Append every entry of `other`, overwriting shared keys.
    pub fn extend_from(&mut self, other: &Attributes) {
        for (k, v) in other.iter() {
            self.set(k, v);
        }
    }

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

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attributes = Attributes::new();
        for (k, v) in iter {
            attributes.set(k, v);
        }
        attributes
    }
}

/// All styling collected from a map source.
#[derive(Debug, Clone, Default)]
pub struct StyleTables {
    /// Fill attributes per type. Types listed here render as backgrounds.
    pub attributes: HashMap<String, Attributes>,
    /// Stroke attributes per spline type.
    pub path_attributes: HashMap<String, Attributes>,
    /// Raw path geometry (`d` strings) per type.
    pub paths: HashMap<String, String>,
    pub text: Attributes,
    pub glow: Attributes,
    pub label: Attributes,
}

impl StyleTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a type renders as a background fill.
    pub fn is_background(&self, kind: &str) -> bool {
        self.attributes.contains_key(kind)
    }

    /// Attributes for the base outline drawn under every region.
    pub fn default_attributes(&self) -> Option<&Attributes> {
        self.attributes.get("default")
    }
}
