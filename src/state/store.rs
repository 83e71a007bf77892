//! Insertion-ordered form state store
//!
//! Sections and fields are keyed by their stable identifiers and iterate in
//! the order they were first touched, which is also the export order.

use super::field::FieldValue;
use indexmap::IndexMap;

/// Accumulated form values, keyed by section id then field key
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    sections: IndexMap<String, IndexMap<String, FieldValue>>,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a field value. Absent sections and fields are "no value", never
    /// an error.
    pub fn get(&self, section: &str, key: &str) -> Option<&FieldValue> {
        self.sections.get(section).and_then(|fields| fields.get(key))
    }

    /// Write a field value, overwriting any previous one (last write wins).
    /// The section entry is created lazily on first write.
    pub fn set(&mut self, section: &str, key: &str, value: FieldValue) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    /// Count sections holding at least one truthy field, for the sidebar
    /// progress indicator.
    pub fn completed_sections(&self) -> usize {
        self.sections
            .values()
            .filter(|fields| fields.values().any(FieldValue::is_truthy))
            .count()
    }

    /// Sections in the order they were first touched
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexMap<String, FieldValue>)> {
        self.sections.iter().map(|(id, fields)| (id.as_str(), fields))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
