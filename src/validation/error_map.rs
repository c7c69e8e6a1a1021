//! Per-field validation messages

use crate::state::FieldName;
use serde::Serialize;
use std::collections::BTreeMap;

/// Mapping from field to its current validation message.
///
/// A valid field has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<FieldName, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one field's rule: a message sets the entry, `None` clears it
    pub fn set(&mut self, field: FieldName, error: Option<&str>) {
        match error {
            Some(message) if !message.is_empty() => {
                self.0.insert(field, message.to_string());
            }
            _ => {
                self.0.remove(&field);
            }
        }
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Drop every entry for which `keep` returns false
    pub fn retain(&mut self, mut keep: impl FnMut(FieldName) -> bool) {
        self.0.retain(|field, _| keep(*field));
    }

    /// Fields with an entry, in display order
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    /// Entries as `(field, message)`, in display order
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}
