use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::Field;

/// Validation messages keyed by field.
///
/// A field without an entry is valid. Entries iterate in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorSet {
    errors: BTreeMap<Field, String>,
}

impl ErrorSet {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`, replacing any previous one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Get the message for `field`, if it failed validation.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Check if `field` failed validation.
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the first failing field in form order (for focusing).
    pub fn first(&self) -> Option<(Field, &str)> {
        self.iter().next()
    }

    /// Iterates over failing fields and their messages in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// The failing fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }
}
