//! Form session error types

use crate::model::Field;
use crate::validation::ErrorSet;

/// Errors returned by [`FormSession`](crate::FormSession) operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    /// A text value was written to a field that is not edited as text.
    #[error("Field '{field}' is not a text field")]
    NotATextField { field: Field },

    /// Submission was rejected because the record has validation errors.
    #[error("Form has {} invalid field(s)", .0.len())]
    Invalid(ErrorSet),
}

impl FormError {
    /// Creates a new not-a-text-field error.
    pub fn not_a_text_field(field: Field) -> Self {
        Self::NotATextField { field }
    }

    /// Returns the validation errors if this is a rejected submission.
    pub fn errors(&self) -> Option<&ErrorSet> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}
