//! Parse error types

/// Errors that can occur when parsing form values from their names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The value is not one of the selectable positions.
    #[error("Unknown position: '{0}'")]
    UnknownPosition(String),

    /// The value is not one of the fixed skills.
    #[error("Unknown skill: '{0}'")]
    UnknownSkill(String),

    /// The value is not a form field name.
    #[error("Unknown field: '{0}'")]
    UnknownField(String),
}
