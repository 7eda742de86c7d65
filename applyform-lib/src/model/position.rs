//! Position the candidate applies for

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use super::Field;
use crate::error::ParseError;

/// The position selected in the form.
///
/// `Unset` is the empty "Select" option. It serializes as an empty string so
/// the record keeps the same shape whether or not a choice has been made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Position {
    #[default]
    Unset,
    Developer,
    Designer,
    Manager,
}

/// Conditional fields and the positions that activate them.
///
/// A conditional field is shown, and validated, only while the selected
/// position appears in its row.
const CONDITIONAL_FIELDS: &[(Field, &[Position])] = &[
    (
        Field::RelevantExperience,
        &[Position::Developer, Position::Designer],
    ),
    (Field::PortfolioUrl, &[Position::Designer]),
    (Field::ManagementExperience, &[Position::Manager]),
];

impl Position {
    /// All options in select-box order.
    pub const ALL: [Position; 4] = [
        Position::Unset,
        Position::Developer,
        Position::Designer,
        Position::Manager,
    ];

    /// The option value, empty for `Unset`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Developer => "Developer",
            Self::Designer => "Designer",
            Self::Manager => "Manager",
        }
    }

    /// The text shown in the select box.
    pub fn label(self) -> &'static str {
        match self {
            Self::Unset => "Select",
            other => other.as_str(),
        }
    }

    /// Returns `true` if a position has been chosen.
    pub fn is_set(self) -> bool {
        self != Self::Unset
    }

    /// Returns `true` if `field` is active for this position.
    ///
    /// Unconditional fields are always active.
    pub fn shows(self, field: Field) -> bool {
        match CONDITIONAL_FIELDS.iter().find(|(f, _)| *f == field) {
            Some((_, positions)) => positions.contains(&self),
            None => true,
        }
    }

    /// The next option, wrapping around.
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous option, wrapping around.
    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        match self {
            Self::Unset => 0,
            Self::Developer => 1,
            Self::Designer => 2,
            Self::Manager => 3,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseError::UnknownPosition(s.to_string()))
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
