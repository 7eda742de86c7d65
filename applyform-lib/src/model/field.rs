//! Form field keys

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ParseError;

/// A key of the application form.
///
/// Fields are declared in form order, so sorting by `Field` yields the order
/// in which the inputs appear on screen. Error messages are attached to these
/// keys, with `AdditionalSkills` standing for the whole skill group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    PhoneNumber,
    Position,
    RelevantExperience,
    PortfolioUrl,
    ManagementExperience,
    AdditionalSkills,
    InterviewTime,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 9] = [
        Field::FullName,
        Field::Email,
        Field::PhoneNumber,
        Field::Position,
        Field::RelevantExperience,
        Field::PortfolioUrl,
        Field::ManagementExperience,
        Field::AdditionalSkills,
        Field::InterviewTime,
    ];

    /// The record key of this field.
    pub fn name(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::Position => "position",
            Self::RelevantExperience => "relevantExperience",
            Self::PortfolioUrl => "portfolioUrl",
            Self::ManagementExperience => "managementExperience",
            Self::AdditionalSkills => "additionalSkills",
            Self::InterviewTime => "interviewTime",
        }
    }

    /// The label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::Position => "Applying for Position",
            Self::RelevantExperience => "Relevant Experience (years)",
            Self::PortfolioUrl => "Portfolio URL",
            Self::ManagementExperience => "Management Experience",
            Self::AdditionalSkills => "Additional Skills",
            Self::InterviewTime => "Preferred Interview Time",
        }
    }

    /// Returns `true` if the field holds free text.
    ///
    /// `Position` is an enumerated choice and `AdditionalSkills` is a set of
    /// checkboxes; everything else is edited as a string.
    pub fn is_text(self) -> bool {
        !matches!(self, Self::Position | Self::AdditionalSkills)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| ParseError::UnknownField(s.to_string()))
    }
}
