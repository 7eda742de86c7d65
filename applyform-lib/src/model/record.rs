//! The application form record

use serde::Deserialize;
use serde::Serialize;

use super::Field;
use super::Position;
use super::SkillSet;

/// All values entered into the application form.
///
/// Created empty when the form opens and edited one field at a time. Text
/// fields hold the raw input; numeric fields are only interpreted by the
/// validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub position: Position,
    pub relevant_experience: String,
    pub portfolio_url: String,
    pub management_experience: String,
    pub additional_skills: SkillSet,
    pub interview_time: String,
}

impl FormRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the text value of `field`, or `None` for non-text fields.
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::RelevantExperience => &self.relevant_experience,
            Field::PortfolioUrl => &self.portfolio_url,
            Field::ManagementExperience => &self.management_experience,
            Field::InterviewTime => &self.interview_time,
            Field::Position | Field::AdditionalSkills => return None,
        };
        Some(value)
    }

    /// Returns a mutable reference to the text value of `field`.
    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        let value = match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::PhoneNumber => &mut self.phone_number,
            Field::RelevantExperience => &mut self.relevant_experience,
            Field::PortfolioUrl => &mut self.portfolio_url,
            Field::ManagementExperience => &mut self.management_experience,
            Field::InterviewTime => &mut self.interview_time,
            Field::Position | Field::AdditionalSkills => return None,
        };
        Some(value)
    }
}
