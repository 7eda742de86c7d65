//! Form session: the record being edited and its current errors.

use crate::error::FormError;
use crate::model::{Field, FormRecord, Position, Skill};
use crate::submission::Submission;
use crate::validation::{ErrorSet, validate};

/// The single in-progress application.
///
/// Every mutation re-runs the validator, so [`errors`](Self::errors) always
/// describes the current record.
#[derive(Debug, Clone)]
pub struct FormSession {
    record: FormRecord,
    errors: ErrorSet,
}

impl FormSession {
    /// Creates a session with an empty record.
    pub fn new() -> Self {
        Self::from_record(FormRecord::new())
    }

    /// Creates a session around an existing record.
    pub fn from_record(record: FormRecord) -> Self {
        let errors = validate(&record);
        Self { record, errors }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// Get the current message for `field`, if it is invalid.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Replace the text of `field`.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        let slot = self
            .record
            .text_mut(field)
            .ok_or_else(|| FormError::not_a_text_field(field))?;
        *slot = value.into();
        log::debug!("Field {} changed", field);
        self.revalidate();
        Ok(())
    }

    pub fn set_position(&mut self, position: Position) {
        self.record.position = position;
        log::debug!("Position changed to {:?}", position);
        self.revalidate();
    }

    pub fn set_skill(&mut self, skill: Skill, selected: bool) {
        self.record.additional_skills.set(skill, selected);
        log::debug!("Skill {} set to {}", skill, selected);
        self.revalidate();
    }

    /// Flip `skill` and return its new state.
    pub fn toggle_skill(&mut self, skill: Skill) -> bool {
        let selected = self.record.additional_skills.toggle(skill);
        log::debug!("Skill {} toggled to {}", skill, selected);
        self.revalidate();
        selected
    }

    /// Fields shown for the current position, in form order.
    pub fn visible_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.record.position.shows(*field))
            .collect()
    }

    /// Validate the current record and surface it if it has no errors.
    ///
    /// The error set is recomputed here rather than read from the last
    /// change, so the decision always reflects the record being submitted.
    pub fn submit(&mut self) -> Result<Submission, FormError> {
        self.revalidate();
        if self.errors.is_empty() {
            log::info!("Application submitted for position {:?}", self.record.position);
            Ok(Submission::new(self.record.clone()))
        } else {
            log::info!(
                "Submission rejected with {} invalid field(s): {:?}",
                self.errors.len(),
                self.errors.fields().collect::<Vec<_>>()
            );
            Err(FormError::Invalid(self.errors.clone()))
        }
    }

    /// Discard every value and start over.
    pub fn reset(&mut self) {
        log::debug!("Form reset");
        self.record = FormRecord::new();
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.record);
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}
