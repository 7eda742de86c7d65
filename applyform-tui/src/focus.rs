use applyform_lib::model::{Field, Skill};

/// A focusable widget of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetId {
    /// Single- or multi-line text input bound to a record field.
    Text(Field),
    /// The position select.
    Position,
    /// One skill checkbox.
    Skill(Skill),
    /// The interview time picker.
    InterviewTime,
    Submit,
}

impl WidgetId {
    /// The record field this widget edits, if any.
    pub fn field(self) -> Option<Field> {
        match self {
            Self::Text(field) => Some(field),
            Self::Position => Some(Field::Position),
            Self::Skill(_) => Some(Field::AdditionalSkills),
            Self::InterviewTime => Some(Field::InterviewTime),
            Self::Submit => None,
        }
    }

    /// The widgets that edit `field`, in tab order.
    pub fn for_field(field: Field) -> Vec<WidgetId> {
        match field {
            Field::Position => vec![Self::Position],
            Field::AdditionalSkills => Skill::ALL.into_iter().map(Self::Skill).collect(),
            Field::InterviewTime => vec![Self::InterviewTime],
            other => vec![Self::Text(other)],
        }
    }
}

/// Tracks which widget is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<WidgetId>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused widget.
    pub fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    /// Programmatically focus a widget.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: WidgetId) -> bool {
        if self.focused == Some(id) {
            return false;
        }
        self.focused = Some(id);
        true
    }

    /// Clear focus.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Focus the next widget in `order`, wrapping around.
    /// Returns the newly focused widget if focus changed.
    pub fn focus_next(&mut self, order: &[WidgetId]) -> Option<WidgetId> {
        if order.is_empty() {
            return None;
        }

        let new_focus = match self.focused {
            None => order[0],
            Some(current) => match order.iter().position(|id| *id == current) {
                Some(i) => order[(i + 1) % order.len()],
                None => order[0],
            },
        };

        self.focus(new_focus).then_some(new_focus)
    }

    /// Focus the previous widget in `order`, wrapping around.
    /// Returns the newly focused widget if focus changed.
    pub fn focus_prev(&mut self, order: &[WidgetId]) -> Option<WidgetId> {
        if order.is_empty() {
            return None;
        }

        let last = order[order.len() - 1];
        let new_focus = match self.focused {
            None => last,
            Some(current) => match order.iter().position(|id| *id == current) {
                Some(0) | None => last,
                Some(i) => order[i - 1],
            },
        };

        self.focus(new_focus).then_some(new_focus)
    }
}
