//! Form application state and key handling.

use std::collections::HashSet;

use applyform_lib::error::FormError;
use applyform_lib::model::{Field, Position};
use applyform_lib::{FormSession, Submission};
use chrono::NaiveDateTime;

use crate::event::{Key, KeyInput};
use crate::focus::{FocusState, WidgetId};
use crate::widgets::{
    DateTimePicker, PickerResult, TextEditResult, TextInputData, TextInputState,
};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What the terminal currently shows.
#[derive(Debug, Clone)]
pub enum Screen {
    Form,
    /// The accepted application, shown until the next key press.
    Submitted(Submission),
}

/// The application form bound to terminal widgets.
///
/// Every edit is written straight into the [`FormSession`], which revalidates
/// the whole record. Which errors are *displayed* is decided here: a field's
/// message appears once the field was edited or left, or after a submit
/// attempt.
pub struct FormApp {
    session: FormSession,
    inputs: TextInputState,
    picker: DateTimePicker,
    focus: FocusState,
    touched: HashSet<Field>,
    submit_attempted: bool,
    show_untouched: bool,
    screen: Screen,
    status: Option<String>,
}

impl FormApp {
    /// Creates an empty form with the first input focused.
    ///
    /// With `show_untouched`, every current error is displayed from the start.
    pub fn new(show_untouched: bool) -> Self {
        let mut app = Self {
            session: FormSession::new(),
            inputs: TextInputState::new(),
            picker: DateTimePicker::new(),
            focus: FocusState::new(),
            touched: HashSet::new(),
            submit_attempted: false,
            show_untouched,
            screen: Screen::Form,
            status: None,
        };
        app.focus_first();
        app
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn focused(&self) -> Option<WidgetId> {
        self.focus.focused()
    }

    pub fn picker(&self) -> &DateTimePicker {
        &self.picker
    }

    /// Message for the status line, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Editing buffer of a text field.
    pub fn text_data(&self, field: Field) -> TextInputData {
        match self.inputs.get_data(field) {
            Some(data) => data.clone(),
            None => TextInputData::new(self.session.record().text(field).unwrap_or_default()),
        }
    }

    /// The error to display under `field`, if any.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        let shown = self.show_untouched || self.submit_attempted || self.touched.contains(&field);
        if shown { self.session.error(field) } else { None }
    }

    /// Focusable widgets for the current position, in tab order.
    pub fn widget_order(&self) -> Vec<WidgetId> {
        let mut order: Vec<WidgetId> = self
            .session
            .visible_fields()
            .into_iter()
            .flat_map(WidgetId::for_field)
            .collect();
        order.push(WidgetId::Submit);
        order
    }

    /// Handle one key press. `now` seeds the interview time picker.
    pub fn handle_key(&mut self, input: KeyInput, now: NaiveDateTime) -> Flow {
        if let Screen::Submitted(_) = self.screen {
            self.screen = Screen::Form;
            self.reset();
            return Flow::Continue;
        }

        if input.key == Key::Escape || input.is_ctrl('c') {
            log::info!("Quit requested");
            return Flow::Quit;
        }
        if input.is_ctrl('s') {
            self.submit();
            return Flow::Continue;
        }
        if input.is_ctrl('r') {
            self.reset();
            self.status = Some("Form reset".to_string());
            return Flow::Continue;
        }

        match input.key {
            Key::Tab => {
                self.focus_next();
                return Flow::Continue;
            }
            Key::BackTab => {
                self.focus_prev();
                return Flow::Continue;
            }
            _ => {}
        }

        if !self.dispatch(input, now) {
            match input.key {
                Key::Down => self.focus_next(),
                Key::Up => self.focus_prev(),
                _ => {}
            }
        }

        Flow::Continue
    }

    /// Send a key to the focused widget. Returns true if it was consumed.
    fn dispatch(&mut self, input: KeyInput, now: NaiveDateTime) -> bool {
        let Some(focused) = self.focus.focused() else {
            return false;
        };

        match focused {
            WidgetId::Text(field) => {
                let multiline = field == Field::ManagementExperience;
                let data = self.inputs.get_data_mut(field);
                match data.handle_key(input, multiline) {
                    TextEditResult::Changed => {
                        let text = data.text.clone();
                        self.write_text(field, text);
                        true
                    }
                    TextEditResult::Submitted => {
                        self.submit();
                        true
                    }
                    TextEditResult::Handled => true,
                    TextEditResult::Ignored => false,
                }
            }

            WidgetId::Position => {
                let current = self.session.record().position;
                let next = match input.key {
                    Key::Left => current.prev(),
                    Key::Right | Key::Enter | Key::Char(' ') => current.next(),
                    _ => return false,
                };
                self.set_position(next);
                true
            }

            WidgetId::Skill(skill) => match input.key {
                Key::Enter | Key::Char(' ') => {
                    self.session.toggle_skill(skill);
                    self.touched.insert(Field::AdditionalSkills);
                    self.status = None;
                    true
                }
                _ => false,
            },

            WidgetId::InterviewTime => match self.picker.handle_key(input, now) {
                PickerResult::Changed => {
                    let literal = self.picker.literal();
                    self.write_text(Field::InterviewTime, literal);
                    true
                }
                PickerResult::Handled => true,
                PickerResult::Ignored => false,
            },

            WidgetId::Submit => match input.key {
                Key::Enter | Key::Char(' ') => {
                    self.submit();
                    true
                }
                _ => false,
            },
        }
    }

    fn write_text(&mut self, field: Field, text: String) {
        if let Err(e) = self.session.set_text(field, text) {
            log::warn!("Dropped edit: {}", e);
            return;
        }
        self.touched.insert(field);
        self.status = None;
    }

    fn set_position(&mut self, position: Position) {
        self.session.set_position(position);
        self.touched.insert(Field::Position);
        self.status = None;
    }

    /// Validate and either show the submitted record or jump to the first
    /// invalid field.
    pub fn submit(&mut self) {
        self.submit_attempted = true;
        match self.session.submit() {
            Ok(submission) => {
                self.status = None;
                self.screen = Screen::Submitted(submission);
            }
            Err(FormError::Invalid(errors)) => {
                self.status = Some(format!("{} field(s) need attention", errors.len()));
                let first_widget = errors
                    .first()
                    .and_then(|(field, _)| WidgetId::for_field(field).first().copied());
                if let Some(widget) = first_widget {
                    self.focus_widget(widget);
                }
            }
            Err(e) => {
                log::error!("Submit failed: {}", e);
                self.status = Some(e.to_string());
            }
        }
    }

    /// Discard all input and start a fresh application.
    pub fn reset(&mut self) {
        self.session.reset();
        self.inputs.clear();
        self.picker = DateTimePicker::new();
        self.touched.clear();
        self.submit_attempted = false;
        self.status = None;
        self.focus.blur();
        self.focus_first();
    }

    fn focus_first(&mut self) {
        let order = self.widget_order();
        self.focus.focus_next(&order);
    }

    fn focus_next(&mut self) {
        let old = self.focus.focused();
        let order = self.widget_order();
        if let Some(new) = self.focus.focus_next(&order) {
            self.blur(old, new);
        }
    }

    fn focus_prev(&mut self) {
        let old = self.focus.focused();
        let order = self.widget_order();
        if let Some(new) = self.focus.focus_prev(&order) {
            self.blur(old, new);
        }
    }

    fn focus_widget(&mut self, widget: WidgetId) {
        let old = self.focus.focused();
        if self.focus.focus(widget) {
            self.blur(old, widget);
        }
    }

    /// Leaving a field marks it as touched, so its error becomes visible.
    fn blur(&mut self, old: Option<WidgetId>, new: WidgetId) {
        let Some(old_field) = old.and_then(WidgetId::field) else {
            return;
        };
        if new.field() != Some(old_field) {
            self.touched.insert(old_field);
        }
    }
}
