use std::collections::HashMap;

use applyform_lib::model::Field;

use crate::event::{Key, KeyInput};

/// Text content and cursor of a single input.
///
/// The cursor is a character index, not a byte index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputData {
    pub text: String,
    pub cursor: usize,
}

impl TextInputData {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Apply a key press.
    ///
    /// In a multi-line input Enter inserts a newline; otherwise it is reported
    /// as `Submitted` so the caller can submit the form.
    pub fn handle_key(&mut self, input: KeyInput, multiline: bool) -> TextEditResult {
        let modifiers = input.modifiers;
        match input.key {
            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                self.insert_char(c);
                TextEditResult::Changed
            }

            Key::Enter if multiline && !modifiers.ctrl => {
                self.insert_char('\n');
                TextEditResult::Changed
            }

            Key::Enter => TextEditResult::Submitted,

            Key::Backspace if modifiers.none() => {
                if self.delete_back() {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Delete if modifiers.none() => {
                if self.delete_forward() {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Left if !modifiers.ctrl => {
                self.cursor = self.cursor.saturating_sub(1);
                TextEditResult::Handled
            }

            Key::Right if !modifiers.ctrl => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                TextEditResult::Handled
            }

            Key::Home if !modifiers.ctrl => {
                self.cursor = 0;
                TextEditResult::Handled
            }

            Key::End if !modifiers.ctrl => {
                self.cursor = self.char_count();
                TextEditResult::Handled
            }

            _ => TextEditResult::Ignored,
        }
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Returns true if text changed.
    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.text, self.cursor - 1);
        self.text.remove(byte_pos);
        self.cursor -= 1;
        true
    }

    /// Returns true if text changed.
    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_pos);
        true
    }
}

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Enter was pressed in a single-line input.
    Submitted,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Editing buffers for every text field of the form.
#[derive(Debug, Default)]
pub struct TextInputState {
    inputs: HashMap<Field, TextInputData>,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_data(&self, field: Field) -> Option<&TextInputData> {
        self.inputs.get(&field)
    }

    pub fn get_data_mut(&mut self, field: Field) -> &mut TextInputData {
        self.inputs.entry(field).or_default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
