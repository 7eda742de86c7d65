//! Editable widget state.
//!
//! Selects and checkboxes hold no state of their own beyond the form record;
//! only free text and date-time entry need a buffer.

mod datetime;
mod text_input;

pub use datetime::{DateTimePicker, PickerResult, Segment, next_full_hour};
pub use text_input::{TextEditResult, TextInputData, TextInputState};
