//! Date-time picker producing `YYYY-MM-DDTHH:MM` literals.

use applyform_lib::INTERVIEW_TIME_FORMAT;
use chrono::{Duration, Months, NaiveDateTime, Timelike};

use crate::event::{Key, KeyInput};

/// Minutes added or removed per step on the minute segment.
const MINUTE_STEP: i64 = 5;

/// The part of the date-time that Up/Down adjusts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Segment {
    Year,
    Month,
    Day,
    #[default]
    Hour,
    Minute,
}

impl Segment {
    const ALL: [Segment; 5] = [
        Segment::Year,
        Segment::Month,
        Segment::Day,
        Segment::Hour,
        Segment::Minute,
    ];

    /// Character range of this segment in the formatted literal.
    pub fn span(self) -> (usize, usize) {
        match self {
            Self::Year => (0, 4),
            Self::Month => (5, 7),
            Self::Day => (8, 10),
            Self::Hour => (11, 13),
            Self::Minute => (14, 16),
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    fn left(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }

    fn right(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }
}

/// Result of handling a picker key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerResult {
    /// The value changed.
    Changed,
    /// Key was handled but the value didn't change.
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// A date-time value edited segment by segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTimePicker {
    value: Option<NaiveDateTime>,
    segment: Segment,
}

impl DateTimePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<NaiveDateTime> {
        self.value
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// The value as a form literal, empty when nothing is picked.
    pub fn literal(&self) -> String {
        self.value
            .map(|v| v.format(INTERVIEW_TIME_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// Apply a key press. `now` seeds an empty picker.
    pub fn handle_key(&mut self, input: KeyInput, now: NaiveDateTime) -> PickerResult {
        if !input.modifiers.none() && !input.modifiers.shift {
            return PickerResult::Ignored;
        }

        match input.key {
            Key::Left => {
                self.segment = self.segment.left();
                PickerResult::Handled
            }
            Key::Right => {
                self.segment = self.segment.right();
                PickerResult::Handled
            }
            Key::Up | Key::Char('+') => self.step(1, now),
            Key::Down | Key::Char('-') => self.step(-1, now),
            Key::Enter | Key::Char(' ') if self.value.is_none() => {
                self.value = Some(next_full_hour(now));
                PickerResult::Changed
            }
            Key::Backspace | Key::Delete => {
                if self.value.take().is_some() {
                    PickerResult::Changed
                } else {
                    PickerResult::Handled
                }
            }
            _ => PickerResult::Ignored,
        }
    }

    fn step(&mut self, direction: i32, now: NaiveDateTime) -> PickerResult {
        let Some(current) = self.value else {
            self.value = Some(next_full_hour(now));
            return PickerResult::Changed;
        };

        let next = match self.segment {
            Segment::Year => add_months(current, 12 * direction),
            Segment::Month => add_months(current, direction),
            Segment::Day => current.checked_add_signed(Duration::days(direction.into())),
            Segment::Hour => current.checked_add_signed(Duration::hours(direction.into())),
            Segment::Minute => {
                current.checked_add_signed(Duration::minutes(MINUTE_STEP * i64::from(direction)))
            }
        };

        match next {
            Some(next) if next != current => {
                self.value = Some(next);
                PickerResult::Changed
            }
            _ => PickerResult::Handled,
        }
    }
}

/// Month arithmetic clamps the day (Jan 31 + 1 month = Feb 28/29).
fn add_months(value: NaiveDateTime, months: i32) -> Option<NaiveDateTime> {
    let delta = Months::new(months.unsigned_abs());
    if months >= 0 {
        value.checked_add_months(delta)
    } else {
        value.checked_sub_months(delta)
    }
}

/// The first full hour strictly after `now`.
pub fn next_full_hour(now: NaiveDateTime) -> NaiveDateTime {
    let truncated = now
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);
    truncated + Duration::hours(1)
}
