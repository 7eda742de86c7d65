//! Accepted application

use chrono::NaiveDateTime;

use crate::model::FormRecord;

/// Format produced by date-time pickers (`datetime-local` literal).
pub const INTERVIEW_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Same literal including seconds.
const INTERVIEW_TIME_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// A record that passed validation at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    record: FormRecord,
}

impl Submission {
    pub(crate) fn new(record: FormRecord) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// The record as pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> String {
        // A FormRecord is strings, bools and unit enums; serializing it cannot fail.
        serde_json::to_string_pretty(&self.record).unwrap_or_default()
    }

    /// The interview time, if the literal is a well-formed date-time.
    pub fn interview_time(&self) -> Option<NaiveDateTime> {
        parse_interview_time(&self.record.interview_time)
    }
}

/// Parse a `YYYY-MM-DDTHH:MM[:SS]` literal.
pub fn parse_interview_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, INTERVIEW_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, INTERVIEW_TIME_FORMAT_SECONDS))
        .ok()
}
