use crate::model::Field;
use crate::model::FormRecord;

use super::ErrorSet;
use super::rules;

/// A single field rule: the check and the message shown when it fails.
struct Rule {
    field: Field,
    check: fn(&FormRecord) -> bool,
    message: &'static str,
}

/// Every rule of the application form, in form order.
///
/// Rules on conditional fields only run while the selected position shows
/// that field (see [`Position::shows`](crate::model::Position::shows)).
const RULES: &[Rule] = &[
    Rule {
        field: Field::FullName,
        check: |r| rules::required(&r.full_name),
        message: "Full Name is required",
    },
    Rule {
        field: Field::Email,
        check: |r| rules::email(&r.email),
        message: "Valid Email is required",
    },
    Rule {
        field: Field::PhoneNumber,
        check: |r| rules::numeric(&r.phone_number),
        message: "Valid Phone Number is required",
    },
    Rule {
        field: Field::RelevantExperience,
        check: |r| rules::positive(&r.relevant_experience),
        message: "Relevant Experience is required and must be greater than 0",
    },
    Rule {
        field: Field::PortfolioUrl,
        check: |r| rules::portfolio_url(&r.portfolio_url),
        message: "Valid Portfolio URL is required",
    },
    Rule {
        field: Field::ManagementExperience,
        check: |r| rules::present(&r.management_experience),
        message: "Management Experience is required",
    },
    Rule {
        field: Field::AdditionalSkills,
        check: |r| r.additional_skills.any(),
        message: "At least one additional skill must be selected",
    },
    Rule {
        field: Field::InterviewTime,
        check: |r| rules::present(&r.interview_time),
        message: "Preferred Interview Time is required",
    },
];

/// Validate every field of `record`.
///
/// Each rule is evaluated independently; a failing field never stops the
/// others from being checked. The result only holds failing fields.
pub fn validate(record: &FormRecord) -> ErrorSet {
    let mut errors = ErrorSet::new();

    for rule in RULES {
        if !record.position.shows(rule.field) {
            continue;
        }
        if !(rule.check)(record) {
            errors.insert(rule.field, rule.message);
        }
    }

    errors
}
