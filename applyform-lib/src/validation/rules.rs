//! Value predicates shared by the form rules.

use std::sync::LazyLock;

use regex::Regex;

use super::number::parse_number;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid email pattern"));

static PORTFOLIO_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.*\..*").expect("Invalid portfolio URL pattern"));

/// Require the value to be non-empty after trimming.
pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Require any input at all; whitespace counts.
pub fn present(value: &str) -> bool {
    !value.is_empty()
}

/// Require something shaped like `name@host.tld` somewhere in the value.
pub fn email(value: &str) -> bool {
    present(value) && EMAIL.is_match(value)
}

/// Require a value that coerces to a number. Blank input coerces to zero.
pub fn numeric(value: &str) -> bool {
    present(value) && parse_number(value).is_some()
}

/// Require a number strictly greater than zero.
pub fn positive(value: &str) -> bool {
    present(value) && parse_number(value).is_some_and(|n| n > 0.0)
}

/// Require an `http://` or `https://` URL with a dot after the scheme.
pub fn portfolio_url(value: &str) -> bool {
    present(value) && PORTFOLIO_URL.is_match(value)
}
