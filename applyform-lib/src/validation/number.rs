//! Numeric coercion of form input.
//!
//! Form inputs arrive as strings. A value counts as numeric when a browser's
//! `Number(value)` would not yield `NaN`, so a phone number like `5551234`
//! passes while `555-1234` does not.

/// Parse `input` as a number, or `None` if it is not numeric.
///
/// Accepts surrounding whitespace, decimal integers and floats with an
/// optional sign and exponent, `0x`/`0o`/`0b` integer literals, and
/// `Infinity` with an optional sign. A blank string yields `Some(0.0)`;
/// callers check presence separately.
pub fn parse_number(input: &str) -> Option<f64> {
    let s = input.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    if let Some(value) = parse_radix_literal(s) {
        return Some(value);
    }

    let (sign, unsigned) = match s.as_bytes()[0] {
        b'+' => (1.0, &s[1..]),
        b'-' => (-1.0, &s[1..]),
        _ => (1.0, s),
    };

    if unsigned == "Infinity" {
        return Some(sign * f64::INFINITY);
    }

    // Rust also accepts "inf", "infinity" and "nan" in any case.
    if !is_decimal_literal(unsigned) {
        return None;
    }

    unsigned.parse::<f64>().ok().map(|v| sign * v)
}

/// `0x1F`, `0o17`, `0b101`. Signs are not allowed on these.
fn parse_radix_literal(s: &str) -> Option<f64> {
    let prefix = s.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    // Folding into f64 keeps arbitrarily long literals finite-or-inf instead of overflowing.
    Some(
        digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * radix as f64 + d as f64),
    )
}

/// Digits with at most one `.`, at least one digit in the mantissa, and an
/// optional exponent.
fn is_decimal_literal(s: &str) -> bool {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
        None => (s, None),
    };

    let mut digits = 0;
    let mut dots = 0;
    for c in mantissa.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    if digits == 0 || dots > 1 {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && exp.chars().all(|c| c.is_ascii_digit())
        }
    }
}
