//! Lenient numeric parsing for form fields
//!
//! Fields are free text. The leading number is used and everything after it
//! ignored, so `"1500 pesos"` reads as 1500. Empty or unparsable text reads
//! as zero, as does anything negative or non-finite. A leading currency
//! symbol and `,` digit grouping are accepted. Values above
//! [`MAX_FIELD_VALUE`] are capped.

/// Largest value a field reads as: one trillion currency units
///
/// Keeps every total and multiple of the calculators well inside `Money`'s
/// range.
pub const MAX_FIELD_VALUE: f64 = 1e12;

/// Parse the numeric value of a form field
pub fn parse_field(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let trimmed = trimmed.trim_start_matches(|c: char| {
        !(c.is_alphanumeric() || c == '-' || c == '+' || c == '.' || c.is_whitespace())
    });
    let cleaned: String = trimmed.trim_start().chars().filter(|c| *c != ',').collect();

    let value = leading_number(&cleaned)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .unwrap_or(0.0);

    if value.is_finite() && value > 0.0 {
        value.min(MAX_FIELD_VALUE)
    } else {
        0.0
    }
}

/// Longest prefix of `s` that forms a decimal number
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. Returns `None` when there are no digits at all.
fn leading_number(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    Some(&s[..end])
}
