//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// E.164 shape: '+' then a non-zero digit and up to 14 more digits
static E164_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{1,14}$").unwrap()
});

/// Normalize a raw phone number into canonical `+`-and-digits form.
///
/// Every character that is not an ASCII digit is stripped. Inputs that
/// already carried a leading `+` keep their digit string verbatim; a bare
/// input with exactly 10 digits is assumed North American and gets a `+1`
/// prefix; any other bare input gets a plain `+`.
///
/// The function is total and makes no claim that the result is dialable.
pub fn normalize_phone_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if raw.starts_with('+') {
        return format!("+{}", digits);
    }

    if digits.len() == 10 {
        format!("+1{}", digits)
    } else {
        format!("+{}", digits)
    }
}

/// Check whether a phone number is already in E.164 shape
pub fn is_valid_phone_number(phone: &str) -> bool {
    E164_REGEX.is_match(phone)
}
