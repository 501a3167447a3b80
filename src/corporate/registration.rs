//! Qualified invoice issuer registration numbers (適格請求書発行事業者登録番号).
//!
//! Corporations register under `T` + their 13-digit corporate number.
//! Sole proprietors get a `T` + 13-digit number from the same check-digit
//! scheme, so the same checks apply to both.

use super::number::{CorporateNumberCheck, CorporateNumberError, ascii_digit, check_digits};

/// Outcome of [`validate_registration_number`].
pub type RegistrationNumberCheck = CorporateNumberCheck;

fn is_prefix(c: char) -> bool {
    matches!(c, 'T' | 't' | 'Ｔ' | 'ｔ')
}

/// Normalize a registration number: a leading `T` (any width or case) is
/// kept as ASCII `T`, digits are converted to ASCII, everything else is
/// dropped. Without a leading `T` the result is digits only.
pub fn normalize_registration_number(input: &str) -> String {
    let trimmed = input.trim_start();
    let mut chars = trimmed.chars();
    let prefix = chars.next().filter(|c| is_prefix(*c));

    let rest = if prefix.is_some() { chars.as_str() } else { trimmed };
    let digits = rest.chars().filter_map(ascii_digit);

    match prefix {
        Some(_) => std::iter::once('T').chain(digits).collect(),
        None => digits.collect(),
    }
}

/// Validate a registration number such as `T7000012050002`.
///
/// Blank input is valid with no number. A missing `T` is rejected before
/// the digits are checked; the digits then go through the corporate number
/// checks (all zero, 12 digits, length, check digit).
pub fn validate_registration_number(input: Option<&str>) -> RegistrationNumberCheck {
    let Some(input) = input.filter(|s| !s.trim().is_empty()) else {
        return RegistrationNumberCheck::blank();
    };

    let normalized = normalize_registration_number(input);
    let result = match normalized.strip_prefix('T') {
        Some(digits) => check_digits(digits),
        None => Err(CorporateNumberError::MissingPrefix),
    };

    match result {
        Ok(()) => RegistrationNumberCheck::accepted(normalized),
        Err(error) => {
            tracing::debug!(%normalized, %error, "registration number rejected");
            RegistrationNumberCheck::rejected(error)
        }
    }
}
