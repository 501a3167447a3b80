use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of digits in a corporate number.
const LEN: usize = 13;

/// Why a corporate number was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CorporateNumberError {
    /// Every digit is zero.
    #[error("invalid number: all digits are zero")]
    AllZero,
    /// 12 digits: the company registry number (会社法人等番号) was entered
    /// instead of the corporate number.
    #[error(
        "12 digits entered: this looks like the company registry number, \
         not the 13-digit corporate number"
    )]
    RegistryNumber,
    /// Any other length than 13 digits.
    #[error("corporate number must be 13 digits, got {actual}")]
    Length { actual: usize },
    /// The first digit does not match the check digit of the other twelve.
    #[error("check digit does not match")]
    CheckDigit,
    /// Registration number without the leading `T`.
    #[error("registration number must start with 'T'")]
    MissingPrefix,
}

/// Outcome of [`validate`]. Invalid input is reported here, never as `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorporateNumberCheck {
    /// Whether the input is acceptable. Blank input is valid (optional field).
    pub valid: bool,
    /// Normalized number when valid and not blank.
    pub normalized: Option<String>,
    /// If not valid, the reason why.
    pub error: Option<CorporateNumberError>,
}

impl CorporateNumberCheck {
    pub(crate) fn blank() -> Self {
        Self {
            valid: true,
            normalized: None,
            error: None,
        }
    }

    pub(crate) fn accepted(normalized: String) -> Self {
        Self {
            valid: true,
            normalized: Some(normalized),
            error: None,
        }
    }

    pub(crate) fn rejected(error: CorporateNumberError) -> Self {
        Self {
            valid: false,
            normalized: None,
            error: Some(error),
        }
    }
}

/// Convert full-width digits to ASCII and drop every other non-digit.
///
/// Hyphens, spaces and ideographic spaces all disappear; the result contains
/// only `0-9`. Idempotent.
pub fn normalize(input: &str) -> String {
    input.chars().filter_map(ascii_digit).collect()
}

/// Map `0-9` and full-width `０-９` to ASCII digits.
pub(crate) fn ascii_digit(c: char) -> Option<char> {
    match c {
        '0'..='9' => Some(c),
        '０'..='９' => char::from_u32(u32::from(c) - u32::from('０') + u32::from('0')),
        _ => None,
    }
}

/// Check digit for a 12-digit base number, or `None` if `base` is not
/// exactly 12 ASCII digits.
///
/// Digits are weighted 1 and 2 alternately, starting with 1 at the rightmost
/// digit; the check digit is `9 - (weighted sum mod 9)`.
pub fn compute_check_digit(base: &str) -> Option<u8> {
    let bytes = base.as_bytes();
    if bytes.len() != LEN - 1 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let sum: u32 = bytes
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let position_from_right = LEN - 1 - i;
            let weight = if position_from_right % 2 == 1 { 1 } else { 2 };
            u32::from(b - b'0') * weight
        })
        .sum();

    // sum mod 9 is at most 8, so the digit is 1..=9
    Some(9 - (sum % 9) as u8)
}

/// True iff `number` is 13 ASCII digits whose first digit is the check
/// digit of the remaining twelve. No normalization is applied.
pub fn validate_check_digit(number: &str) -> bool {
    let bytes = number.as_bytes();
    if bytes.len() != LEN || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }
    compute_check_digit(&number[1..]) == Some(bytes[0] - b'0')
}

/// Validate a user-entered corporate number.
///
/// In order: blank input is valid with no number; otherwise the input is
/// normalized and rejected if all zero, if it has 12 digits (registry number
/// mix-up), if it is not 13 digits, or if the check digit fails.
pub fn validate(input: Option<&str>) -> CorporateNumberCheck {
    let Some(input) = input.filter(|s| !s.trim().is_empty()) else {
        return CorporateNumberCheck::blank();
    };

    let normalized = normalize(input);
    match check_digits(&normalized) {
        Ok(()) => CorporateNumberCheck::accepted(normalized),
        Err(error) => {
            tracing::debug!(%normalized, %error, "corporate number rejected");
            CorporateNumberCheck::rejected(error)
        }
    }
}

/// Policy steps after normalization; `digits` is ASCII digits only.
pub(crate) fn check_digits(digits: &str) -> Result<(), CorporateNumberError> {
    if !digits.is_empty() && digits.bytes().all(|b| b == b'0') {
        return Err(CorporateNumberError::AllZero);
    }
    match digits.len() {
        12 => Err(CorporateNumberError::RegistryNumber),
        LEN if validate_check_digit(digits) => Ok(()),
        LEN => Err(CorporateNumberError::CheckDigit),
        actual => Err(CorporateNumberError::Length { actual }),
    }
}

/// A validated 13-digit corporate number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CorporateNumber(String);

impl CorporateNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The leading check digit.
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[0] - b'0'
    }

    /// The 12-digit base number.
    pub fn base(&self) -> &str {
        &self.0[1..]
    }

    /// Qualified invoice registration number: `T` + corporate number.
    pub fn registration_number(&self) -> String {
        format!("T{}", self.0)
    }
}

impl FromStr for CorporateNumber {
    type Err = CorporateNumberError;

    /// Normalizes, then applies the same checks as [`validate`]. Blank input
    /// is a length error here since there is no number to hold.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        check_digits(&normalized)?;
        Ok(Self(normalized))
    }
}

impl TryFrom<String> for CorporateNumber {
    type Error = CorporateNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for CorporateNumber {
    type Error = CorporateNumberError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CorporateNumber> for String {
    fn from(value: CorporateNumber) -> Self {
        value.0
    }
}

impl fmt::Display for CorporateNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // National Tax Agency
    const NTA: &str = "7000012050002";

    #[test]
    fn normalize_strips_separators() {
        assert_eq!(normalize("7000-0120-50002"), NTA);
        assert_eq!(normalize(" 7000 0120\u{3000}50002 "), NTA);
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("abc"), "");
    }

    #[test]
    fn normalize_full_width_digits() {
        assert_eq!(normalize("７０００ー０１２０ー５０００２"), NTA);
        assert_eq!(normalize("０１２３４５６７８９"), "0123456789");
    }

    #[test]
    fn check_digit_known_numbers() {
        assert_eq!(compute_check_digit("000012050002"), Some(7));
        assert!(validate_check_digit(NTA));
        assert!(validate_check_digit("1180301018771"));
    }

    #[test]
    fn check_digit_formula_example() {
        // Base 234567890123: weighted sum 72, 72 mod 9 = 0, expected 9.
        assert_eq!(compute_check_digit("234567890123"), Some(9));
        assert!(!validate_check_digit("1234567890123"));
        assert!(validate_check_digit("9234567890123"));
    }

    #[test]
    fn check_digit_requires_13_ascii_digits() {
        assert!(!validate_check_digit("700001205000"));
        assert!(!validate_check_digit("70000120500020"));
        assert!(!validate_check_digit("7000-12050002"));
        assert!(!validate_check_digit("７000012050002"));
        assert_eq!(compute_check_digit("12345"), None);
    }

    #[test]
    fn blank_is_valid_without_number() {
        assert_eq!(validate(None), CorporateNumberCheck::blank());
        assert_eq!(validate(Some("")), CorporateNumberCheck::blank());
        assert_eq!(validate(Some(" \u{3000} ")), CorporateNumberCheck::blank());
    }

    #[test]
    fn precedence() {
        assert_eq!(validate(Some("0000000000000")).error, Some(CorporateNumberError::AllZero));
        assert_eq!(validate(Some("000000000000")).error, Some(CorporateNumberError::AllZero));
        assert_eq!(validate(Some("0")).error, Some(CorporateNumberError::AllZero));
        assert_eq!(
            validate(Some("123456789012")).error,
            Some(CorporateNumberError::RegistryNumber)
        );
        assert_eq!(
            validate(Some("12345")).error,
            Some(CorporateNumberError::Length { actual: 5 })
        );
        assert_eq!(
            validate(Some("1234567890123")).error,
            Some(CorporateNumberError::CheckDigit)
        );
    }

    #[test]
    fn separators_only_is_length_error() {
        let check = validate(Some("---"));
        assert!(!check.valid);
        assert_eq!(check.error, Some(CorporateNumberError::Length { actual: 0 }));
    }

    #[test]
    fn parse_and_accessors() {
        let n: CorporateNumber = "7000-0120-50002".parse().unwrap();
        assert_eq!(n.as_str(), NTA);
        assert_eq!(n.check_digit(), 7);
        assert_eq!(n.base(), "000012050002");
        assert_eq!(n.registration_number(), "T7000012050002");
        assert_eq!(n.to_string(), NTA);
        assert_eq!("".parse::<CorporateNumber>(), Err(CorporateNumberError::Length { actual: 0 }));
    }
}
