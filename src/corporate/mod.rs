//! Corporate number (法人番号) and invoice registration number validation.
//!
//! Corporate numbers are 13 digits: a check digit followed by a 12-digit
//! base number. Qualified invoice issuers are registered under `T` followed
//! by their corporate number.
//!
//! # Example
//!
//! ```
//! use seikyu::corporate::*;
//!
//! let check = validate(Some("７０００−０１２０−５０００２"));
//! assert!(check.valid);
//! assert_eq!(check.normalized.as_deref(), Some("7000012050002"));
//!
//! let check = validate(Some("000012050002"));
//! assert_eq!(check.error, Some(CorporateNumberError::RegistryNumber));
//!
//! let check = validate_registration_number(Some("T7000012050002"));
//! assert!(check.valid);
//! ```

mod number;
mod registration;

pub use number::{
    CorporateNumber, CorporateNumberCheck, CorporateNumberError, compute_check_digit, normalize,
    validate, validate_check_digit,
};
pub use registration::{
    RegistrationNumberCheck, normalize_registration_number, validate_registration_number,
};
