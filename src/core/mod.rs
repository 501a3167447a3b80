//! Core invoice types, tax summary, due dates, validation, and numbering.
//!
//! Amounts are integer yen; tax is computed once per tax rate group as the
//! Qualified Invoice System requires.

mod builder;
mod due_date;
mod error;
mod numbering;
mod tax;
mod types;
mod validation;

pub use builder::*;
pub use due_date::*;
pub use error::*;
pub use numbering::*;
pub use tax::*;
pub use types::*;
pub use validation::*;
