//! # seikyu
//!
//! Invoicing utilities for Japanese business software: corporate number
//! (法人番号) validation, per-rate consumption tax under the Qualified Invoice
//! System, and payment due dates from closing-day billing terms.
//!
//! All monetary values are integer yen; tax rates use
//! [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use seikyu::core::*;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new("INV-2024-001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .buyer("株式会社サンプル")
//!     .billing_terms(BillingTerms::new(Some(0), Some(1), Some(0)))
//!     .add_line(InvoiceLineBuilder::new("保守費用", 1, 50_000).tax_rate(dec!(10)).build())
//!     .add_line(InvoiceLineBuilder::new("お弁当", 10, 540).tax_rate(dec!(8)).build())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(invoice.totals.tax_amount, 5_432);
//! assert_eq!(invoice.totals.total_amount, 60_832);
//! assert_eq!(invoice.due_date, NaiveDate::from_ymd_opt(2024, 7, 31));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Tax summary, due dates, billing terms, invoice builder, numbering |
//! | `corporate` | Corporate number and invoice registration number validation |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "corporate")]
pub mod corporate;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
