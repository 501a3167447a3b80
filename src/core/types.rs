use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax-exclusive amount charged at a single consumption tax rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Amount in yen, excluding tax.
    pub amount: i64,
    /// Tax rate in percent (e.g. 10 or 8).
    pub tax_rate: Decimal,
}

impl LineItem {
    pub fn new(amount: i64, tax_rate: Decimal) -> Self {
        Self { amount, tax_rate }
    }
}

/// All line items sharing one tax rate, rounded as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRateGroup {
    /// Tax rate in percent.
    pub rate: Decimal,
    /// Sum of the tax-exclusive amounts at this rate.
    pub subtotal: i64,
    /// `floor(subtotal * rate / 100)`.
    pub tax: i64,
}

/// Per-rate tax breakdown keyed by the rate string (`"10"`, `"8"`, `"8.5"`).
///
/// Built by [`summarize`](super::summarize). Keys are the rate with trailing
/// zeros stripped, so `10`, `10.0` and `10.00` land in the same group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRateSummary {
    pub(crate) groups: BTreeMap<String, TaxRateGroup>,
}

/// Invoice grand totals derived from a [`TaxRateSummary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Σ(subtotal + tax) over all rate groups.
    pub total_amount: i64,
    /// Σ tax over all rate groups.
    pub tax_amount: i64,
}

/// Input to [`calc_due_date`](super::calc_due_date).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueDateParams {
    pub invoice_date: NaiveDate,
    /// Closing day of month; `0` = month end, `None` = no closing adjustment.
    pub closing_day: Option<u32>,
    /// Months between the closing month and the payment month.
    pub payment_month_offset: Option<i32>,
    /// Payment day of month; `0` = month end.
    pub payment_day: Option<u32>,
}

/// A customer's billing cycle: closing day, months to payment, payment day.
///
/// Typical Japanese terms "月末締め翌月末払い" (close at month end, pay at the
/// end of the following month) are `BillingTerms::new(Some(0), Some(1), Some(0))`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingTerms {
    /// `0` = month end, `1..=28` = day of month, `None` = invoice date.
    #[serde(default)]
    pub closing_day: Option<u32>,
    /// Months after the closing month (`1` = following month).
    #[serde(default)]
    pub payment_month_offset: Option<i32>,
    /// `0` = month end, `1..=28` = day of month.
    #[serde(default)]
    pub payment_day: Option<u32>,
}

/// Invoice line as entered: description, quantity and unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    /// Item name / description.
    pub description: String,
    /// Number of units.
    pub quantity: u32,
    /// Tax-exclusive unit price in yen.
    pub unit_price: i64,
    /// Tax rate in percent.
    pub tax_rate: Decimal,
}

/// A computed invoice: lines, per-rate tax, totals and due date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice number (unique within its sequence).
    pub number: String,
    /// Issue date; also the reference date for due date calculation.
    pub issue_date: NaiveDate,
    /// Payment due date, explicit or derived from billing terms.
    pub due_date: Option<NaiveDate>,
    /// Buyer (customer) name.
    pub buyer: String,
    /// Issuer's qualified invoice registration number (`T` + 13 digits).
    pub registration_number: Option<String>,
    /// Billing cycle used to derive the due date.
    pub billing_terms: Option<BillingTerms>,
    /// Invoice lines.
    pub lines: Vec<InvoiceLine>,
    /// Tax per rate group.
    pub tax_summary: TaxRateSummary,
    /// Grand totals.
    pub totals: InvoiceTotals,
}
