use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::tax::summarize;
use super::types::*;

/// Highest day number accepted as closing or payment day. Every month has it.
pub const MAX_BILLING_DAY: u32 = 28;

/// Validate billing terms against the documented ranges.
///
/// [`calc_due_date`](super::calc_due_date) accepts any values; call this
/// where terms are entered or imported.
pub fn validate_billing_terms(terms: &BillingTerms) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(day) = terms.closing_day.filter(|d| *d > MAX_BILLING_DAY) {
        errors.push(ValidationError::with_rule(
            "billing_terms.closing_day",
            format!("closing day {day} must be 0 (month end) or 1..={MAX_BILLING_DAY}"),
            "TERMS-01",
        ));
    }

    if let Some(day) = terms.payment_day.filter(|d| *d > MAX_BILLING_DAY) {
        errors.push(ValidationError::with_rule(
            "billing_terms.payment_day",
            format!("payment day {day} must be 0 (month end) or 1..={MAX_BILLING_DAY}"),
            "TERMS-02",
        ));
    }

    if let Some(offset) = terms.payment_month_offset.filter(|o| *o < 0) {
        errors.push(ValidationError::with_rule(
            "billing_terms.payment_month_offset",
            format!("payment month offset {offset} must not be negative"),
            "TERMS-03",
        ));
    }

    errors
}

/// Validate a computed invoice.
/// Returns all validation errors found (not just the first).
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.number.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "number",
            "invoice number must not be empty",
            "INV-01",
        ));
    }

    if invoice.buyer.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "buyer",
            "buyer name must not be empty",
            "INV-02",
        ));
    }

    if invoice.lines.is_empty() {
        errors.push(ValidationError::with_rule(
            "lines",
            "invoice must have at least one line item",
            "INV-03",
        ));
    }

    for (i, line) in invoice.lines.iter().enumerate() {
        validate_line(line, i, &mut errors);
    }

    if let Some(due) = invoice.due_date.filter(|d| *d < invoice.issue_date) {
        errors.push(ValidationError::with_rule(
            "due_date",
            format!("due date {due} is before issue date {}", invoice.issue_date),
            "INV-05",
        ));
    }

    if let Some(terms) = &invoice.billing_terms {
        errors.extend(validate_billing_terms(terms));
    }

    #[cfg(feature = "corporate")]
    validate_registration_number(invoice, &mut errors);

    errors.extend(validate_arithmetic(invoice));

    errors
}

/// Check that the stored tax summary and totals match the invoice lines.
pub fn validate_arithmetic(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let Some(items) = invoice
        .lines
        .iter()
        .map(InvoiceLine::to_line_item)
        .collect::<Option<Vec<_>>>()
    else {
        errors.push(ValidationError::with_rule(
            "lines",
            "line amount overflows",
            "INV-06",
        ));
        return errors;
    };

    let expected = summarize(&items);
    if invoice.tax_summary != expected {
        errors.push(ValidationError::with_rule(
            "tax_summary",
            format!(
                "tax summary does not match lines (expected {})",
                expected.to_string().replace('\n', "; ")
            ),
            "INV-06",
        ));
    }

    let totals = expected.totals();
    if invoice.totals != totals {
        errors.push(ValidationError::with_rule(
            "totals",
            format!(
                "totals {}/{} do not match lines ({}/{})",
                invoice.totals.total_amount,
                invoice.totals.tax_amount,
                totals.total_amount,
                totals.tax_amount
            ),
            "INV-06",
        ));
    }

    errors
}

#[cfg(feature = "corporate")]
fn validate_registration_number(invoice: &Invoice, errors: &mut Vec<ValidationError>) {
    let check =
        crate::corporate::validate_registration_number(invoice.registration_number.as_deref());
    if let Some(err) = check.error {
        errors.push(ValidationError::with_rule(
            "registration_number",
            err.to_string(),
            "INV-07",
        ));
    }
}

fn validate_line(line: &InvoiceLine, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("lines[{index}]");

    if line.description.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.description"),
            "line description must not be empty",
        ));
    }

    if line.tax_rate < Decimal::ZERO || line.tax_rate > dec!(100) {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.tax_rate"),
            format!("tax rate {} must be between 0 and 100", line.tax_rate),
            "INV-04",
        ));
    }
}
