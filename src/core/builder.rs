use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::InvoiceError;
use super::numbering::InvoiceNumberSequence;
use super::tax::{summarize, total_from_summary};
use super::types::*;
use super::validation;

/// Builder for constructing invoices with computed tax and due date.
///
/// ```
/// use seikyu::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new("INV-2024-001", NaiveDate::from_ymd_opt(2024, 1, 25).unwrap())
///     .buyer("株式会社サンプル")
///     .billing_terms(BillingTerms::new(Some(20), Some(1), Some(10)))
///     .add_line(InvoiceLineBuilder::new("コンサルティング", 10, 15_000).build())
///     .build()
///     .unwrap();
///
/// assert_eq!(invoice.totals.total_amount, 165_000);
/// assert_eq!(invoice.due_date, NaiveDate::from_ymd_opt(2024, 3, 10));
/// ```
pub struct InvoiceBuilder {
    number: String,
    issue_date: NaiveDate,
    due_date: Option<NaiveDate>,
    buyer: Option<String>,
    registration_number: Option<String>,
    billing_terms: Option<BillingTerms>,
    lines: Vec<InvoiceLine>,
}

impl InvoiceBuilder {
    pub fn new(number: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            issue_date,
            due_date: None,
            buyer: None,
            registration_number: None,
            billing_terms: None,
            lines: Vec::new(),
        }
    }

    /// Start an invoice numbered by `sequence`. The sequence first rolls
    /// over to the period of `issue_date` if that period is later.
    pub fn from_sequence(sequence: &mut InvoiceNumberSequence, issue_date: NaiveDate) -> Self {
        sequence.auto_advance(issue_date);
        Self::new(sequence.next_number(), issue_date)
    }

    /// Explicit due date; takes precedence over billing terms.
    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn buyer(mut self, name: impl Into<String>) -> Self {
        self.buyer = Some(name.into());
        self
    }

    /// Issuer's qualified invoice registration number, e.g. "T7000012050002".
    pub fn registration_number(mut self, number: impl Into<String>) -> Self {
        self.registration_number = Some(number.into());
        self
    }

    pub fn billing_terms(mut self, terms: BillingTerms) -> Self {
        self.billing_terms = Some(terms);
        self
    }

    pub fn add_line(mut self, line: InvoiceLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Build the invoice, computing tax, totals and due date, then validate.
    pub fn build(self) -> Result<Invoice, InvoiceError> {
        let invoice = self.build_unchecked()?;

        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            tracing::debug!(
                number = %invoice.number,
                count = errors.len(),
                "invoice failed validation"
            );
            return Err(InvoiceError::Validation(errors));
        }

        tracing::debug!(
            number = %invoice.number,
            total = invoice.totals.total_amount,
            tax = invoice.totals.tax_amount,
            due_date = ?invoice.due_date,
            "invoice built"
        );
        Ok(invoice)
    }

    /// Build and compute without running [`validate_invoice`](super::validate_invoice).
    pub fn build_unchecked(self) -> Result<Invoice, InvoiceError> {
        let buyer = self
            .buyer
            .ok_or_else(|| InvoiceError::Builder("buyer is required".into()))?;

        if self.lines.is_empty() {
            return Err(InvoiceError::Builder(
                "at least one line item is required".into(),
            ));
        }

        // Input limits to prevent abuse
        if self.lines.len() > 10_000 {
            return Err(InvoiceError::Builder(
                "invoice cannot have more than 10,000 line items".into(),
            ));
        }
        if self.number.len() > 200 {
            return Err(InvoiceError::Builder(
                "invoice number cannot exceed 200 characters".into(),
            ));
        }

        let items = self
            .lines
            .iter()
            .map(|line| {
                line.to_line_item().ok_or_else(|| {
                    InvoiceError::Arithmetic(format!(
                        "line '{}': {} x {} overflows",
                        line.description, line.quantity, line.unit_price
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let tax_summary = summarize(&items);
        let totals = total_from_summary(&tax_summary);

        let due_date = self.due_date.or_else(|| {
            self.billing_terms
                .as_ref()
                .and_then(|terms| terms.due_date(self.issue_date))
        });

        Ok(Invoice {
            number: self.number,
            issue_date: self.issue_date,
            due_date,
            buyer,
            registration_number: self.registration_number,
            billing_terms: self.billing_terms,
            lines: self.lines,
            tax_summary,
            totals,
        })
    }
}

impl InvoiceLine {
    /// `quantity * unit_price`, or `None` on overflow.
    pub fn amount(&self) -> Option<i64> {
        self.unit_price.checked_mul(i64::from(self.quantity))
    }

    pub fn to_line_item(&self) -> Option<LineItem> {
        Some(LineItem::new(self.amount()?, self.tax_rate))
    }
}

/// Builder for invoice lines. The tax rate defaults to the standard 10 %.
pub struct InvoiceLineBuilder {
    description: String,
    quantity: u32,
    unit_price: i64,
    tax_rate: Decimal,
}

impl InvoiceLineBuilder {
    pub fn new(description: impl Into<String>, quantity: u32, unit_price: i64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            tax_rate: STANDARD_RATE,
        }
    }

    pub fn tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    /// Reduced 8 % rate (food, newspapers).
    pub fn reduced(self) -> Self {
        self.tax_rate(REDUCED_RATE)
    }

    pub fn build(self) -> InvoiceLine {
        InvoiceLine {
            description: self.description,
            quantity: self.quantity,
            unit_price: self.unit_price,
            tax_rate: self.tax_rate,
        }
    }
}

/// Standard consumption tax rate (10 %).
pub const STANDARD_RATE: Decimal = dec!(10);

/// Reduced consumption tax rate (8 %).
pub const REDUCED_RATE: Decimal = dec!(8);
