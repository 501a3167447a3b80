//! Payment due dates from closing-day billing terms (締め日・支払日).

use chrono::{Datelike, Days, NaiveDate};

use super::types::{BillingTerms, DueDateParams};

/// Calculate the payment due date for an invoice.
///
/// Returns `None` when the payment month offset or payment day is not
/// configured, or when the result falls outside the supported date range.
///
/// 1. Closing date: the invoice date itself when `closing_day` is `None`,
///    the last day of the invoice month for `0`, otherwise day `closing_day`
///    of the invoice month, moved to the next month if the invoice date is
///    already past it.
/// 2. Target month: closing month + `payment_month_offset`.
/// 3. Due date: last day of the target month for `payment_day == 0`,
///    otherwise day `payment_day` of the target month.
///
/// Day numbers are not range-checked. A day beyond the end of a month runs
/// over into the next one (day 31 of April is May 1st).
///
/// ```
/// use chrono::NaiveDate;
/// use seikyu::core::{DueDateParams, calc_due_date};
///
/// // 20日締め翌月10日払い, invoiced on the 25th
/// let due = calc_due_date(&DueDateParams {
///     invoice_date: NaiveDate::from_ymd_opt(2024, 3, 25).unwrap(),
///     closing_day: Some(20),
///     payment_month_offset: Some(1),
///     payment_day: Some(10),
/// });
/// assert_eq!(due, NaiveDate::from_ymd_opt(2024, 5, 10));
/// ```
pub fn calc_due_date(params: &DueDateParams) -> Option<NaiveDate> {
    let (Some(offset), Some(payment_day)) = (params.payment_month_offset, params.payment_day)
    else {
        tracing::trace!(
            invoice_date = %params.invoice_date,
            "billing terms incomplete, no due date"
        );
        return None;
    };

    let closing = closing_date(params.invoice_date, params.closing_day)?;
    let (year, month) = shift_month(closing.year(), closing.month(), offset)?;

    if payment_day == 0 {
        last_day_of_month(year, month)
    } else {
        day_of_month(year, month, payment_day)
    }
}

fn closing_date(invoice_date: NaiveDate, closing_day: Option<u32>) -> Option<NaiveDate> {
    let (year, month) = (invoice_date.year(), invoice_date.month());
    match closing_day {
        None => Some(invoice_date),
        Some(0) => last_day_of_month(year, month),
        Some(day) => {
            let candidate = day_of_month(year, month, day)?;
            if invoice_date > candidate {
                let (year, month) = shift_month(year, month, 1)?;
                day_of_month(year, month, day)
            } else {
                Some(candidate)
            }
        }
    }
}

/// Move `(year, month)` by `offset` months, rolling the year.
fn shift_month(year: i32, month: u32, offset: i32) -> Option<(i32, u32)> {
    let index = i64::from(year) * 12 + i64::from(month) - 1 + i64::from(offset);
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
    Some((year, month))
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = shift_month(year, month, 1)?;
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// Day `day` (1-based) of the month; days past month end overflow forward.
fn day_of_month(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(day.saturating_sub(1))))
}

impl BillingTerms {
    pub fn new(
        closing_day: Option<u32>,
        payment_month_offset: Option<i32>,
        payment_day: Option<u32>,
    ) -> Self {
        Self {
            closing_day,
            payment_month_offset,
            payment_day,
        }
    }

    /// True when both the month offset and payment day are configured.
    pub fn is_complete(&self) -> bool {
        self.payment_month_offset.is_some() && self.payment_day.is_some()
    }

    /// Due date for an invoice dated `invoice_date` under these terms.
    pub fn due_date(&self, invoice_date: NaiveDate) -> Option<NaiveDate> {
        calc_due_date(&self.params(invoice_date))
    }

    pub fn params(&self, invoice_date: NaiveDate) -> DueDateParams {
        DueDateParams {
            invoice_date,
            closing_day: self.closing_day,
            payment_month_offset: self.payment_month_offset,
            payment_day: self.payment_day,
        }
    }
}
