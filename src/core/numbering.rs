use chrono::{Datelike, NaiveDate};

use super::error::InvoiceError;

/// How often an invoice number sequence restarts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetPeriod {
    /// `{prefix}{yyyy}-{seq}`, restarting every calendar year.
    Yearly,
    /// `{prefix}{yyyymm}-{seq}`, restarting every month.
    Monthly,
}

/// Sequential invoice number generator.
///
/// Generates numbers like "INV-2024-001" (yearly) or "INV-202406-001"
/// (monthly). Issued numbers are never reused; moving to a new period
/// restarts the counter.
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    prefix: String,
    year: i32,
    month: u32,
    period: ResetPeriod,
    next_number: u64,
    zero_pad: usize,
}

impl InvoiceNumberSequence {
    /// Create a yearly sequence starting at 1.
    pub fn new(prefix: impl Into<String>, year: i32) -> Self {
        Self::starting_at(prefix, year, 1)
    }

    /// Create a yearly sequence continuing from a given number.
    pub fn starting_at(prefix: impl Into<String>, year: i32, next_number: u64) -> Self {
        Self {
            prefix: prefix.into(),
            year,
            month: 1,
            period: ResetPeriod::Yearly,
            next_number,
            zero_pad: 3,
        }
    }

    /// Create a monthly sequence starting at 1.
    pub fn monthly(prefix: impl Into<String>, year: i32, month: u32) -> Self {
        Self {
            prefix: prefix.into(),
            year,
            month: month.clamp(1, 12),
            period: ResetPeriod::Monthly,
            next_number: 1,
            zero_pad: 3,
        }
    }

    /// Set zero-padding width (default: 3, so "001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next invoice number.
    pub fn next_number(&mut self) -> String {
        let formatted = self.format(self.next_number);
        self.next_number += 1;
        formatted
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        self.format(self.next_number)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Current month; always 1 for yearly sequences.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn period(&self) -> ResetPeriod {
        self.period
    }

    /// Get the next number that will be issued (without prefix/formatting).
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }

    /// Advance to a new year, resetting the counter to 1.
    pub fn advance_year(&mut self, new_year: i32) -> Result<(), InvoiceError> {
        if new_year <= self.year {
            return Err(InvoiceError::Numbering(format!(
                "new year {new_year} must be greater than current year {}",
                self.year
            )));
        }
        self.year = new_year;
        self.month = 1;
        self.next_number = 1;
        Ok(())
    }

    /// Restart the counter if `date` lies in a later period.
    /// Returns true if the sequence was advanced.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        let later = match self.period {
            ResetPeriod::Yearly => date.year() > self.year,
            ResetPeriod::Monthly => (date.year(), date.month()) > (self.year, self.month),
        };
        if later {
            self.year = date.year();
            self.month = match self.period {
                ResetPeriod::Yearly => 1,
                ResetPeriod::Monthly => date.month(),
            };
            self.next_number = 1;
        }
        later
    }

    fn format(&self, num: u64) -> String {
        match self.period {
            ResetPeriod::Yearly => format!(
                "{}{}-{:0>width$}",
                self.prefix,
                self.year,
                num,
                width = self.zero_pad
            ),
            ResetPeriod::Monthly => format!(
                "{}{}{:02}-{:0>width$}",
                self.prefix,
                self.year,
                self.month,
                num,
                width = self.zero_pad
            ),
        }
    }
}
