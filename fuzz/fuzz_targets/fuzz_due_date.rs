#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use seikyu::core::{DueDateParams, calc_due_date};

fuzz_target!(|input: (i32, u32, u32, Option<u32>, Option<i32>, Option<u32>)| {
    let (year, month, day, closing_day, payment_month_offset, payment_day) = input;
    let Some(invoice_date) = NaiveDate::from_ymd_opt(year, month, day) else {
        return;
    };
    // Arbitrary terms may overflow the date range but must never panic.
    let _ = calc_due_date(&DueDateParams {
        invoice_date,
        closing_day,
        payment_month_offset,
        payment_day,
    });
});
