use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use seikyu::core::*;
use seikyu::corporate;

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn month_end_terms() -> BillingTerms {
    BillingTerms::new(Some(0), Some(1), Some(0))
}

fn build_10_line_invoice() -> Invoice {
    let mut builder = InvoiceBuilder::new("INV-BENCH-001", test_date())
        .buyer("株式会社ベンチマーク")
        .registration_number("T7000012050002")
        .billing_terms(month_end_terms());

    for i in 1..=10 {
        builder = builder.add_line(InvoiceLineBuilder::new(format!("作業 {i}"), 5, 12_000).build());
    }

    builder.build().unwrap()
}

fn items_1000() -> Vec<LineItem> {
    (0..1000)
        .map(|i| {
            let rate = if i % 3 == 0 { dec!(8) } else { dec!(10) };
            LineItem::new(998 + i, rate)
        })
        .collect()
}

fn bench_build_invoice(c: &mut Criterion) {
    c.bench_function("build_invoice_10_lines", |b| {
        b.iter(|| black_box(build_10_line_invoice()));
    });
}

fn bench_summarize_1000_items(c: &mut Criterion) {
    let items = items_1000();
    c.bench_function("summarize_1000_items", |b| {
        b.iter(|| black_box(summarize(black_box(&items))));
    });
}

fn bench_due_date_year(c: &mut Criterion) {
    let terms = BillingTerms::new(Some(20), Some(1), Some(10));
    let days: Vec<NaiveDate> = test_date().iter_days().take(365).collect();
    c.bench_function("due_date_365_days", |b| {
        b.iter(|| {
            for d in &days {
                black_box(terms.due_date(black_box(*d)));
            }
        });
    });
}

fn bench_validate_corporate_number(c: &mut Criterion) {
    c.bench_function("validate_corporate_number", |b| {
        b.iter(|| black_box(corporate::validate(black_box(Some("７０００-０１２０-５０００２")))));
    });
}

fn bench_validate_invoice(c: &mut Criterion) {
    let invoice = build_10_line_invoice();
    c.bench_function("validate_invoice", |b| {
        b.iter(|| black_box(validate_invoice(black_box(&invoice))));
    });
}

criterion_group!(
    benches,
    bench_build_invoice,
    bench_summarize_1000_items,
    bench_due_date_year,
    bench_validate_corporate_number,
    bench_validate_invoice,
);
criterion_main!(benches);
