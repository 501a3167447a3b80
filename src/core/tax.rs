//! Consumption tax per rate group.
//!
//! Under the Qualified Invoice System (適格請求書等保存方式) tax is rounded
//! once per tax rate on each invoice, never per line.

use std::collections::btree_map;
use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::types::*;

/// Canonical group key for a tax rate: trailing zeros stripped.
pub fn rate_key(rate: Decimal) -> String {
    rate.normalize().to_string()
}

/// Group line items by tax rate and compute the tax of each group.
///
/// `tax = floor(subtotal * rate / 100)`. Amounts are not checked for sign;
/// a negative subtotal floors toward negative infinity.
pub fn summarize(items: &[LineItem]) -> TaxRateSummary {
    let mut summary = TaxRateSummary::default();

    for item in items {
        let group = summary
            .groups
            .entry(rate_key(item.tax_rate))
            .or_insert(TaxRateGroup {
                rate: item.tax_rate.normalize(),
                subtotal: 0,
                tax: 0,
            });
        group.subtotal = group.subtotal.saturating_add(item.amount);
    }

    for group in summary.groups.values_mut() {
        group.tax = floor_tax(group.subtotal, group.rate);
    }

    summary
}

/// Sum subtotals and taxes across all rate groups.
pub fn total_from_summary(summary: &TaxRateSummary) -> InvoiceTotals {
    summary
        .groups
        .values()
        .fold(InvoiceTotals::default(), |acc, g| InvoiceTotals {
            total_amount: acc
                .total_amount
                .saturating_add(g.subtotal.saturating_add(g.tax)),
            tax_amount: acc.tax_amount.saturating_add(g.tax),
        })
}

fn floor_tax(subtotal: i64, rate: Decimal) -> i64 {
    let tax = Decimal::from(subtotal)
        .checked_mul(rate)
        .and_then(|v| v.checked_div(dec!(100)))
        .map(|v| v.round_dp_with_strategy(0, RoundingStrategy::ToNegativeInfinity));

    match tax.and_then(|t| t.to_i64()) {
        Some(t) => t,
        // Out of i64 range: saturate in the direction of the product.
        None if (subtotal < 0) != rate.is_sign_negative() => i64::MIN,
        None => i64::MAX,
    }
}

impl TaxRateSummary {
    /// Group for a rate key such as `"10"`.
    pub fn get(&self, key: &str) -> Option<&TaxRateGroup> {
        self.groups.get(key)
    }

    /// Group for a rate value; `dec!(10.0)` finds the `"10"` group.
    pub fn get_rate(&self, rate: Decimal) -> Option<&TaxRateGroup> {
        self.groups.get(&rate_key(rate))
    }

    /// Iterate `(key, group)` pairs in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, TaxRateGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Shorthand for [`total_from_summary`].
    pub fn totals(&self) -> InvoiceTotals {
        total_from_summary(self)
    }
}

impl<'a> IntoIterator for &'a TaxRateSummary {
    type Item = (&'a String, &'a TaxRateGroup);
    type IntoIter = btree_map::Iter<'a, String, TaxRateGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl fmt::Display for TaxRateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, group)) in self.groups.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{key}%: {} + {}", group.subtotal, group.tax)?;
        }
        Ok(())
    }
}
