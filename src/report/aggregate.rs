//! Pure aggregation over an already-filtered expense sequence.
//!
//! Accumulation happens in full `f64` precision; [`round_cents`] exists for
//! presentation paths only. Empty inputs yield zero totals and empty or
//! zero-filled mappings, never an error. The single fail-fast condition is a
//! record carrying a non-finite amount, which signals a broken caller
//! contract rather than user input.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::Expense;
use crate::errors::{LedgerError, Result};

use super::window::DateWindow;

/// One category bucket of an aggregated mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub label: String,
    pub total: f64,
}

/// One calendar-day bucket of an aggregated mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: f64,
}

/// Rounds to two decimal places. Presentation only.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn checked_amount(expense: &Expense) -> Result<f64> {
    if !expense.amount.is_finite() {
        return Err(LedgerError::InvalidRecord(format!(
            "expense {} has non-finite amount",
            expense.id
        )));
    }
    Ok(expense.amount)
}

/// Sums the full sequence without rounding.
pub fn total<'a, I>(expenses: I) -> Result<f64>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut sum = 0.0;
    for expense in expenses {
        sum += checked_amount(expense)?;
    }
    Ok(sum)
}

/// Groups amounts by category label in first-seen order.
///
/// Categories with no matching records are simply absent.
pub fn category_totals<'a, I>(expenses: I) -> Result<Vec<CategoryTotal>>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut buckets: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        let amount = checked_amount(expense)?;
        let label = expense.category.label();
        match buckets.iter_mut().find(|bucket| bucket.label == label) {
            Some(bucket) => bucket.total += amount,
            None => buckets.push(CategoryTotal {
                label: label.to_string(),
                total: amount,
            }),
        }
    }
    Ok(buckets)
}

/// Buckets amounts per calendar day over the window, chronologically.
///
/// Every day of the window appears in the output, zero-filled where no
/// record matched; records dated outside the window are ignored.
pub fn daily_totals<'a, I>(expenses: I, window: &DateWindow) -> Result<Vec<DailyTotal>>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut buckets: BTreeMap<NaiveDate, f64> = window.days().map(|day| (day, 0.0)).collect();
    for expense in expenses {
        let amount = checked_amount(expense)?;
        if let Some(slot) = buckets.get_mut(&expense.date) {
            *slot += amount;
        }
    }
    Ok(buckets
        .into_iter()
        .map(|(date, total)| DailyTotal { date, total })
        .collect())
}

/// Cumulative day-by-day totals over an aggregated daily series.
pub fn running_totals(daily: &[DailyTotal]) -> Vec<DailyTotal> {
    let mut cumulative = 0.0;
    daily
        .iter()
        .map(|bucket| {
            cumulative += bucket.total;
            DailyTotal {
                date: bucket.date,
                total: cumulative,
            }
        })
        .collect()
}
