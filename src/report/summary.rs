//! View-facing summaries built on the aggregation core.

use crate::domain::Expense;
use crate::errors::Result;
use crate::ledger::LedgerStore;

use super::aggregate::{self, CategoryTotal, DailyTotal};
use super::window::DateWindow;

const RECENT_LIMIT: usize = 5;

/// Dashboard numbers: grand total, record count, and the latest entries.
///
/// Reads the whole store regardless of the active filter; recent activity
/// should never be silently hidden by a leftover constraint.
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub total: f64,
    pub expense_count: usize,
    pub recent: Vec<Expense>,
}

impl DashboardSummary {
    pub fn build(store: &LedgerStore) -> Result<Self> {
        let total = aggregate::total(store.expenses())?;
        let mut recent: Vec<Expense> = store.expenses().to_vec();
        recent.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        recent.truncate(RECENT_LIMIT);
        Ok(Self {
            total,
            expense_count: store.len(),
            recent,
        })
    }
}

/// Chart-ready report data for an explicit date window.
///
/// The window is applied to the supplied sequence before aggregation, so the
/// total, the category series, and the daily series all describe the same
/// set of records.
#[derive(Debug, Clone)]
pub struct SpendingReport {
    pub window: DateWindow,
    pub total: f64,
    pub by_category: Vec<CategoryTotal>,
    pub by_day: Vec<DailyTotal>,
}

impl SpendingReport {
    pub fn build<'a, I>(expenses: I, window: DateWindow) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let windowed: Vec<&Expense> = expenses
            .into_iter()
            .filter(|expense| window.contains(expense.date))
            .collect();
        let total = aggregate::total(windowed.iter().copied())?;
        let by_category = aggregate::category_totals(windowed.iter().copied())?;
        let by_day = aggregate::daily_totals(windowed.iter().copied(), &window)?;
        Ok(Self {
            window,
            total,
            by_category,
            by_day,
        })
    }
}
