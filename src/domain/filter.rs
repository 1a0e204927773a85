//! The filter predicate applied to the expense sequence before display.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{category::Category, expense::Expense};

/// Active category/date constraints. All-absent means "no filtering".
///
/// Absent or degenerate fields degrade to "no constraint"; the predicate is
/// total and never errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExpenseFilter {
    pub category: Option<Category>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ExpenseFilter {
    pub fn by_category(category: Category) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
            ..Self::default()
        }
    }

    /// True when no constraint is set, i.e. the identity filter.
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_none() && self.start_date.is_none() && self.end_date.is_none()
    }

    /// Decides whether a record passes the active constraints.
    ///
    /// Category comparison is a case-sensitive label match; date bounds are
    /// inclusive calendar-day comparisons.
    pub fn matches(&self, expense: &Expense) -> bool {
        let category_ok = match &self.category {
            Some(category) => expense.category.label() == category.label(),
            None => true,
        };
        let start_ok = match self.start_date {
            Some(start) => expense.date >= start,
            None => true,
        };
        let end_ok = match self.end_date {
            Some(end) => expense.date <= end,
            None => true,
        };
        category_ok && start_ok && end_ok
    }
}
