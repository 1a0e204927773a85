//! Domain model for expense records and form-style validation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{LedgerError, Result};

use super::{category::Category, common::*};

/// One recorded expense.
///
/// Records are immutable once created; the only lifecycle transitions are
/// creation from a validated [`ExpenseDraft`] and explicit removal from the
/// store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    /// Always positive and finite; precision is handled at presentation time.
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} ({} on {})", self.description, self.category, self.date)
    }
}

/// Unvalidated form input for a new expense.
///
/// Mirrors the add-expense form: description, amount as typed, category
/// label, and an optional date that defaults to today.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: Option<NaiveDate>,
}

impl ExpenseDraft {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category: category.into(),
            date: None,
        }
    }

    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Validates the draft and mints an [`Expense`] with a fresh identifier.
    ///
    /// Rules match the expense form: non-empty description, numeric positive
    /// amount, non-empty category. The date defaults to today when absent.
    pub fn validate(self) -> Result<Expense> {
        let description = self.description.trim().to_string();
        if description.is_empty() {
            return Err(LedgerError::validation(
                "description",
                "description is required",
            ));
        }

        let raw_amount = self.amount.trim();
        if raw_amount.is_empty() {
            return Err(LedgerError::validation("amount", "amount is required"));
        }
        let amount: f64 = raw_amount.parse().map_err(|_| {
            LedgerError::validation("amount", format!("`{raw_amount}` is not a number"))
        })?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::validation(
                "amount",
                "amount must be greater than zero",
            ));
        }

        let category_label = self.category.trim();
        if category_label.is_empty() {
            return Err(LedgerError::validation("category", "category is required"));
        }

        Ok(Expense {
            id: Uuid::new_v4(),
            description,
            amount,
            category: Category::from_label(category_label),
            date: self.date.unwrap_or_else(|| Utc::now().date_naive()),
            created_at: Utc::now(),
        })
    }
}
