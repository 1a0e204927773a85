use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Expense, ExpenseDraft};
use crate::errors::{LedgerError, Result};

/// Ordered in-memory sequence of expense records.
///
/// All state lives here for the lifetime of the process; there is no
/// persistence layer. Mutations are synchronous and immediately visible to
/// subsequent reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerStore {
    #[serde(default)]
    expenses: Vec<Expense>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LedgerStore {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            expenses: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Validates a draft and appends the resulting record.
    pub fn add(&mut self, draft: ExpenseDraft) -> Result<Uuid> {
        let expense = draft.validate()?;
        Ok(self.insert(expense))
    }

    /// Appends an already-built record, preserving insertion order.
    pub fn insert(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        tracing::debug!(%id, amount = expense.amount, "expense recorded");
        self.expenses.push(expense);
        self.touch();
        id
    }

    /// Removes a record by identifier, returning it.
    pub fn remove(&mut self, id: Uuid) -> Result<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(LedgerError::ExpenseNotFound(id))?;
        let removed = self.expenses.remove(index);
        self.touch();
        Ok(removed)
    }

    pub fn get(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    /// The full record sequence in insertion order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}
