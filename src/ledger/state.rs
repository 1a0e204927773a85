//! Explicit application state container owned by the composition root.
//!
//! Views never reach for ambient globals; they hold a reference to the
//! [`AppState`] and route every mutation through a [`Command`].

use uuid::Uuid;

use crate::domain::{Expense, ExpenseDraft, ExpenseFilter};
use crate::errors::Result;

use super::store::LedgerStore;

/// A mutation of the application state.
#[derive(Debug, Clone)]
pub enum Command {
    AddExpense(ExpenseDraft),
    RemoveExpense(Uuid),
    SetFilter(ExpenseFilter),
    ClearFilter,
}

/// Outcome of a successfully applied [`Command`].
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Added(Uuid),
    Removed(Expense),
    FilterUpdated,
}

/// The ledger store plus the active filter state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: LedgerStore,
    pub filter: ExpenseFilter,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a command, mutating the state synchronously.
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome> {
        match command {
            Command::AddExpense(draft) => {
                let id = self.store.add(draft)?;
                Ok(CommandOutcome::Added(id))
            }
            Command::RemoveExpense(id) => {
                let removed = self.store.remove(id)?;
                Ok(CommandOutcome::Removed(removed))
            }
            Command::SetFilter(filter) => {
                self.filter = filter;
                Ok(CommandOutcome::FilterUpdated)
            }
            Command::ClearFilter => {
                self.filter = ExpenseFilter::default();
                Ok(CommandOutcome::FilterUpdated)
            }
        }
    }

    /// The record sequence with the active filter applied, in store order.
    pub fn filtered(&self) -> Vec<&Expense> {
        self.store
            .expenses()
            .iter()
            .filter(|expense| self.filter.matches(expense))
            .collect()
    }
}
