//! Pure domain models (Expense, Category, ExpenseFilter).
//! No I/O, no CLI. Only data types and the filter predicate.

pub mod category;
pub mod common;
pub mod expense;
pub mod filter;

pub use category::*;
pub use common::*;
pub use expense::*;
pub use filter::*;
