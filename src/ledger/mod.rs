//! The in-memory ledger store and the command-driven application state.

pub mod state;
pub mod store;

pub use state::{AppState, Command, CommandOutcome};
pub use store::LedgerStore;
