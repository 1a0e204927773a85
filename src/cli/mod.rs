pub mod commands;
pub mod context;
pub mod output;
pub mod registry;
pub mod shell;
pub mod table;

pub use shell::run_cli;
