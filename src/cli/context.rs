//! Shared runtime state for CLI interactions and command execution.

use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;

use crate::cli::commands::{self, CommandResult, LoopControl};
use crate::cli::output;
use crate::cli::registry::CommandRegistry;
use crate::config::{Config, ConfigManager};
use crate::errors::CliError;
use crate::ledger::AppState;

const SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything a command handler can reach: the application state, the
/// loaded preferences, and the prompt theme.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub state: AppState,
    pub theme: ColorfulTheme,
    pub config: Config,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::new()?.load()?;
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        Ok(Self {
            mode,
            registry,
            state: AppState::new(),
            theme: ColorfulTheme::default(),
            config,
            last_command: None,
            running: true,
        })
    }

    pub fn is_interactive(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub fn prompt(&self) -> String {
        if self.state.filter.is_unconstrained() {
            "expenses> ".to_string()
        } else {
            "expenses (filtered)> ".to_string()
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn dispatch(&mut self, command: &str, raw: &str, args: &[&str]) -> CommandResult {
        match self.registry.handler(command) {
            Some(handler) => handler(self, args),
            None => {
                match self.suggest_command(command) {
                    Some(suggestion) => output::warning(format!(
                        "Unknown command `{raw}`. Did you mean `{suggestion}`?"
                    )),
                    None => output::warning(format!(
                        "Unknown command `{raw}`. Type `help` for the command list."
                    )),
                }
                Ok(LoopControl::Continue)
            }
        }
    }

    fn suggest_command(&self, input: &str) -> Option<&'static str> {
        self.registry
            .names()
            .map(|name| (name, levenshtein(input, name)))
            .filter(|(_, distance)| *distance <= SUGGESTION_DISTANCE)
            .min_by_key(|(_, distance)| *distance)
            .map(|(name, _)| name)
    }

    pub fn report_error(&mut self, err: CliError) {
        output::error(err);
    }

    pub fn confirm_exit(&self) -> Result<bool, CliError> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Exit the expense shell?")
            .default(true)
            .interact()?)
    }
}
