//! Shell command handlers: the CLI faces of the add form, the expense
//! table, the dashboard, and the reports view.

use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};
use uuid::Uuid;

use crate::cli::context::ShellContext;
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::table::{Table, TableColumn, TableRenderer};
use crate::currency::{format_amount, format_date};
use crate::domain::{Category, Displayable, Expense, ExpenseDraft, ExpenseFilter};
use crate::errors::{CliError, LedgerError};
use crate::ledger::{Command, CommandOutcome};
use crate::report::{round_cents, running_totals, DashboardSummary, DateWindow, SpendingReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<LoopControl, CliError>;
pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "help",
        "List available commands",
        "help",
        cmd_help,
    ));
    registry.register(CommandEntry::new(
        "add",
        "Record a new expense",
        "add [<description> <amount> <category> [date]]",
        cmd_add,
    ));
    registry.register(CommandEntry::new(
        "list",
        "Show expenses matching the active filter",
        "list [--json]",
        cmd_list,
    ));
    registry.register(CommandEntry::new(
        "delete",
        "Remove an expense by id",
        "delete <id>",
        cmd_delete,
    ));
    registry.register(CommandEntry::new(
        "filter",
        "Inspect or change the active filter",
        "filter [show|clear|category <label>|from <date>|to <date>|between <start> <end>]",
        cmd_filter,
    ));
    registry.register(CommandEntry::new(
        "categories",
        "List the configured category labels",
        "categories",
        cmd_categories,
    ));
    registry.register(CommandEntry::new(
        "summary",
        "Show the dashboard summary",
        "summary",
        cmd_summary,
    ));
    registry.register(CommandEntry::new(
        "report",
        "Aggregate spending over a date window",
        "report <start> <end>",
        cmd_report,
    ));
    registry.register(CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit));
    registry.register(CommandEntry::new("quit", "Leave the shell", "quit", cmd_exit));
}

fn parse_date(raw: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| CliError::Input(format!("`{raw}` is not a date (expected YYYY-MM-DD)")))
}

fn cmd_help(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Commands");
    for entry in context.registry.list() {
        output::line(format!(
            "  {:<12} {:<45} {}",
            entry.name, entry.description, entry.usage
        ));
    }
    Ok(LoopControl::Continue)
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = if args.is_empty() {
        if !context.is_interactive() {
            return Err(CliError::Input(
                "usage: add <description> <amount> <category> [date]".into(),
            ));
        }
        prompt_draft(context)?
    } else {
        if args.len() < 3 {
            return Err(CliError::Input(
                "usage: add <description> <amount> <category> [date]".into(),
            ));
        }
        let mut draft = ExpenseDraft::new(args[0], args[1], args[2]);
        if let Some(raw) = args.get(3) {
            draft = draft.on_date(parse_date(raw)?);
        }
        draft
    };

    match context.state.apply(Command::AddExpense(draft)) {
        Ok(CommandOutcome::Added(id)) => output::success(format!("Expense added ({id})")),
        Ok(_) => {}
        Err(err) => output::error(err),
    }
    Ok(LoopControl::Continue)
}

fn prompt_draft(context: &ShellContext) -> Result<ExpenseDraft, CliError> {
    let description: String = Input::with_theme(&context.theme)
        .with_prompt("Description")
        .interact_text()?;
    let amount: String = Input::with_theme(&context.theme)
        .with_prompt("Amount")
        .interact_text()?;

    let mut labels = context.config.categories.clone();
    labels.push("Custom…".to_string());
    let selection = Select::with_theme(&context.theme)
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact()?;
    let category = if selection + 1 == labels.len() {
        Input::with_theme(&context.theme)
            .with_prompt("Custom category")
            .interact_text()?
    } else {
        labels[selection].clone()
    };

    let date_raw: String = Input::with_theme(&context.theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .default(chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string())
        .interact_text()?;

    Ok(ExpenseDraft::new(description, amount, category).on_date(parse_date(&date_raw)?))
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let as_json = matches!(args.first(), Some(&"--json"));
    let filtered: Vec<&Expense> = context.state.filtered();

    if as_json {
        let json = serde_json::to_string_pretty(&filtered).map_err(LedgerError::from)?;
        output::line(json);
        return Ok(LoopControl::Continue);
    }

    if filtered.is_empty() {
        output::info("No expenses found. Add your first expense to get started!");
        return Ok(LoopControl::Continue);
    }

    let title = if context.state.filter.is_unconstrained() {
        "All Expenses"
    } else {
        "Filtered Expenses"
    };
    let mut table = Table::new(
        Some(title),
        vec![
            TableColumn::new("Date", 12),
            TableColumn::new("Description", 28),
            TableColumn::new("Category", 16),
            TableColumn::new("Amount", 12),
            TableColumn::new("Id", 36),
        ],
    );
    for expense in &filtered {
        table.add_row(vec![
            format_date(&context.config.locale, expense.date),
            expense.description.clone(),
            expense.category.label().to_string(),
            format_amount(
                round_cents(expense.amount),
                &context.config.currency,
                &context.config.locale,
            ),
            expense.id.to_string(),
        ]);
    }
    TableRenderer::render(&table);

    let total = crate::report::total(filtered.iter().copied())?;
    output::info(format!(
        "Total: {} ({} expense{})",
        format_amount(
            round_cents(total),
            &context.config.currency,
            &context.config.locale
        ),
        filtered.len(),
        if filtered.len() == 1 { "" } else { "s" }
    ));
    Ok(LoopControl::Continue)
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = args
        .first()
        .ok_or_else(|| CliError::Input("usage: delete <id>".into()))?;
    let id: Uuid = raw
        .parse()
        .map_err(|_| CliError::Input(format!("`{raw}` is not a valid expense id")))?;

    if context.is_interactive() {
        let confirmed = Confirm::with_theme(&context.theme)
            .with_prompt("Are you sure you want to delete this expense?")
            .default(false)
            .interact()?;
        if !confirmed {
            output::info("Delete cancelled.");
            return Ok(LoopControl::Continue);
        }
    }

    match context.state.apply(Command::RemoveExpense(id)) {
        Ok(CommandOutcome::Removed(expense)) => {
            output::success(format!("Deleted {}", expense.display_label()));
        }
        Ok(_) => {}
        Err(err) => output::error(err),
    }
    Ok(LoopControl::Continue)
}

fn cmd_filter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().copied() {
        None | Some("show") => {
            show_filter(&context.state.filter);
        }
        Some("clear") => {
            context.state.apply(Command::ClearFilter)?;
            output::success("Filter cleared.");
        }
        Some("category") => {
            let label = args[1..].join(" ");
            if label.is_empty() {
                return Err(CliError::Input("usage: filter category <label>".into()));
            }
            let mut filter = context.state.filter.clone();
            filter.category = Some(Category::from_label(label));
            set_filter(context, filter)?;
        }
        Some("from") => {
            let raw = args
                .get(1)
                .ok_or_else(|| CliError::Input("usage: filter from <date>".into()))?;
            let mut filter = context.state.filter.clone();
            filter.start_date = Some(parse_date(raw)?);
            set_filter(context, filter)?;
        }
        Some("to") => {
            let raw = args
                .get(1)
                .ok_or_else(|| CliError::Input("usage: filter to <date>".into()))?;
            let mut filter = context.state.filter.clone();
            filter.end_date = Some(parse_date(raw)?);
            set_filter(context, filter)?;
        }
        Some("between") => {
            if args.len() < 3 {
                return Err(CliError::Input("usage: filter between <start> <end>".into()));
            }
            let mut filter = context.state.filter.clone();
            filter.start_date = Some(parse_date(args[1])?);
            filter.end_date = Some(parse_date(args[2])?);
            set_filter(context, filter)?;
        }
        Some(other) => {
            return Err(CliError::Input(format!(
                "unknown filter subcommand `{other}`"
            )));
        }
    }
    Ok(LoopControl::Continue)
}

fn set_filter(context: &mut ShellContext, filter: ExpenseFilter) -> Result<(), CliError> {
    context.state.apply(Command::SetFilter(filter))?;
    show_filter(&context.state.filter);
    Ok(())
}

fn show_filter(filter: &ExpenseFilter) {
    if filter.is_unconstrained() {
        output::info("No filter active; all expenses are shown.");
        return;
    }
    let category = filter
        .category
        .as_ref()
        .map(|category| category.label().to_string())
        .unwrap_or_else(|| "(any)".into());
    let start = filter
        .start_date
        .map(|date| date.to_string())
        .unwrap_or_else(|| "(open)".into());
    let end = filter
        .end_date
        .map(|date| date.to_string())
        .unwrap_or_else(|| "(open)".into());
    output::info(format!(
        "Active filter: category {category}, from {start}, to {end}"
    ));
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Categories");
    for label in &context.config.categories {
        output::line(format!("  {label}"));
    }
    Ok(LoopControl::Continue)
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = DashboardSummary::build(&context.state.store)?;
    output::section("Dashboard");
    output::info(format!(
        "Total Expenses: {}",
        format_amount(
            round_cents(summary.total),
            &context.config.currency,
            &context.config.locale
        )
    ));
    output::info(format!("Recorded expenses: {}", summary.expense_count));

    if summary.recent.is_empty() {
        output::info("No expenses recorded yet. Add your first expense to get started!");
        return Ok(LoopControl::Continue);
    }

    let mut table = Table::new(
        Some("Recent Transactions"),
        vec![
            TableColumn::new("Date", 12),
            TableColumn::new("Description", 28),
            TableColumn::new("Category", 16),
            TableColumn::new("Amount", 12),
        ],
    );
    for expense in &summary.recent {
        table.add_row(vec![
            format_date(&context.config.locale, expense.date),
            expense.description.clone(),
            expense.category.label().to_string(),
            format_amount(
                round_cents(expense.amount),
                &context.config.currency,
                &context.config.locale,
            ),
        ]);
    }
    TableRenderer::render(&table);
    Ok(LoopControl::Continue)
}

fn cmd_report(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 2 {
        return Err(CliError::Input("usage: report <start> <end>".into()));
    }
    let window = DateWindow::new(parse_date(args[0])?, parse_date(args[1])?)
        .map_err(CliError::from)?;

    // The report honors the active category filter but owns its date window.
    let category_filter = ExpenseFilter {
        category: context.state.filter.category.clone(),
        ..ExpenseFilter::default()
    };
    let records: Vec<&Expense> = context
        .state
        .store
        .expenses()
        .iter()
        .filter(|expense| category_filter.matches(expense))
        .collect();
    let report = SpendingReport::build(records, window)?;

    output::section("Spending Report");
    output::info(format!(
        "Window: {} to {}",
        report.window.start, report.window.end
    ));
    output::info(format!(
        "Total: {}",
        format_amount(
            round_cents(report.total),
            &context.config.currency,
            &context.config.locale
        )
    ));

    let mut category_table = Table::new(
        Some("Expenses by Category"),
        vec![TableColumn::new("Category", 20), TableColumn::new("Amount", 12)],
    );
    for bucket in &report.by_category {
        category_table.add_row(vec![
            bucket.label.clone(),
            format_amount(
                round_cents(bucket.total),
                &context.config.currency,
                &context.config.locale,
            ),
        ]);
    }
    TableRenderer::render(&category_table);

    let running = running_totals(&report.by_day);
    let mut daily_table = Table::new(
        Some("Daily Expenses"),
        vec![
            TableColumn::new("Date", 12),
            TableColumn::new("Amount", 12),
            TableColumn::new("Cumulative", 12),
        ],
    );
    for (bucket, cumulative) in report.by_day.iter().zip(&running) {
        daily_table.add_row(vec![
            format_date(&context.config.locale, bucket.date),
            format_amount(
                round_cents(bucket.total),
                &context.config.currency,
                &context.config.locale,
            ),
            format_amount(
                round_cents(cumulative.total),
                &context.config.currency,
                &context.config.locale,
            ),
        ]);
    }
    TableRenderer::render(&daily_table);
    Ok(LoopControl::Continue)
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info("Goodbye.");
    Ok(LoopControl::Exit)
}
