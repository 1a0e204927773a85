use chrono::NaiveDate;
use expense_core::domain::{Category, ExpenseDraft, ExpenseFilter};
use expense_core::ledger::{AppState, Command, CommandOutcome};
use expense_core::report::DashboardSummary;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seeded_state() -> AppState {
    let mut state = AppState::new();
    for (description, amount, category, day) in [
        ("Groceries", "10.00", "Food", date(2024, 1, 1)),
        ("Train", "20.00", "Transportation", date(2024, 1, 2)),
        ("Dinner", "5.00", "Food", date(2024, 1, 3)),
    ] {
        state
            .apply(Command::AddExpense(
                ExpenseDraft::new(description, amount, category).on_date(day),
            ))
            .expect("seed expense");
    }
    state
}

#[test]
fn add_remove_lifecycle_is_synchronous() {
    let mut state = seeded_state();
    assert_eq!(state.store.len(), 3);

    let outcome = state
        .apply(Command::AddExpense(
            ExpenseDraft::new("Movie", "15.00", "Entertainment").on_date(date(2024, 1, 4)),
        ))
        .unwrap();
    let id = match outcome {
        CommandOutcome::Added(id) => id,
        other => panic!("unexpected outcome: {other:?}"),
    };
    assert_eq!(state.store.len(), 4);
    assert!(state.store.get(id).is_some());

    state.apply(Command::RemoveExpense(id)).unwrap();
    assert_eq!(state.store.len(), 3);
    assert!(state.store.get(id).is_none());
}

#[test]
fn invalid_drafts_never_reach_the_store() {
    let mut state = AppState::new();
    for draft in [
        ExpenseDraft::new("", "5", "Food"),
        ExpenseDraft::new("Lunch", "-1", "Food"),
        ExpenseDraft::new("Lunch", "abc", "Food"),
        ExpenseDraft::new("Lunch", "5", ""),
    ] {
        assert!(state.apply(Command::AddExpense(draft)).is_err());
    }
    assert!(state.store.is_empty());
}

#[test]
fn removing_an_unknown_id_is_an_error() {
    let mut state = seeded_state();
    let err = state
        .apply(Command::RemoveExpense(uuid::Uuid::new_v4()))
        .expect_err("unknown id");
    assert!(err.to_string().contains("Expense not found"));
    assert_eq!(state.store.len(), 3);
}

#[test]
fn filter_commands_shape_the_visible_sequence() {
    let mut state = seeded_state();

    state
        .apply(Command::SetFilter(ExpenseFilter::by_category(
            Category::Food,
        )))
        .unwrap();
    assert_eq!(state.filtered().len(), 2);

    let mut filter = ExpenseFilter::by_category(Category::Food);
    filter.start_date = Some(date(2024, 1, 2));
    state.apply(Command::SetFilter(filter)).unwrap();
    let visible = state.filtered();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].description, "Dinner");

    state.apply(Command::ClearFilter).unwrap();
    assert_eq!(state.filtered().len(), 3);
}

#[test]
fn dashboard_ignores_the_active_filter() {
    let mut state = seeded_state();
    state
        .apply(Command::SetFilter(ExpenseFilter::by_category(
            Category::Housing,
        )))
        .unwrap();
    assert!(state.filtered().is_empty());

    let summary = DashboardSummary::build(&state.store).unwrap();
    assert_eq!(summary.expense_count, 3);
    assert!((summary.total - 35.0).abs() < 1e-9);
}
