use chrono::NaiveDate;
use expense_core::domain::{Category, Expense, ExpenseDraft, ExpenseFilter};
use expense_core::report::{category_totals, daily_totals, total, DateWindow, SpendingReport};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn expense(amount: &str, category: &str, day: NaiveDate) -> Expense {
    ExpenseDraft::new("sample", amount, category)
        .on_date(day)
        .validate()
        .expect("valid draft")
}

fn scenario_records() -> Vec<Expense> {
    vec![
        expense("10.00", "Food", date(2024, 1, 1)),
        expense("5.00", "Food", date(2024, 1, 3)),
        expense("20.00", "Transportation", date(2024, 1, 2)),
    ]
}

#[test]
fn identity_filter_accepts_every_record() {
    let filter = ExpenseFilter::default();
    for record in scenario_records() {
        assert!(filter.matches(&record));
    }
}

#[test]
fn category_filter_narrows_totals_to_matching_records() {
    let records = scenario_records();
    let filter = ExpenseFilter::by_category(Category::Food);
    let filtered: Vec<&Expense> = records.iter().filter(|r| filter.matches(r)).collect();

    let grand = total(filtered.iter().copied()).unwrap();
    assert!((grand - 15.0).abs() < 1e-9);

    let buckets = category_totals(filtered.iter().copied()).unwrap();
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].label, "Food");
    assert!((buckets[0].total - 15.0).abs() < 1e-9);
}

#[test]
fn daily_buckets_zero_fill_under_category_filter() {
    let records = scenario_records();
    let window = DateWindow::new(date(2024, 1, 1), date(2024, 1, 3)).unwrap();

    let daily = daily_totals(records.iter(), &window).unwrap();
    let totals: Vec<f64> = daily.iter().map(|bucket| bucket.total).collect();
    assert_eq!(totals, vec![10.0, 20.0, 5.0]);

    // Same records under a Food-only filter: Jan 2 stays, zero-filled.
    let filter = ExpenseFilter::by_category(Category::Food);
    let filtered: Vec<&Expense> = records.iter().filter(|r| filter.matches(r)).collect();
    let daily = daily_totals(filtered.iter().copied(), &window).unwrap();
    let totals: Vec<f64> = daily.iter().map(|bucket| bucket.total).collect();
    assert_eq!(totals, vec![10.0, 0.0, 5.0]);
}

#[test]
fn grand_total_equals_category_subtotal_sum() {
    let records = vec![
        expense("0.10", "Food", date(2024, 3, 1)),
        expense("0.20", "Food", date(2024, 3, 2)),
        expense("1.33", "Housing", date(2024, 3, 3)),
        expense("2.47", "Utilities", date(2024, 3, 4)),
        expense("19.99", "Entertainment", date(2024, 3, 5)),
    ];
    let grand = total(records.iter()).unwrap();
    let by_category: f64 = category_totals(records.iter())
        .unwrap()
        .iter()
        .map(|bucket| bucket.total)
        .sum();
    assert!((grand - by_category).abs() < 0.01);
}

#[test]
fn daily_key_set_always_covers_the_window() {
    let window = DateWindow::new(date(2024, 2, 1), date(2024, 2, 29)).unwrap();
    let sparse = vec![expense("7.00", "Food", date(2024, 2, 14))];
    let daily = daily_totals(sparse.iter(), &window).unwrap();
    assert_eq!(daily.len(), 29);
    assert_eq!(
        daily.iter().map(|bucket| bucket.date).collect::<Vec<_>>(),
        window.days().collect::<Vec<_>>()
    );
}

#[test]
fn empty_store_produces_zeroed_outputs() {
    let window = DateWindow::new(date(2024, 1, 1), date(2024, 1, 5)).unwrap();
    assert_eq!(total([]).unwrap(), 0.0);
    assert!(category_totals([]).unwrap().is_empty());
    let daily = daily_totals([], &window).unwrap();
    assert_eq!(daily.len(), 5);
    assert!(daily.iter().all(|bucket| bucket.total == 0.0));
}

#[test]
fn report_builder_is_idempotent() {
    let records = scenario_records();
    let window = DateWindow::new(date(2024, 1, 1), date(2024, 1, 3)).unwrap();
    let first = SpendingReport::build(records.iter(), window.clone()).unwrap();
    let second = SpendingReport::build(records.iter(), window).unwrap();
    assert_eq!(first.total, second.total);
    assert_eq!(first.by_category, second.by_category);
    assert_eq!(first.by_day, second.by_day);
}

#[test]
fn custom_categories_group_separately_and_case_sensitively() {
    let records = vec![
        expense("1.00", "Gifts", date(2024, 1, 1)),
        expense("2.00", "gifts", date(2024, 1, 1)),
        expense("3.00", "Gifts", date(2024, 1, 2)),
    ];
    let buckets = category_totals(records.iter()).unwrap();
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].label, "Gifts");
    assert!((buckets[0].total - 4.0).abs() < 1e-9);
    assert_eq!(buckets[1].label, "gifts");
}
