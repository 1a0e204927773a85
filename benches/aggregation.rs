use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use expense_core::domain::{Expense, ExpenseDraft};
use expense_core::ledger::LedgerStore;
use expense_core::report::{category_totals, daily_totals, total, DateWindow};

const CATEGORIES: [&str; 6] = [
    "Food",
    "Transportation",
    "Housing",
    "Entertainment",
    "Utilities",
    "Others",
];

fn build_sample_store(expense_count: usize) -> LedgerStore {
    let mut store = LedgerStore::new();
    let start_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    for idx in 0..expense_count {
        let day = start_date + Duration::days((idx % 365) as i64);
        let amount = format!("{:.2}", 1.0 + (idx % 100) as f64 / 4.0);
        let draft = ExpenseDraft::new(
            format!("entry-{idx}"),
            amount,
            CATEGORIES[idx % CATEGORIES.len()],
        )
        .on_date(day);
        store.add(draft).expect("valid draft");
    }

    store
}

fn bench_aggregation(c: &mut Criterion) {
    let store = build_sample_store(black_box(10_000));
    let records: Vec<&Expense> = store.expenses().iter().collect();
    let window = DateWindow::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    )
    .expect("valid window");

    c.bench_function("total_10k", |b| {
        b.iter(|| {
            let sum = total(records.iter().copied()).expect("finite amounts");
            black_box(sum);
        })
    });

    c.bench_function("category_totals_10k", |b| {
        b.iter(|| {
            let buckets = category_totals(records.iter().copied()).expect("finite amounts");
            black_box(buckets);
        })
    });

    c.bench_function("daily_totals_10k_one_year", |b| {
        b.iter(|| {
            let buckets =
                daily_totals(records.iter().copied(), &window).expect("finite amounts");
            black_box(buckets);
        })
    });
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
