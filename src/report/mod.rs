//! Aggregation over filtered expense sequences: totals, category
//! subtotals, zero-filled daily buckets, and the view-facing summaries
//! built from them.

pub mod aggregate;
pub mod summary;
pub mod window;

pub use aggregate::{
    category_totals, daily_totals, round_cents, running_totals, total, CategoryTotal, DailyTotal,
};
pub use summary::{DashboardSummary, SpendingReport};
pub use window::DateWindow;
