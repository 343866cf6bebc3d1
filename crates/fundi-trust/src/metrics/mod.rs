//! Metric aggregation: verification rates, leaderboards, trend windows, and
//! period-over-period deltas for the analytics dashboard.

mod aggregate;
pub mod domain;
mod format;

pub use aggregate::{
    bar_fill_pct, compare, max_trend_value, rank, rank_by, verification_rate, window_tail,
};
pub use domain::{
    ChangeDirection, ComparativeResult, Delta, EntityPerformance, MetricSnapshot, RankKey,
    WorkTrend,
};
pub use format::{format_currency, format_signed};
