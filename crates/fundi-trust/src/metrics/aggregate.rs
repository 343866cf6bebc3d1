use super::domain::{ComparativeResult, Delta, EntityPerformance, MetricSnapshot, RankKey, WorkTrend};
use std::cmp::Ordering;

/// Share of verified work as a whole percentage; zero when nothing was logged.
pub fn verification_rate(verified: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    (verified as f64 / total as f64 * 100.0).round() as u32
}

pub fn compare(current: &MetricSnapshot, previous: &MetricSnapshot) -> ComparativeResult {
    ComparativeResult {
        current: current.clone(),
        previous: previous.clone(),
        total_count: count_delta(current.total_count, previous.total_count),
        verified_count: count_delta(current.verified_count, previous.verified_count),
        earnings: amount_delta(current.earnings, previous.earnings),
        unique_entities: count_delta(current.unique_entities, previous.unique_entities),
    }
}

fn count_delta(current: u64, previous: u64) -> Delta<i64> {
    let absolute = i128::from(current) - i128::from(previous);
    let absolute_change = i64::try_from(absolute).unwrap_or(if absolute > 0 {
        i64::MAX
    } else {
        i64::MIN
    });

    Delta {
        absolute_change,
        percent_change: percent_change(absolute as f64, previous as f64),
    }
}

fn amount_delta(current: f64, previous: f64) -> Delta<f64> {
    let absolute_change = current - previous;
    Delta {
        absolute_change,
        percent_change: percent_change(absolute_change, previous),
    }
}

fn percent_change(absolute: f64, previous: f64) -> i64 {
    if previous == 0.0 {
        return 0;
    }
    let percent = (absolute / previous * 100.0).round();
    if percent.is_finite() {
        percent as i64
    } else {
        0
    }
}

/// Stable descending sort by `key`, truncated to `limit`. NaN keys sort last.
pub fn rank_by<T, F>(entries: impl IntoIterator<Item = T>, key: F, limit: usize) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    let mut keyed: Vec<(f64, T)> = entries
        .into_iter()
        .map(|entry| {
            let value = key(&entry);
            (if value.is_nan() { f64::NEG_INFINITY } else { value }, entry)
        })
        .collect();

    keyed.sort_by(|(left, _), (right, _)| right.partial_cmp(left).unwrap_or(Ordering::Equal));
    keyed.truncate(limit);
    keyed.into_iter().map(|(_, entry)| entry).collect()
}

/// Leaderboard of the top `limit` entities by `key`; ties keep their input order.
pub fn rank(entries: &[EntityPerformance], key: RankKey, limit: usize) -> Vec<EntityPerformance> {
    rank_by(entries.iter().cloned(), |entry| key.value(entry), limit)
}

/// The most recent `n` elements, in their original order.
pub fn window_tail<T>(series: &[T], n: usize) -> &[T] {
    &series[series.len().saturating_sub(n)..]
}

/// Largest gig count in the window, never below one so it can scale bar heights.
pub fn max_trend_value(trends: &[WorkTrend]) -> u64 {
    trends
        .iter()
        .map(|trend| trend.total_gigs)
        .max()
        .unwrap_or(0)
        .max(1)
}

/// Bar height as a percentage of `max`, capped at 100.
pub fn bar_fill_pct(value: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (value as f64 / max as f64 * 100.0).min(100.0)
}
