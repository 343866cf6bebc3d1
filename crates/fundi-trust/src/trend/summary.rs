use super::domain::ScoreSample;
use crate::metrics::format_signed;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Headline numbers for a score series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreSummary {
    pub current: f64,
    pub average: f64,
    pub change_from_previous: f64,
}

impl ScoreSummary {
    /// Signed one-decimal rendering of the latest change, e.g. `+3.2` or `-1.5`.
    pub fn change_label(&self) -> String {
        format_signed(self.change_from_previous, 1)
    }
}

pub fn summarize(samples: &[ScoreSample]) -> ScoreSummary {
    let current = samples.last().map(|sample| sample.value).unwrap_or(0.0);

    let average = if samples.is_empty() {
        0.0
    } else {
        samples.iter().map(|sample| sample.value).sum::<f64>() / samples.len() as f64
    };

    let change_from_previous = match samples {
        [.., previous, latest] => latest.value - previous.value,
        _ => 0.0,
    };

    ScoreSummary {
        current,
        average,
        change_from_previous,
    }
}

/// Movement of the score inside a trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RecentTrend {
    /// Latest score minus the score in force when the window opened.
    pub change: f64,
    /// Samples recorded inside the window.
    pub num_changes: usize,
}

/// Summarizes the samples recorded at or after `since`.
///
/// The baseline is the last sample strictly before `since`; when the series starts
/// inside the window the first windowed sample is used instead.
pub fn recent_trend(samples: &[ScoreSample], since: DateTime<Utc>) -> RecentTrend {
    let split = samples
        .iter()
        .position(|sample| sample.timestamp >= since)
        .unwrap_or(samples.len());
    let (before, window) = samples.split_at(split);

    let (Some(first), Some(latest)) = (window.first(), window.last()) else {
        return RecentTrend::default();
    };

    let baseline = before.last().unwrap_or(first);

    RecentTrend {
        change: latest.value - baseline.value,
        num_changes: window.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn day(offset: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0)
            .single()
            .expect("valid timestamp")
            + Duration::days(offset)
    }

    fn series(values: &[f64]) -> Vec<ScoreSample> {
        values
            .iter()
            .enumerate()
            .map(|(idx, value)| ScoreSample::new(day(idx as i64), *value))
            .collect()
    }

    #[test]
    fn empty_series_summarizes_to_zero() {
        assert_eq!(summarize(&[]), ScoreSummary::default());
    }

    #[test]
    fn single_sample_has_no_change() {
        let summary = summarize(&series(&[72.0]));
        assert_eq!(summary.current, 72.0);
        assert_eq!(summary.average, 72.0);
        assert_eq!(summary.change_from_previous, 0.0);
        assert_eq!(summary.change_label(), "0.0");
    }

    #[test]
    fn change_compares_last_two_samples_in_order() {
        let mut samples = series(&[60.0, 65.0, 65.0, 55.0]);
        samples[2].timestamp = samples[1].timestamp;

        let summary = summarize(&samples);
        assert_eq!(summary.current, 55.0);
        assert_eq!(summary.change_from_previous, -10.0);
        assert_eq!(summary.average, 61.25);
        assert_eq!(summary.change_label(), "-10.0");
    }

    #[test]
    fn change_label_keeps_sign() {
        let summary = summarize(&series(&[50.0, 53.2]));
        assert_eq!(summary.change_label(), "+3.2");
        let summary = summarize(&series(&[50.0, 48.5]));
        assert_eq!(summary.change_label(), "-1.5");
        let summary = summarize(&series(&[50.0, 50.25]));
        assert_eq!(summary.change_label(), "+0.3");
        let summary = summarize(&series(&[50.0, 49.96]));
        assert_eq!(summary.change_label(), "0.0");
    }

    #[test]
    fn recent_trend_uses_last_sample_before_window_as_baseline() {
        let samples = series(&[40.0, 45.0, 50.0, 58.0, 61.0]);

        let trend = recent_trend(&samples, day(3));
        assert_eq!(trend.num_changes, 2);
        assert_eq!(trend.change, 11.0);
    }

    #[test]
    fn recent_trend_falls_back_to_first_windowed_sample() {
        let samples = series(&[40.0, 47.0]);

        let trend = recent_trend(&samples, day(-10));
        assert_eq!(trend.num_changes, 2);
        assert_eq!(trend.change, 7.0);
    }

    #[test]
    fn recent_trend_is_flat_when_window_is_empty() {
        let samples = series(&[40.0, 47.0]);
        assert_eq!(recent_trend(&samples, day(5)), RecentTrend::default());
        assert_eq!(recent_trend(&[], day(0)), RecentTrend::default());
    }
}
