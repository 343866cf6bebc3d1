use super::feed::AnalyticsFeed;
use super::insights::generate_observations;
use super::views::{
    ComparisonView, CreditScoreView, DashboardView, DeltaRow, LeaderboardEntry, PeriodCard,
    WorkTrendBar, WorkTrendWindow,
};
use crate::config::DashboardConfig;
use crate::metrics::{
    bar_fill_pct, compare, format_currency, format_signed, max_trend_value, rank, window_tail,
    ChangeDirection, ComparativeResult, Delta, EntityPerformance, MetricSnapshot, RankKey,
};
use crate::trend::{
    classify, classify_gradient, is_mobile, project, recent_trend, responsive_width, summarize,
    ScoreSample, Viewport,
};
use chrono::{DateTime, Duration, Utc};

const RECENT_WINDOW_DAYS: i64 = 7;

/// Per-render inputs that do not come from the analytics feed.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Width of the element hosting the trend chart; `None` keeps the configured width.
    pub container_width: Option<f64>,
    pub now: DateTime<Utc>,
}

impl RenderContext {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            container_width: None,
            now,
        }
    }
}

/// Builds the full analytics view. `samples` must be ordered by timestamp.
pub fn build_dashboard(
    feed: &AnalyticsFeed,
    samples: &[ScoreSample],
    config: &DashboardConfig,
    context: RenderContext,
) -> DashboardView {
    let periods = vec![
        period_card(&feed.summary.all_time, "All time"),
        period_card(&feed.summary.last_7_days, "Last 7 days"),
        period_card(&feed.summary.last_30_days, "Last 30 days"),
    ];

    // Bars share one scale across the whole history, not just the visible tail.
    let max_value = max_trend_value(&feed.trends);
    let window = window_tail(&feed.trends, config.trend_window);
    let work_trends = WorkTrendWindow {
        bars: window
            .iter()
            .map(|trend| WorkTrendBar {
                period: trend.period.clone(),
                total_gigs: trend.total_gigs,
                verified_gigs: trend.verified_gigs,
                verification_rate: trend.verification_rate(),
                fill_pct: bar_fill_pct(trend.total_gigs, max_value),
            })
            .collect(),
        max_value,
    };

    let top_organizations = leaderboard(&feed.organizations, config.leaderboard_limit);
    let top_job_types = leaderboard(&feed.job_types, config.leaderboard_limit);

    let credit = credit_view(feed, samples, config, context);

    let comparison = feed.comparative.as_ref().map(|comparative| {
        let result = compare(&comparative.current_period, &comparative.previous_period);
        comparison_view(&result)
    });

    let mut view = DashboardView {
        periods,
        work_trends,
        top_organizations,
        top_job_types,
        credit,
        comparison,
        observations: Vec::new(),
    };
    view.observations = generate_observations(&view);
    view
}

fn period_card(snapshot: &MetricSnapshot, fallback: &str) -> PeriodCard {
    let period = if snapshot.period.trim().is_empty() {
        fallback.to_string()
    } else {
        snapshot.period.clone()
    };

    PeriodCard {
        period,
        total_gigs: snapshot.total_count,
        verified_gigs: snapshot.verified_count,
        verification_rate: snapshot.verification_rate(),
        earnings: snapshot.earnings,
        earnings_label: format_currency(snapshot.earnings),
    }
}

fn leaderboard(entries: &[EntityPerformance], limit: usize) -> Vec<LeaderboardEntry> {
    rank(entries, RankKey::TotalGigs, limit)
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| LeaderboardEntry {
            position: idx + 1,
            verification_rate: entry.verification_rate(),
            earnings_label: format_currency(entry.total_earnings),
            name: entry.name,
            total_gigs: entry.total_gigs,
            verified_gigs: entry.verified_gigs,
            total_earnings: entry.total_earnings,
        })
        .collect()
}

fn credit_view(
    feed: &AnalyticsFeed,
    samples: &[ScoreSample],
    config: &DashboardConfig,
    context: RenderContext,
) -> CreditScoreView {
    let summary = summarize(samples);
    let score = feed
        .credit_score
        .as_ref()
        .and_then(|credit| credit.current_score)
        .unwrap_or(summary.current);
    let tier = classify(score);
    let gradient = classify_gradient(score);

    let viewport = chart_viewport(config, context.container_width);
    let recent = recent_trend(samples, context.now - Duration::days(RECENT_WINDOW_DAYS));

    CreditScoreView {
        score,
        tier,
        tier_label: tier.label(),
        tier_class: tier.css_class(),
        gradient,
        gradient_class: gradient.css_class(),
        change_label: summary.change_label(),
        summary,
        recent,
        curve: project(samples, viewport),
        is_mobile: context
            .container_width
            .is_some_and(|width| is_mobile(width, config.mobile_breakpoint)),
    }
}

/// Narrows the configured viewport to the container, unless that leaves nothing to draw.
pub fn chart_viewport(config: &DashboardConfig, container_width: Option<f64>) -> Viewport {
    container_width
        .map(|width| config.viewport.with_width(responsive_width(width, config.sizing)))
        .filter(Viewport::is_drawable)
        .unwrap_or(config.viewport)
}

fn comparison_view(result: &ComparativeResult) -> ComparisonView {
    let rows = vec![
        count_row(
            "Total gigs",
            &result.total_count,
            result.current.total_count,
            result.previous.total_count,
        ),
        count_row(
            "Verified gigs",
            &result.verified_count,
            result.current.verified_count,
            result.previous.verified_count,
        ),
        earnings_row(&result.earnings, result.current.earnings, result.previous.earnings),
        count_row(
            "Organizations",
            &result.unique_entities,
            result.current.unique_entities,
            result.previous.unique_entities,
        ),
    ];

    ComparisonView {
        current_period: period_or(&result.current.period, "Current period"),
        previous_period: period_or(&result.previous.period, "Previous period"),
        rows,
    }
}

fn period_or(period: &str, fallback: &str) -> String {
    if period.trim().is_empty() {
        fallback.to_string()
    } else {
        period.to_string()
    }
}

fn count_row(metric: &'static str, delta: &Delta<i64>, current: u64, previous: u64) -> DeltaRow {
    let direction = delta.direction();
    DeltaRow {
        metric,
        current: current as f64,
        previous: previous as f64,
        absolute_change: delta.absolute_change as f64,
        absolute_label: format_signed(delta.absolute_change as f64, 0),
        percent_change: delta.percent_change,
        percent_label: format!("{}%", format_signed(delta.percent_change as f64, 0)),
        direction,
        css_class: direction.css_class(),
        icon: direction.icon(),
    }
}

fn earnings_row(delta: &Delta<f64>, current: f64, previous: f64) -> DeltaRow {
    let direction = delta.direction();
    let magnitude = format_currency(delta.absolute_change.abs());
    let absolute_label = match direction {
        ChangeDirection::Positive => format!("+{magnitude}"),
        ChangeDirection::Negative => format!("-{magnitude}"),
        ChangeDirection::Neutral => magnitude,
    };

    DeltaRow {
        metric: "Earnings",
        current,
        previous,
        absolute_change: delta.absolute_change,
        absolute_label,
        percent_change: delta.percent_change,
        percent_label: format!("{}%", format_signed(delta.percent_change as f64, 0)),
        direction,
        css_class: direction.css_class(),
        icon: direction.icon(),
    }
}
