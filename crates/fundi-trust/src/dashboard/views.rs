use crate::metrics::ChangeDirection;
use crate::trend::{GradientTier, RecentTrend, ScoreSummary, ScoreTier, TrendCurve};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PeriodCard {
    pub period: String,
    pub total_gigs: u64,
    pub verified_gigs: u64,
    pub verification_rate: u32,
    pub earnings: f64,
    pub earnings_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkTrendBar {
    pub period: String,
    pub total_gigs: u64,
    pub verified_gigs: u64,
    pub verification_rate: u32,
    pub fill_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkTrendWindow {
    pub bars: Vec<WorkTrendBar>,
    pub max_value: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub position: usize,
    pub name: String,
    pub total_gigs: u64,
    pub verified_gigs: u64,
    pub verification_rate: u32,
    pub total_earnings: f64,
    pub earnings_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreditScoreView {
    pub score: f64,
    pub tier: ScoreTier,
    pub tier_label: &'static str,
    pub tier_class: &'static str,
    pub gradient: GradientTier,
    pub gradient_class: &'static str,
    pub summary: ScoreSummary,
    pub change_label: String,
    pub recent: RecentTrend,
    pub curve: TrendCurve,
    pub is_mobile: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeltaRow {
    pub metric: &'static str,
    pub current: f64,
    pub previous: f64,
    pub absolute_change: f64,
    pub absolute_label: String,
    pub percent_change: i64,
    pub percent_label: String,
    pub direction: ChangeDirection,
    pub css_class: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonView {
    pub current_period: String,
    pub previous_period: String,
    pub rows: Vec<DeltaRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub periods: Vec<PeriodCard>,
    pub work_trends: WorkTrendWindow,
    pub top_organizations: Vec<LeaderboardEntry>,
    pub top_job_types: Vec<LeaderboardEntry>,
    pub credit: CreditScoreView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
}
