//! Score trend engine: headline statistics, tier classification, and chart geometry
//! for a sparse, irregularly spaced series of trust score samples.

mod curve;
pub mod domain;
mod summary;
mod tiers;

pub use curve::{
    build_area_path, build_smooth_path, is_mobile, project, project_points, responsive_width,
    ChartPoint, ChartSizing, TrendCurve, Viewport,
};
pub use domain::{sorted_samples, ScoreSample, MAX_SCORE};
pub use summary::{recent_trend, summarize, RecentTrend, ScoreSummary};
pub use tiers::{classify, classify_gradient, GradientTier, ScoreTier};
