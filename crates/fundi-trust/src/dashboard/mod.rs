//! Assembles the analytics screen from the three cores. This is the layer the
//! presentation code talks to; it holds no state between calls.

mod feed;
mod insights;
mod summary;
pub mod views;

pub use feed::{AnalyticsFeed, ComparativeFeed, CreditScoreFeed, SummaryCounters};
pub use summary::{build_dashboard, chart_viewport, RenderContext};
pub use views::DashboardView;
