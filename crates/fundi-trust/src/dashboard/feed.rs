use crate::metrics::{EntityPerformance, MetricSnapshot, WorkTrend};
use crate::trend::ScoreSample;
use serde::{Deserialize, Serialize};

/// Already-resolved responses of the analytics endpoints, joined into one value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsFeed {
    pub summary: SummaryCounters,
    pub trends: Vec<WorkTrend>,
    pub organizations: Vec<EntityPerformance>,
    pub job_types: Vec<EntityPerformance>,
    pub credit_score: Option<CreditScoreFeed>,
    pub comparative: Option<ComparativeFeed>,
}

impl AnalyticsFeed {
    pub fn score_history(&self) -> &[ScoreSample] {
        self.credit_score
            .as_ref()
            .map(|credit| credit.score_history.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryCounters {
    pub all_time: MetricSnapshot,
    pub last_7_days: MetricSnapshot,
    pub last_30_days: MetricSnapshot,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditScoreFeed {
    pub current_score: Option<f64>,
    pub score_history: Vec<ScoreSample>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparativeFeed {
    pub current_period: MetricSnapshot,
    pub previous_period: MetricSnapshot,
}
