use super::aggregate::verification_rate;
use serde::{Deserialize, Serialize};

/// Raw counters for one named period, e.g. "last 7 days" or "all time".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricSnapshot {
    #[serde(default)]
    pub period: String,
    #[serde(alias = "total_gigs", default)]
    pub total_count: u64,
    #[serde(alias = "verified_gigs", default)]
    pub verified_count: u64,
    #[serde(alias = "total_earnings", default)]
    pub earnings: f64,
    #[serde(alias = "unique_orgs", default)]
    pub unique_entities: u64,
}

impl MetricSnapshot {
    pub fn labeled(mut self, period: impl Into<String>) -> Self {
        self.period = period.into();
        self
    }

    pub fn verification_rate(&self) -> u32 {
        verification_rate(self.verified_count, self.total_count)
    }
}

/// Signed difference between two periods for one field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Delta<T> {
    pub absolute_change: T,
    /// Rounded percentage of the previous value; zero when the previous value was zero.
    pub percent_change: i64,
}

impl<T: PartialOrd + Default> Delta<T> {
    pub fn direction(&self) -> ChangeDirection {
        let zero = T::default();
        if self.absolute_change > zero {
            ChangeDirection::Positive
        } else if self.absolute_change < zero {
            ChangeDirection::Negative
        } else {
            ChangeDirection::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparativeResult {
    pub current: MetricSnapshot,
    pub previous: MetricSnapshot,
    pub total_count: Delta<i64>,
    pub verified_count: Delta<i64>,
    pub earnings: Delta<f64>,
    pub unique_entities: Delta<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDirection {
    Positive,
    Negative,
    Neutral,
}

impl ChangeDirection {
    pub fn of(change: f64) -> Self {
        if change > 0.0 {
            Self::Positive
        } else if change < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Positive => "trending_up",
            Self::Negative => "trending_down",
            Self::Neutral => "trending_flat",
        }
    }
}

/// Per-entity counters behind the organization and job type leaderboards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityPerformance {
    #[serde(alias = "organization_name", alias = "job_type")]
    pub name: String,
    #[serde(default)]
    pub total_gigs: u64,
    #[serde(default)]
    pub verified_gigs: u64,
    #[serde(default)]
    pub total_earnings: f64,
}

impl EntityPerformance {
    pub fn verification_rate(&self) -> u32 {
        verification_rate(self.verified_gigs, self.total_gigs)
    }
}

/// Sort key for leaderboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankKey {
    TotalGigs,
    VerifiedGigs,
    Earnings,
    VerificationRate,
}

impl RankKey {
    pub fn value(self, entry: &EntityPerformance) -> f64 {
        match self {
            Self::TotalGigs => entry.total_gigs as f64,
            Self::VerifiedGigs => entry.verified_gigs as f64,
            Self::Earnings => entry.total_earnings,
            Self::VerificationRate => entry.verification_rate() as f64,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TotalGigs => "Total gigs",
            Self::VerifiedGigs => "Verified gigs",
            Self::Earnings => "Earnings",
            Self::VerificationRate => "Verification rate",
        }
    }
}

/// One bucket of the work-trend history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkTrend {
    pub period: String,
    #[serde(default)]
    pub total_gigs: u64,
    #[serde(default)]
    pub verified_gigs: u64,
    #[serde(default)]
    pub total_earnings: f64,
}

impl WorkTrend {
    pub fn verification_rate(&self) -> u32 {
        verification_rate(self.verified_gigs, self.total_gigs)
    }
}
