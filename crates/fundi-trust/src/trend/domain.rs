use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound of the trust score scale.
pub const MAX_SCORE: f64 = 100.0;

/// A single timestamped trust score observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSample {
    pub timestamp: DateTime<Utc>,
    #[serde(alias = "score")]
    pub value: f64,
}

impl ScoreSample {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Value pinned to the 0–100 scale; non-finite values read as zero.
    pub fn bounded_value(&self) -> f64 {
        if self.value.is_finite() {
            self.value.clamp(0.0, MAX_SCORE)
        } else {
            0.0
        }
    }
}

/// Returns the samples ordered by timestamp. Equal timestamps keep their input order.
pub fn sorted_samples(samples: &[ScoreSample]) -> Vec<ScoreSample> {
    let mut ordered = samples.to_vec();
    ordered.sort_by_key(|sample| sample.timestamp);
    ordered
}
