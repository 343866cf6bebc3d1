use serde::{Deserialize, Serialize};

/// Score band used by the analytics overview cards.
///
/// Variants are declared from lowest to highest so the derived ordering ranks tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreTier {
    NeedsImprovement,
    Good,
    Excellent,
}

impl ScoreTier {
    pub const EXCELLENT_FROM: f64 = 70.0;
    pub const GOOD_FROM: f64 = 40.0;

    pub const fn label(self) -> &'static str {
        match self {
            Self::NeedsImprovement => "Needs Improvement",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::NeedsImprovement => "needs-improvement",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

/// Band used to pick the gradient behind the credit score gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientTier {
    Low,
    Medium,
    High,
}

impl GradientTier {
    pub const HIGH_FROM: f64 = 80.0;
    pub const MEDIUM_FROM: f64 = 60.0;

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Low => "gradient-low",
            Self::Medium => "gradient-medium",
            Self::High => "gradient-high",
        }
    }
}

/// NaN falls through every comparison and lands in the lowest tier.
pub fn classify(score: f64) -> ScoreTier {
    if score >= ScoreTier::EXCELLENT_FROM {
        ScoreTier::Excellent
    } else if score >= ScoreTier::GOOD_FROM {
        ScoreTier::Good
    } else {
        ScoreTier::NeedsImprovement
    }
}

pub fn classify_gradient(score: f64) -> GradientTier {
    if score >= GradientTier::HIGH_FROM {
        GradientTier::High
    } else if score >= GradientTier::MEDIUM_FROM {
        GradientTier::Medium
    } else {
        GradientTier::Low
    }
}
