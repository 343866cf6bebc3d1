use super::views::DashboardView;
use crate::metrics::ChangeDirection;
use crate::trend::{GradientTier, ScoreTier};

pub(crate) fn generate_observations(view: &DashboardView) -> Vec<String> {
    let mut observations = Vec::new();

    if let Some(all_time) = view.periods.first() {
        if all_time.total_gigs > 0 {
            observations.push(format!(
                "{} of {} gigs verified ({}% verification rate)",
                all_time.verified_gigs, all_time.total_gigs, all_time.verification_rate
            ));
        }
    }

    let credit = &view.credit;
    let next_threshold = match credit.tier {
        ScoreTier::NeedsImprovement => Some((ScoreTier::GOOD_FROM, ScoreTier::Good)),
        ScoreTier::Good => Some((ScoreTier::EXCELLENT_FROM, ScoreTier::Excellent)),
        ScoreTier::Excellent => None,
    };
    match next_threshold {
        Some((threshold, next)) if credit.score.is_finite() => observations.push(format!(
            "Trust score {:.0} ({}); {:.0} point(s) to reach {}",
            credit.score,
            credit.tier_label,
            (threshold - credit.score).ceil().max(1.0),
            next.label()
        )),
        Some(_) => {}
        None => observations.push(format!(
            "Trust score {:.0} is in the {} band",
            credit.score, credit.tier_label
        )),
    }

    if credit.gradient == GradientTier::High && credit.tier == ScoreTier::Excellent {
        observations.push("Score qualifies for the top gradient band".to_string());
    }

    if credit.recent.num_changes > 0 {
        observations.push(format!(
            "{} score update{} in the last 7 days ({})",
            credit.recent.num_changes,
            if credit.recent.num_changes == 1 { "" } else { "s" },
            crate::metrics::format_signed(credit.recent.change, 1)
        ));
    }

    if let Some(comparison) = &view.comparison {
        for row in &comparison.rows {
            let verb = match row.direction {
                ChangeDirection::Positive => "up",
                ChangeDirection::Negative => "down",
                ChangeDirection::Neutral => continue,
            };
            if row.percent_change == 0 {
                observations.push(format!(
                    "{} {} {} vs {}",
                    row.metric,
                    verb,
                    row.absolute_label,
                    comparison.previous_period.to_lowercase()
                ));
            } else {
                observations.push(format!(
                    "{} {} {}% vs {}",
                    row.metric,
                    verb,
                    row.percent_change.abs(),
                    comparison.previous_period.to_lowercase()
                ));
            }
        }
    }

    if let Some(leader) = view.top_organizations.first() {
        observations.push(format!(
            "Top organization: {} with {} gig{} ({})",
            leader.name,
            leader.total_gigs,
            if leader.total_gigs == 1 { "" } else { "s" },
            leader.earnings_label
        ));
    }

    if observations.len() <= 1 && view.periods.iter().all(|card| card.total_gigs == 0) {
        observations.push(
            "No gig activity recorded yet; log and verify work to build a trust score".to_string(),
        );
    }

    observations
}
