use crate::infra::{blocking, load_dashboard_inputs, load_region_inputs};
use chrono::{DateTime, Duration, Utc};
use clap::Args;
use fundi_trust::config::DashboardConfig;
use fundi_trust::dashboard::{build_dashboard, chart_viewport, DashboardView, RenderContext};
use fundi_trust::error::AppError;
use fundi_trust::import::read_score_samples_path;
use fundi_trust::regions::{
    GigRecord, GigSearchQuery, RegionSelector, SelectionChange, SelectionStage,
};
use fundi_trust::trend::{
    classify, classify_gradient, is_mobile, project, recent_trend, summarize, RecentTrend,
    ScoreSummary, ScoreTier, TrendCurve,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug)]
pub(crate) struct DashboardArgs {
    /// Analytics feed export (JSON)
    #[arg(long)]
    pub(crate) feed: PathBuf,
    /// Score history CSV; defaults to the history embedded in the feed
    #[arg(long)]
    pub(crate) scores: Option<PathBuf>,
    /// Width of the chart container in pixels
    #[arg(long)]
    pub(crate) container_width: Option<f64>,
    /// Reference time for the recent-activity window (defaults to now)
    #[arg(long, value_parser = crate::infra::parse_timestamp)]
    pub(crate) now: Option<DateTime<Utc>>,
    /// Print the view as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct TrendArgs {
    /// Score history CSV (timestamp,score)
    #[arg(long)]
    pub(crate) scores: PathBuf,
    /// Width of the chart container in pixels
    #[arg(long)]
    pub(crate) container_width: Option<f64>,
    /// Reference time for the recent-activity window (defaults to now)
    #[arg(long, value_parser = crate::infra::parse_timestamp)]
    pub(crate) now: Option<DateTime<Utc>>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RegionsArgs {
    /// Region tree export (JSON); defaults to the bundled Kenya sample
    #[arg(long)]
    pub(crate) tree: Option<PathBuf>,
    #[arg(long)]
    pub(crate) county: Option<String>,
    #[arg(long)]
    pub(crate) constituency: Option<String>,
    #[arg(long)]
    pub(crate) ward: Option<String>,
    /// Gig export (CSV) to run the resulting search against
    #[arg(long)]
    pub(crate) gigs: Option<PathBuf>,
    #[arg(long)]
    pub(crate) job_type: Option<String>,
    /// Case-insensitive fragment of the client name
    #[arg(long)]
    pub(crate) client: Option<String>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_dashboard(
    args: DashboardArgs,
    config: &DashboardConfig,
) -> Result<(), AppError> {
    let DashboardArgs {
        feed,
        scores,
        container_width,
        now,
        json,
    } = args;

    let (feed, samples) = load_dashboard_inputs(feed, scores).await?;
    let context = RenderContext {
        container_width,
        now: now.unwrap_or_else(Utc::now),
    };
    let view = build_dashboard(&feed, &samples, config, context);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render_dashboard(&view);
    }
    Ok(())
}

/// Standalone score report for the `trend` command.
#[derive(Debug, Serialize)]
struct TrendReport {
    samples: usize,
    summary: ScoreSummary,
    change_label: String,
    tier: ScoreTier,
    tier_label: &'static str,
    gradient_class: &'static str,
    recent: RecentTrend,
    is_mobile: bool,
    curve: TrendCurve,
}

pub(crate) async fn run_trend(args: TrendArgs, config: &DashboardConfig) -> Result<(), AppError> {
    let TrendArgs {
        scores,
        container_width,
        now,
        json,
    } = args;

    let samples = blocking(move || Ok(read_score_samples_path(&scores)?)).await?;
    let now = now.unwrap_or_else(Utc::now);

    let viewport = chart_viewport(config, container_width);

    let summary = summarize(&samples);
    let tier = classify(summary.current);
    let report = TrendReport {
        samples: samples.len(),
        change_label: summary.change_label(),
        summary,
        tier,
        tier_label: tier.label(),
        gradient_class: classify_gradient(summary.current).css_class(),
        recent: recent_trend(&samples, now - Duration::days(7)),
        is_mobile: container_width.is_some_and(|width| is_mobile(width, config.mobile_breakpoint)),
        curve: project(&samples, viewport),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_trend(&report);
    }
    Ok(())
}

/// Outcome of walking the cascade with the requested values.
#[derive(Debug, Serialize)]
struct RegionReport<'a> {
    stage: SelectionStage,
    rejected: Vec<&'static str>,
    county_options: Vec<&'a str>,
    constituency_options: Vec<&'a str>,
    ward_options: Vec<&'a str>,
    constituency_picker_enabled: bool,
    ward_picker_enabled: bool,
    query: GigSearchQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    matches: Option<Vec<&'a GigRecord>>,
}

pub(crate) async fn run_regions(args: RegionsArgs) -> Result<(), AppError> {
    let RegionsArgs {
        tree,
        county,
        constituency,
        ward,
        gigs,
        job_type,
        client,
        json,
    } = args;

    let has_gig_file = gigs.is_some();
    let (tree, gigs) = load_region_inputs(tree, gigs).await?;

    let mut selector = RegionSelector::new(&tree);
    selector.select_county(county.as_deref());
    let mut rejected = Vec::new();
    if selector.select_constituency(constituency.as_deref()) == SelectionChange::Rejected {
        rejected.push("constituency");
    }
    if selector.select_ward(ward.as_deref()) == SelectionChange::Rejected {
        rejected.push("ward");
    }
    for level in &rejected {
        warn!(level = *level, "selection ignored: value is not a child of the current parent");
    }

    let stage = selector.stage();
    let county_options = selector.county_options();
    let constituency_options = selector.constituency_options();
    let ward_options = selector.ward_options();
    let constituency_picker_enabled = selector.constituency_picker_enabled();
    let ward_picker_enabled = selector.ward_picker_enabled();

    let query = GigSearchQuery::new(selector.into_state())
        .with_job_type(job_type)
        .with_client_name(client);
    let matches = has_gig_file.then(|| query.filter(&gigs));

    let report = RegionReport {
        stage,
        rejected,
        county_options,
        constituency_options,
        ward_options,
        constituency_picker_enabled,
        ward_picker_enabled,
        query,
        matches,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_regions(&report);
    }
    Ok(())
}

fn render_dashboard(view: &DashboardView) {
    println!("Gig activity");
    for card in &view.periods {
        println!(
            "- {}: {} gigs | {} verified ({}%) | {}",
            card.period,
            card.total_gigs,
            card.verified_gigs,
            card.verification_rate,
            card.earnings_label
        );
    }

    println!(
        "\nWork trend (last {} periods, scale {})",
        view.work_trends.bars.len(),
        view.work_trends.max_value
    );
    for bar in &view.work_trends.bars {
        println!(
            "  {:<12} {:<20} {} ({} verified)",
            bar.period,
            "#".repeat((bar.fill_pct / 5.0).round() as usize),
            bar.total_gigs,
            bar.verified_gigs
        );
    }

    for (title, entries) in [
        ("Top organizations", &view.top_organizations),
        ("Top job types", &view.top_job_types),
    ] {
        println!("\n{title}");
        if entries.is_empty() {
            println!("  (none yet)");
        }
        for entry in entries {
            println!(
                "  {}. {} - {} gigs, {}% verified, {}",
                entry.position,
                entry.name,
                entry.total_gigs,
                entry.verification_rate,
                entry.earnings_label
            );
        }
    }

    let credit = &view.credit;
    println!(
        "\nTrust score {:.1} [{}] ({} since previous, average {:.1})",
        credit.score, credit.tier_label, credit.change_label, credit.summary.average
    );
    println!("  Gauge gradient: {}", credit.gradient_class);
    render_curve(&credit.curve);

    if let Some(comparison) = &view.comparison {
        println!(
            "\n{} vs {}",
            comparison.current_period, comparison.previous_period
        );
        for row in &comparison.rows {
            println!(
                "  {:<14} {:>10} -> {:>10}  {} ({}) [{}]",
                row.metric,
                row.previous,
                row.current,
                row.absolute_label,
                row.percent_label,
                row.icon
            );
        }
    }

    if !view.observations.is_empty() {
        println!("\nObservations");
        for line in &view.observations {
            println!("- {line}");
        }
    }
}

fn render_trend(report: &TrendReport) {
    println!("Trust score trend ({} samples)", report.samples);
    println!(
        "- Current {:.1} [{}] | average {:.1} | change {}",
        report.summary.current, report.tier_label, report.summary.average, report.change_label
    );
    println!(
        "- Last 7 days: {} update(s), net {:+.1}",
        report.recent.num_changes, report.recent.change
    );
    println!("- Gauge gradient: {}", report.gradient_class);
    if report.is_mobile {
        println!("- Compact layout");
    }
    render_curve(&report.curve);
}

fn render_curve(curve: &TrendCurve) {
    if curve.points.is_empty() {
        println!("  No score history to chart");
        return;
    }
    println!(
        "  Chart {:.0}x{:.0}, {} point(s)",
        curve.viewport.width,
        curve.viewport.height,
        curve.points.len()
    );
    println!("  line: {}", curve.line_path);
    println!("  area: {}", curve.area_path);
}

fn render_regions(report: &RegionReport<'_>) {
    println!("Region filter: {}", report.stage.label());
    if !report.rejected.is_empty() {
        println!("- Ignored {} (not in the selected parent)", report.rejected.join(", "));
    }

    println!("- Counties: {}", report.county_options.join(", "));
    if report.constituency_picker_enabled {
        println!("- Constituencies: {}", report.constituency_options.join(", "));
    } else {
        println!("- Constituencies: select a county first");
    }
    if report.ward_picker_enabled {
        println!("- Wards: {}", report.ward_options.join(", "));
    } else {
        println!("- Wards: select a constituency first");
    }

    let selection = &report.query.selection;
    println!(
        "Search payload: county={} constituency={} ward={} job_type={} client={}",
        selection.county.as_deref().unwrap_or("-"),
        selection.constituency.as_deref().unwrap_or("-"),
        selection.ward.as_deref().unwrap_or("-"),
        report.query.job_type.as_deref().unwrap_or("-"),
        report.query.client_name.as_deref().unwrap_or("-"),
    );

    if let Some(matches) = &report.matches {
        if report.query.is_empty() {
            println!("Search disabled until a filter is set");
        } else {
            println!("{} matching gig(s)", matches.len());
            for gig in matches {
                println!(
                    "  #{} {} for {} in {}, {} ({})",
                    gig.id,
                    gig.job_type,
                    gig.client_name,
                    gig.ward,
                    gig.constituency,
                    if gig.is_verified { "verified" } else { "unverified" }
                );
            }
        }
    }
}
