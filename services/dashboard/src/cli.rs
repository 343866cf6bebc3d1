use crate::render::{run_dashboard, run_regions, run_trend, DashboardArgs, RegionsArgs, TrendArgs};
use clap::{Parser, Subcommand};
use fundi_trust::config::AppConfig;
use fundi_trust::error::AppError;
use fundi_trust::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Fundi Trust Dashboard",
    about = "Render gig-worker trust analytics, score trends and region filters from exported data",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the analytics dashboard from a feed export
    Dashboard(DashboardArgs),
    /// Summarize a trust score history and print its chart geometry
    Trend(TrendArgs),
    /// Walk the county / constituency / ward cascade (default command)
    Regions(RegionsArgs),
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Regions(RegionsArgs::default()));
    info!(?config.environment, ?command, "fundi trust dashboard starting");

    match command {
        Command::Dashboard(args) => run_dashboard(args, &config.dashboard).await,
        Command::Trend(args) => run_trend(args, &config.dashboard).await,
        Command::Regions(args) => run_regions(args).await,
    }
}
