//! FleetOps CLI — run the analytics engine over JSON snapshots.
//!
//! Commands:
//! - `trend` — classify a vehicle's fuel-efficiency trend from fuel-log rows
//! - `stats` — average / best / worst over a list of numbers
//! - `missions board` — active mission cards and totals
//! - `missions complete` — validate a debrief and emit the transition request
//! - `profit` — offer minus miles × cost per mile
//! - `elapsed` — elapsed-time label for a mission start
//!
//! Reports go to stdout; logs go to stderr (filter with `RUST_LOG`).

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fleetops_core::ingest::{efficiency_series, ensure_chronological, parse_fuel_logs};
use fleetops_core::mission::mission_cards;
use fleetops_core::{
    elapsed_since, ActiveMissions, ActualMiles, AnalyticsConfig, Mission, MissionBoard, MissionId,
    ProfitProjection, SummaryStats, TrendClassifier,
};

#[derive(Parser)]
#[command(
    name = "fleetops",
    about = "FleetOps CLI — fuel-efficiency trends and mission tracking"
)]
struct Cli {
    /// Analytics config (TOML). Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the efficiency trend of one vehicle's fuel logs.
    Trend {
        /// JSON array of fuel-log rows, oldest first: [{"created_at": ..., "mpg": ...}].
        #[arg(long)]
        input: PathBuf,
    },
    /// Average, best and worst of a list of numbers.
    Stats {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Active mission commands.
    Missions {
        #[command(subcommand)]
        action: MissionAction,
    },
    /// Project profit for an offer over a distance.
    Profit {
        #[arg(long)]
        offer: f64,

        #[arg(long)]
        miles: f64,

        /// Overrides `profit.cost_per_mile` from the config.
        #[arg(long)]
        cost_per_mile: Option<f64>,
    },
    /// Elapsed-time label since a mission start.
    Elapsed {
        /// Start time (RFC 3339).
        #[arg(long)]
        since: String,

        /// Reference time (RFC 3339). Defaults to now.
        #[arg(long)]
        now: Option<String>,
    },
}

#[derive(Subcommand)]
enum MissionAction {
    /// Show mission cards and totals for the active set.
    Board {
        /// JSON array of active missions for one vehicle, newest first.
        #[arg(long)]
        input: PathBuf,

        /// Reference time (RFC 3339). Defaults to now.
        #[arg(long)]
        now: Option<String>,
    },
    /// Complete a mission and print the transition request to persist.
    Complete {
        /// JSON array of active missions for one vehicle, newest first.
        #[arg(long)]
        input: PathBuf,

        /// Mission to complete.
        #[arg(long)]
        id: String,

        /// Actual miles driven, as entered at debrief.
        #[arg(long, allow_hyphen_values = true)]
        miles: String,

        /// Completion time (RFC 3339). Defaults to now.
        #[arg(long)]
        now: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Trend { input } => run_trend(&input, &config, cli.json),
        Commands::Stats { values } => run_stats(&values, cli.json),
        Commands::Missions { action } => match action {
            MissionAction::Board { input, now } => run_board(&input, now.as_deref(), cli.json),
            MissionAction::Complete {
                input,
                id,
                miles,
                now,
            } => run_complete(&input, &id, &miles, now.as_deref()),
        },
        Commands::Profit {
            offer,
            miles,
            cost_per_mile,
        } => run_profit(offer, miles, cost_per_mile, &config, cli.json),
        Commands::Elapsed { since, now } => {
            let since = parse_time(&since)?;
            let now = resolve_now(now.as_deref())?;
            println!("{}", elapsed_since(since, now));
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<AnalyticsConfig> {
    match path {
        Some(path) => AnalyticsConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(AnalyticsConfig::default()),
    }
}

fn parse_time(s: &str) -> Result<DateTime<Utc>> {
    let t = DateTime::parse_from_rfc3339(s).with_context(|| format!("invalid timestamp '{s}'"))?;
    Ok(t.with_timezone(&Utc))
}

fn resolve_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    now.map(parse_time).transpose().map(|t| t.unwrap_or_else(Utc::now))
}

fn read_missions(path: &Path) -> Result<Vec<Mission>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading missions {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing missions {}", path.display()))
}

fn run_trend(input: &Path, config: &AnalyticsConfig, json: bool) -> Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("reading fuel logs {}", input.display()))?;
    let rows = parse_fuel_logs(&content)?;
    let series = efficiency_series(&rows);
    ensure_chronological(&series.samples)?;

    let classifier = TrendClassifier::new(config.trend)?;
    let Some(report) = classifier.analyze(&series.samples) else {
        if json {
            println!("null");
        } else {
            println!("No efficiency data yet. Log fuel fill-ups to see trends.");
        }
        return Ok(());
    };
    info!(samples = report.sample_count, trend = %report.trend(), "trend analysis complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Samples:  {} ({} rows dropped)", report.sample_count, series.dropped);
    println!("Trend:    {}", report.trend());
    if let Some(delta) = report.comparison.percent_delta {
        println!("Change:   {delta:+.1}%");
    }
    println!("Stats:    {}", report.stats.display());
    if let Some(advisory) = report.advisory() {
        println!();
        println!("{advisory}");
    }
    Ok(())
}

fn run_stats(values: &[f64], json: bool) -> Result<()> {
    let Some(stats) = SummaryStats::compute(values) else {
        bail!("no values given");
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", stats.display());
    }
    Ok(())
}

fn run_board(input: &Path, now: Option<&str>, json: bool) -> Result<()> {
    let active = ActiveMissions::new(read_missions(input)?);
    let now = resolve_now(now)?;
    let cards = mission_cards(active.as_slice(), now);
    let board = MissionBoard::summarize(active.as_slice());

    if json {
        let out = serde_json::json!({ "missions": cards, "summary": board });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if cards.is_empty() {
        println!("No active missions.");
        return Ok(());
    }
    for card in &cards {
        println!(
            "{:<12} {:<24} pay ${:>9.2}  est ${:>9.2} {}  {:>8}",
            card.id.as_str(),
            card.destination,
            card.offer_amount,
            card.estimated_profit,
            if card.profitable { "+" } else { "-" },
            card.elapsed,
        );
    }
    println!(
        "{} active, {} profitable, offers ${:.2}, est. profit ${:.2}",
        board.mission_count, board.profitable_count, board.total_offer, board.total_estimated_profit
    );
    Ok(())
}

fn run_complete(input: &Path, id: &str, miles: &str, now: Option<&str>) -> Result<()> {
    let mut active = ActiveMissions::new(read_missions(input)?);
    let now = resolve_now(now)?;
    let id = MissionId::new(id);

    let Some(miles) = ActualMiles::parse(miles) else {
        bail!("actual miles '{miles}' is not a number above zero; re-enter a valid value");
    };
    let Some(request) = active.complete_with(&id, miles, now) else {
        bail!("mission {id} is not in the active set");
    };
    info!(mission_id = %id, remaining = active.len(), "transition request ready");
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

fn run_profit(
    offer: f64,
    miles: f64,
    cost_per_mile: Option<f64>,
    config: &AnalyticsConfig,
    json: bool,
) -> Result<()> {
    let cpm = cost_per_mile.unwrap_or(config.profit.cost_per_mile);
    if !cpm.is_finite() || cpm < 0.0 {
        bail!("cost per mile must be finite and >= 0, got {cpm}");
    }
    let projection = ProfitProjection::estimate(offer, miles, cpm);
    if json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else {
        println!(
            "offer ${:.2} - cost ${:.2} ({} mi x ${:.2}) = profit ${:.2} (${:.2}/mi)",
            projection.offer_amount,
            projection.cost,
            projection.miles,
            projection.cost_per_mile,
            projection.profit,
            projection.profit_per_mile(),
        );
    }
    Ok(())
}
