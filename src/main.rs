use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use match_coach::calculate::{analyze, career_summary};
use match_coach::config::{AppConfig, OutputFormat};
use match_coach::heroes::HeroNameResolver;
use match_coach::report::{self, AnalysisReport};
use match_coach::storage::{find_player, DataLayout, MatchStore};

#[derive(Parser)]
#[command(name = "match-coach")]
#[command(about = "Post-game performance scoring and coaching for Dota 2 matches")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./match-coach.toml")]
    config: PathBuf,

    /// Data directory path (overrides config)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error; overrides config)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON (overrides config)
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one player's performance in a stored match
    Analyze {
        /// Match ID
        #[arg(long = "match")]
        match_id: i64,

        /// Player slot (0-4 Radiant, 128-132 Dire)
        #[arg(long)]
        slot: i32,

        /// Numeric rank (1-80) used for benchmarks
        #[arg(long)]
        rank: Option<i32>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Summarize a player's stored match history
    Career {
        /// Account ID
        #[arg(long)]
        account: i64,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print a short shareable recap of a match
    Share {
        /// Match ID
        #[arg(long = "match")]
        match_id: i64,

        /// Player slot
        #[arg(long)]
        slot: i32,

        /// Numeric rank (1-80) used for benchmarks
        #[arg(long)]
        rank: Option<i32>,
    },
}

fn init_tracing(level: &str, json_logs: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);

    if json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    if let Some(data_dir) = cli.data_dir {
        config.data.dir = data_dir;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    init_tracing(&config.logging.level, cli.json_logs || config.logging.json);

    tracing::info!("Starting match-coach v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        "Data dir {:?}, default benchmark tier {}",
        config.data.dir,
        config.analysis.default_tier()
    );

    let store = MatchStore::new(DataLayout::new(&config.data.dir));

    match cli.command {
        Commands::Analyze {
            match_id,
            slot,
            rank,
            format,
        } => {
            let record = store
                .load_match(match_id)
                .with_context(|| format!("Failed to load match {}", match_id))?;
            let player = find_player(&record, slot)?;
            let heroes = store.load_heroes().context("Failed to load hero directory")?;
            let hero_name = heroes.hero_name(player.hero_id);

            let rank = rank.or(config.analysis.default_rank);
            let analysis = analyze(&record, player, rank);

            match format.unwrap_or(config.analysis.output) {
                OutputFormat::Text => {
                    print!("{}", report::analysis_text(&record, player, &hero_name, &analysis));
                }
                OutputFormat::Json => {
                    let report = AnalysisReport::new(hero_name, analysis);
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }

        Commands::Career { account, format } => {
            let history = store
                .load_player_history(account)
                .with_context(|| format!("Failed to load history for account {}", account))?;
            let heroes = store.load_heroes().context("Failed to load hero directory")?;

            let summary = career_summary(
                &history.recent,
                &history.historical,
                &history.hero_stats,
                &history.totals,
                &heroes,
            );

            match format.unwrap_or(config.analysis.output) {
                OutputFormat::Text => print!("{}", report::career_text(account, &summary)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            }
        }

        Commands::Share {
            match_id,
            slot,
            rank,
        } => {
            let record = store
                .load_match(match_id)
                .with_context(|| format!("Failed to load match {}", match_id))?;
            let player = find_player(&record, slot)?;
            let heroes = store.load_heroes().context("Failed to load hero directory")?;
            let hero_name = heroes.hero_name(player.hero_id);

            let analysis = analyze(&record, player, rank.or(config.analysis.default_rank));
            print!("{}", report::share_text(&record, player, &hero_name, &analysis));
        }
    }

    Ok(())
}
