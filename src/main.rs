use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rl_coach::api::{build_router, state::AppState};
use rl_coach::config::AppConfig;
use rl_coach::models::{PlayerStats, Rank};
use rl_coach::StatsAnalyzer;

#[derive(Parser)]
#[command(name = "rl-coach")]
#[command(about = "Rocket League stat analysis and rank-up advice")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,
    },

    /// Analyze a JSON file of stats and print the result
    Analyze {
        /// File holding a JSON object of stat name to value
        #[arg(long)]
        file: PathBuf,

        /// Current rank (defaults to the configured rank)
        #[arg(long)]
        rank: Option<String>,

        /// Target rank (defaults to the next rank)
        #[arg(long)]
        target: Option<String>,
    },

    /// Print benchmark values
    Benchmarks {
        /// Only this rank
        #[arg(long)]
        rank: Option<String>,
    },
}

fn init_tracing(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    let level = cli.log_level.as_deref().unwrap_or(config.log_level.as_str());
    init_tracing(level, cli.json_logs);

    tracing::info!("Starting rl-coach v{}", env!("CARGO_PKG_VERSION"));

    let analyzer = StatsAnalyzer::builtin();

    match cli.command {
        Commands::Serve { host, port } => {
            let mut server = config.server.clone();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }

            let state = AppState::new(analyzer, config.analysis.clone());
            let app = build_router(state, &server);
            let addr = format!("{}:{}", server.host, server.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("API: http://{}{}", addr, server.api_prefix);
            axum::serve(listener, app).await?;
        }
        Commands::Analyze { file, rank, target } => {
            let contents = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let stats: PlayerStats = serde_json::from_str(&contents)
                .with_context(|| format!("Expected a JSON object of stats in {}", file.display()))?;

            let current = rank.unwrap_or_else(|| config.analysis.default_rank.clone());
            if Rank::parse(&current).is_none() {
                tracing::warn!("Unrecognized rank {:?}; percentiles will be empty", current);
            }

            let result = analyzer.analyze_player(
                &stats,
                &current,
                target.as_deref(),
                config.analysis.advice_count,
            );
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Benchmarks { rank } => {
            let table = analyzer.benchmarks();
            match rank {
                Some(name) => {
                    let line = Rank::parse(&name)
                        .and_then(|r| table.for_rank(r))
                        .with_context(|| format!("Rank '{}' not found", name))?;
                    println!("{}", serde_json::to_string_pretty(line)?);
                }
                None => println!("{}", serde_json::to_string_pretty(table)?),
            }
        }
    }

    Ok(())
}
