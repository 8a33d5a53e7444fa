use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bet_advisor::game::Street;
use bet_advisor::web;
use bet_advisor::{AdviceRequest, Advisor, AdvisorConfig, RivalStyle};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "bet-advisor",
    version,
    about = "Hold'em equity and bet sizing advisor",
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Hero hole cards, e.g. "Ah Kd"
    #[arg(long)]
    hand: Option<String>,

    /// Community cards, e.g. "2c 7d 9s" (empty preflop)
    #[arg(long)]
    board: Option<String>,

    /// Current pot size
    #[arg(long)]
    pot: Option<f64>,

    /// Bet under consideration
    #[arg(long)]
    bet: Option<f64>,

    /// preflop, flop, turn or river (inferred from the board if omitted)
    #[arg(long)]
    street: Option<String>,

    /// Hero acts last on this street
    #[arg(long = "in-position", default_value_t = false)]
    in_position: bool,

    /// Opponent profile: tight, tag, neutral, lag or station
    #[arg(long, default_value = "neutral")]
    profile: String,

    /// Monte Carlo trials (overrides the config file)
    #[arg(long)]
    trials: Option<u32>,

    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable ANSI colors in CLI output
    #[arg(long = "no-color", default_value_t = false)]
    no_color: bool,

    /// Print the advice as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the web server
    Serve {
        /// Address to bind (HOST:PORT)
        #[arg(long, default_value = "0.0.0.0:8080")]
        addr: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = color_eyre::install();
    let cli = Cli::parse();
    let default_level = if cli.command.is_some() { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    match &cli.command {
        Some(Commands::Serve { addr }) => run_server(addr, config).await?,
        None => run_cli(&cli, config)?,
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<AdvisorConfig> {
    let mut config = match &cli.config {
        Some(path) => AdvisorConfig::from_path(path)?,
        None => AdvisorConfig::default(),
    };
    if let Some(trials) = cli.trials {
        config.trials = trials;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.no_color |= cli.no_color;
    Ok(config)
}

fn run_cli(cli: &Cli, config: AdvisorConfig) -> Result<()> {
    let request = AdviceRequest {
        hand: cli.hand.clone().context("--hand is required")?,
        board: cli.board.clone().unwrap_or_default(),
        pot: cli.pot.context("--pot is required")?,
        bet: cli.bet.context("--bet is required")?,
        street: cli.street.as_deref().map(Street::from_tag),
        in_position: cli.in_position,
        profile: RivalStyle::from_tag(&cli.profile),
    };

    let mut advisor = Advisor::new(config);
    let advice = advisor.advise(&request)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
    } else {
        advisor.print_advice(&advice);
    }
    Ok(())
}

async fn run_server(addr: &str, config: AdvisorConfig) -> Result<()> {
    let addr: SocketAddr = addr.parse()?;
    web::serve(addr, config).await
}
