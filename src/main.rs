use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use courier_earnings::api::{AppState, AttemptRecordRequest, create_router, into_attempt_log};
use courier_earnings::calculation::compute_statement;
use courier_earnings::config::{AppConfig, ConfigLoader, RateCardRegistry};
use courier_earnings::models::Tier;
use courier_earnings::telemetry;
use tracing::info;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser, Debug)]
#[command(
    name = "courier-earnings",
    about = "Compute courier earnings statements from delivery attempt logs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Compute one statement from a JSON file of attempt records
    Statement(StatementArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
    /// YAML rate card file (defaults to the built-in rate cards)
    #[arg(long)]
    rate_cards: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct StatementArgs {
    /// Rate card id, e.g. gold_tier
    #[arg(long)]
    tier: Tier,
    /// JSON file holding an array of attempt records
    #[arg(long)]
    input: PathBuf,
    /// YAML rate card file (defaults to the built-in rate cards)
    #[arg(long)]
    rate_cards: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> CliResult<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => run_server(args).await,
        Command::Statement(args) => run_statement(args),
    }
}

async fn run_server(mut args: ServeArgs) -> CliResult<()> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.host = host;
    }
    if let Some(port) = args.port.take() {
        config.port = port;
    }
    if let Some(path) = args.rate_cards.take() {
        config.rate_cards_path = Some(path);
    }

    telemetry::init(&config.log_level)?;

    let registry = load_registry(config.rate_cards_path.as_deref())?;
    let app = create_router(AppState::new(registry));

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, rate_cards = ?config.rate_cards_path, "courier earnings service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_statement(args: StatementArgs) -> CliResult<()> {
    let config = AppConfig::load()?;
    telemetry::init(&config.log_level)?;

    let rate_cards = args.rate_cards.or(config.rate_cards_path);
    let registry = load_registry(rate_cards.as_deref())?;

    let content = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read {}: {err}", args.input.display()))?;
    let requests: Vec<AttemptRecordRequest> = serde_json::from_str(&content)?;
    let log = into_attempt_log(requests)?;

    let statement = compute_statement(&registry, args.tier, &log)?;
    println!("{}", serde_json::to_string_pretty(&statement)?);
    Ok(())
}

fn load_registry(path: Option<&Path>) -> CliResult<RateCardRegistry> {
    match path {
        Some(path) => {
            let loader = ConfigLoader::load(path)?;
            info!(path = %path.display(), "loaded rate cards");
            Ok(loader.into_registry())
        }
        None => Ok(RateCardRegistry::standard()),
    }
}
