mod commands;
mod output;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use puckstats_lib::{StatsClient, StatsConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "puckstats")]
#[command(about = "Query NHL skater, team, draft, and attendance statistics")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// TOML config file (defaults to $PUCKSTATS_CONFIG when set)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log requests and row counts at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Top skaters by points over a game-date window
    Players(commands::players::PlayersArgs),
    /// Regular-season team summaries over a range of seasons
    Teams(commands::teams::TeamsArgs),
    /// Draft selections by pick number, round, and year
    Draft(commands::draft::DraftArgs),
    /// League attendance per season
    Attendance(commands::attendance::AttendanceArgs),
    /// Current season summary for one team
    Performance(commands::performance::PerformanceArgs),
}

fn load_config(path: Option<&Path>) -> Result<StatsConfig> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os("PUCKSTATS_CONFIG").map(PathBuf::from));
    match path {
        Some(path) => Ok(StatsConfig::load(&path)?),
        None => Ok(StatsConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let directive = if cli.verbose {
        "puckstats=debug"
    } else {
        "puckstats=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let config = load_config(cli.config.as_deref())?;
    let client = StatsClient::new(config);

    match &cli.command {
        Commands::Players(args) => commands::players::run(args, &client, &format).await?,
        Commands::Teams(args) => commands::teams::run(args, &client, &format).await?,
        Commands::Draft(args) => commands::draft::run(args, &client, &format).await?,
        Commands::Attendance(args) => commands::attendance::run(args, &client, &format).await?,
        Commands::Performance(args) => commands::performance::run(args, &client, &format).await?,
    }

    Ok(())
}
