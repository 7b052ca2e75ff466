use anyhow::Result;
use clap::Args;
use puckstats_lib::StatsClient;

use crate::output::{print_csv, print_json, print_markdown, print_table, OutputFormat};

#[derive(Args)]
pub struct TeamsArgs {
    /// First season, e.g. 20182019 (defaults to the configured season)
    #[arg(long)]
    pub start_season: Option<String>,

    /// Last season, e.g. 20192020 (defaults to the configured season)
    #[arg(long)]
    pub end_season: Option<String>,
}

pub async fn run(args: &TeamsArgs, client: &StatsClient, format: &OutputFormat) -> Result<()> {
    let table = client
        .team_stats(args.start_season.as_deref(), args.end_season.as_deref())
        .await?;

    eprintln!("{} team seasons", table.len());

    match format {
        OutputFormat::Table => print_table(&table),
        OutputFormat::Json => print_json(table.rows()),
        OutputFormat::Csv => print_csv(&table)?,
        OutputFormat::Markdown => print_markdown(&table),
    }

    Ok(())
}
