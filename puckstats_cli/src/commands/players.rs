use anyhow::Result;
use clap::Args;
use puckstats_lib::StatsClient;

use crate::output::{print_csv, print_json, print_markdown, print_table, OutputFormat};

#[derive(Args)]
pub struct PlayersArgs {
    /// First game date, YYYY-MM-DD (defaults to the configured season start)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Last game date, YYYY-MM-DD (defaults to the configured season end)
    #[arg(long)]
    pub end_date: Option<String>,
}

pub async fn run(args: &PlayersArgs, client: &StatsClient, format: &OutputFormat) -> Result<()> {
    let table = client
        .player_stats(args.start_date.as_deref(), args.end_date.as_deref())
        .await?;

    eprintln!("{} skaters", table.len());

    match format {
        OutputFormat::Table => print_table(&table),
        OutputFormat::Json => print_json(table.rows()),
        OutputFormat::Csv => print_csv(&table)?,
        OutputFormat::Markdown => print_markdown(&table),
    }

    Ok(())
}
