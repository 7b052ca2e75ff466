use anyhow::Result;
use clap::Args;
use puckstats_lib::StatsClient;

use crate::output::{print_csv, print_json, print_markdown, print_table, OutputFormat};

#[derive(Args)]
pub struct DraftArgs {
    /// Pick number within the round (1-37)
    #[arg(long, default_value = "1")]
    pub pick: u32,

    /// Draft round (1-24)
    #[arg(long)]
    pub round: Option<u32>,

    /// Draft year (1963-2018)
    #[arg(long)]
    pub year: Option<i32>,
}

pub async fn run(args: &DraftArgs, client: &StatsClient, format: &OutputFormat) -> Result<()> {
    let table = client.draft_pick(args.pick, args.round, args.year).await?;

    match format {
        OutputFormat::Table => print_table(&table),
        OutputFormat::Json => print_json(table.rows()),
        OutputFormat::Csv => print_csv(&table)?,
        OutputFormat::Markdown => print_markdown(&table),
    }

    Ok(())
}
