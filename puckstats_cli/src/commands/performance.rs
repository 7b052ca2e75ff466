use anyhow::Result;
use clap::Args;
use puckstats_lib::StatsClient;

use crate::output::{
    print_csv, print_json, print_markdown, print_performance_summary, print_table, OutputFormat,
};

#[derive(Args)]
pub struct PerformanceArgs {
    /// NHL team ID (e.g. 22 for Edmonton)
    #[arg(long)]
    pub team: u32,

    /// Print every stat instead of the headline numbers
    #[arg(long)]
    pub all: bool,
}

pub async fn run(args: &PerformanceArgs, client: &StatsClient, format: &OutputFormat) -> Result<()> {
    let perf = client.team_performance(args.team).await?;

    if let OutputFormat::Json = format {
        print_json(&perf);
        return Ok(());
    }

    if !args.all {
        return print_performance_summary(&perf, format);
    }

    match format {
        OutputFormat::Csv => print_csv(&perf.stats)?,
        OutputFormat::Markdown => print_markdown(&perf.stats),
        _ => print_table(&perf.stats),
    }

    Ok(())
}
