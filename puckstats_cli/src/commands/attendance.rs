use anyhow::Result;
use clap::Args;
use puckstats_lib::{self as lib, StatsClient};

use crate::output::{
    attendance_table, print_csv, print_json, print_markdown, print_table, OutputFormat,
};

#[derive(Args)]
pub struct AttendanceArgs {
    /// Leave out regular-season attendance
    #[arg(long)]
    pub no_regular: bool,

    /// Leave out playoff attendance
    #[arg(long)]
    pub no_playoffs: bool,

    /// First season's starting year (1975-2018)
    #[arg(long)]
    pub start_season: Option<i32>,

    /// Last season's starting year (1976-2019)
    #[arg(long)]
    pub end_season: Option<i32>,

    /// Print a Vega-Lite bar chart spec instead of the data
    #[arg(long)]
    pub vega_lite: bool,
}

pub async fn run(args: &AttendanceArgs, client: &StatsClient, format: &OutputFormat) -> Result<()> {
    let chart = client
        .attendance(lib::AttendanceArgs {
            regular: !args.no_regular,
            playoffs: !args.no_playoffs,
            start_season: args.start_season,
            end_season: args.end_season,
        })
        .await?;

    if args.vega_lite {
        print_json(&chart.to_vega_lite());
        return Ok(());
    }

    let table = attendance_table(&chart);
    match format {
        OutputFormat::Table => print_table(&table),
        OutputFormat::Json => print_json(&chart),
        OutputFormat::Csv => print_csv(&table)?,
        OutputFormat::Markdown => print_markdown(&table),
    }

    Ok(())
}
