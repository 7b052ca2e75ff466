use anyhow::Result;
use puckstats_lib::types::Row;
use puckstats_lib::{AttendanceChart, Table, TeamPerformance};
use serde::Serialize;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::Tabled;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct PerformanceRow {
    #[tabled(rename = "Team")]
    #[serde(rename = "Team")]
    team_id: u32,
    #[tabled(rename = "GP")]
    #[serde(rename = "GP")]
    games_played: i64,
    #[tabled(rename = "Wins")]
    #[serde(rename = "Wins")]
    wins: i64,
    #[tabled(rename = "Points")]
    #[serde(rename = "Points")]
    points: i64,
    #[tabled(rename = "Win %")]
    #[serde(rename = "Win %")]
    win_pct: String,
}

// -- Row builders --

fn build_performance_row(perf: &TeamPerformance) -> PerformanceRow {
    PerformanceRow {
        team_id: perf.team_id,
        games_played: perf.games_played,
        wins: perf.wins,
        points: perf.points,
        win_pct: format!("{:.1}%", perf.win_ratio * 100.0),
    }
}

/// One row per season, one column per charted series.
pub fn attendance_table(chart: &AttendanceChart) -> Table {
    let rows = chart
        .records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mut row = Row::new();
            row.insert("Season".to_string(), Value::from(record.season_id));
            for series in &chart.series {
                let count = series.points.get(i).map(|(_, v)| *v).unwrap_or_default();
                row.insert(series.title.clone(), Value::from(count));
            }
            row
        })
        .collect();
    Table::from_rows(rows)
}

fn build_tabled(table: &Table) -> tabled::Table {
    let mut builder = Builder::default();
    builder.push_record(table.columns().iter().cloned());
    for i in 0..table.len() {
        if let Some(cells) = table.display_row(i) {
            builder.push_record(cells);
        }
    }
    builder.build()
}

// -- Table output --

pub fn print_table(table: &Table) {
    println!("{}", build_tabled(table));
}

// -- Markdown output --

pub fn print_markdown(table: &Table) {
    let mut tabled = build_tabled(table);
    tabled.with(Style::markdown());
    println!("{}", tabled);
}

// -- CSV output --

fn write_csv<W: std::io::Write>(table: &Table, wtr: &mut csv::Writer<W>) -> Result<()> {
    if table.columns().is_empty() {
        return Ok(());
    }
    wtr.write_record(table.columns())?;
    for i in 0..table.len() {
        if let Some(cells) = table.display_row(i) {
            wtr.write_record(&cells)?;
        }
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_csv(table: &Table) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    write_csv(table, &mut wtr)
}

// -- Team performance --

pub fn print_performance_summary(perf: &TeamPerformance, format: &OutputFormat) -> Result<()> {
    let row = build_performance_row(perf);
    match format {
        OutputFormat::Table => println!("{}", tabled::Table::new([row])),
        OutputFormat::Markdown => {
            let mut table = tabled::Table::new([row]);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.serialize(row)?;
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&row),
    }
    Ok(())
}

// -- JSON output --

pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
