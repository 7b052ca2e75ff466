//! Turns decoded API payloads into tables, attendance records, and team
//! summaries.
//!
//! Empty results follow two policies: a draft lookup that matches nothing is
//! an error, while an empty stats report is returned as an empty table.

use puckstats_api::types::{Row, Season, TeamStatsResponse};
use puckstats_api::{DraftQuery, DRAFT_COLUMNS, PLAYER_ROW_LIMIT};
use serde::Serialize;
use serde_json::Value;

use crate::chart::AttendanceRecord;
use crate::error::PuckError;
use crate::table::Table;
use crate::validation::{validate_type, ArgKind};

/// What to do when a query comes back with no rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Hand back an empty table and log a warning.
    Report,
    /// Fail with `EmptyResult` and this message.
    Fail(&'static str),
}

pub const DRAFT_EMPTY_MESSAGE: &str =
    "no record matches the given pick number / round / year combination";

const DRAFT_FILTER_FIELDS: [&str; 3] = ["pickInRound", "roundNumber", "draftYear"];

pub fn map_rows(rows: Vec<Row>, policy: EmptyPolicy, report: &str) -> Result<Table, PuckError> {
    if rows.is_empty() {
        return match policy {
            EmptyPolicy::Report => {
                tracing::warn!("{} returned no rows", report);
                Ok(Table::default())
            }
            EmptyPolicy::Fail(message) => Err(PuckError::EmptyResult(message.to_string())),
        };
    }
    tracing::info!("{} returned {} rows", report, rows.len());
    Ok(Table::from_rows(rows))
}

/// Skater summary rows, capped at [`PLAYER_ROW_LIMIT`] even if the server
/// sends more.
pub fn map_player_rows(mut rows: Vec<Row>) -> Result<Table, PuckError> {
    let cap = PLAYER_ROW_LIMIT as usize;
    if rows.len() > cap {
        tracing::warn!("skater summary returned {} rows, keeping {}", rows.len(), cap);
        rows.truncate(cap);
    }
    map_rows(rows, EmptyPolicy::Report, "skater summary")
}

/// Keeps the rows matching `query` and projects them onto [`DRAFT_COLUMNS`].
///
/// Rows that do not match are skipped whatever their field kinds.
pub fn map_draft_rows(rows: Vec<Row>, query: &DraftQuery) -> Result<Table, PuckError> {
    let matching: Vec<Row> = rows.into_iter().filter(|row| query.matches(row)).collect();
    for row in &matching {
        for field in DRAFT_FILTER_FIELDS {
            match row.get(field) {
                None | Some(Value::Null) => {}
                Some(value) => validate_type(value, ArgKind::Integer, field)?,
            }
        }
    }
    let table = map_rows(matching, EmptyPolicy::Fail(DRAFT_EMPTY_MESSAGE), "draft")?;
    Ok(table.select(&DRAFT_COLUMNS))
}

/// Attendance between two repeated-year season codes, inclusive, sorted by
/// season. Missing counts read as zero.
pub fn map_attendance_rows(
    rows: Vec<Row>,
    start: Season,
    end: Season,
) -> Result<Vec<AttendanceRecord>, PuckError> {
    let mut records = Vec::with_capacity(rows.len());
    for row in &rows {
        let season_id = row.get("seasonId").unwrap_or(&Value::Null);
        validate_type(season_id, ArgKind::Integer, "seasonId")?;
        let season_id = season_id.as_i64().unwrap_or_default();
        if season_id < start.code() || season_id > end.code() {
            continue;
        }
        records.push(AttendanceRecord {
            season_id,
            regular: count_or_zero(row, "regularAttendance")?,
            playoff: count_or_zero(row, "playoffAttendance")?,
        });
    }
    records.sort_by_key(|r| r.season_id);
    Ok(records)
}

fn count_or_zero(row: &Row, field: &str) -> Result<i64, PuckError> {
    match row.get(field) {
        None | Some(Value::Null) => Ok(0),
        Some(value) => match ArgKind::of(value) {
            ArgKind::Float => Ok(value.as_f64().unwrap_or_default() as i64),
            _ => {
                validate_type(value, ArgKind::Integer, field)?;
                Ok(value.as_i64().unwrap_or_default())
            }
        },
    }
}

/// Headline numbers of one team's season, plus every stat as a table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeamPerformance {
    pub team_id: u32,
    pub games_played: i64,
    pub wins: i64,
    pub points: i64,
    pub win_ratio: f64,
    pub stats: Table,
}

pub fn map_team_performance(
    team_id: u32,
    resp: TeamStatsResponse,
) -> Result<TeamPerformance, PuckError> {
    let stat = resp
        .stats
        .into_iter()
        .next()
        .and_then(|group| group.splits.into_iter().next())
        .map(|split| split.stat)
        .ok_or_else(|| PuckError::EmptyResult(format!("no stats returned for team {}", team_id)))?;

    let int_stat = |name: &str| -> Result<i64, PuckError> {
        let value = stat.get(name).unwrap_or(&Value::Null);
        validate_type(value, ArgKind::Integer, name)?;
        Ok(value.as_i64().unwrap_or_default())
    };
    let games_played = int_stat("gamesPlayed")?;
    let wins = int_stat("wins")?;
    let points = int_stat("pts")?;
    let win_ratio = if games_played > 0 {
        wins as f64 / games_played as f64
    } else {
        0.0
    };

    let team_column = team_id.to_string();
    let rows = stat
        .iter()
        .map(|(name, value)| {
            let mut row = Row::new();
            row.insert("stat".to_string(), Value::String(name.clone()));
            row.insert(team_column.clone(), value.clone());
            row
        })
        .collect();

    Ok(TeamPerformance {
        team_id,
        games_played,
        wins,
        points,
        win_ratio,
        stats: Table::from_rows(rows),
    })
}
