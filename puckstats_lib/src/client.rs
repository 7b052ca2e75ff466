//! The query entry points: validate, build, fetch once, map.

use puckstats_api::types::Season;
use puckstats_api::{Client, DraftQuery, SkaterSummaryQuery, TeamSummaryQuery};

use crate::chart::{AttendanceChart, AttendanceSelection};
use crate::config::{SeasonContext, StatsConfig};
use crate::error::PuckError;
use crate::mapper::{
    map_attendance_rows, map_draft_rows, map_player_rows, map_rows, map_team_performance,
    EmptyPolicy, TeamPerformance,
};
use crate::range::{
    check_bounded_range, check_date_order, check_season_order, ATTENDANCE_END_BOUNDS,
    ATTENDANCE_START_BOUNDS, DRAFT_YEAR_BOUNDS, PICK_NUMBER_BOUNDS, ROUND_NUMBER_BOUNDS,
};
use crate::table::Table;
use crate::validation::{validate_date_format, validate_season_format};

/// Arguments of [`StatsClient::attendance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttendanceArgs {
    pub regular: bool,
    pub playoffs: bool,
    pub start_season: Option<i32>,
    pub end_season: Option<i32>,
}

impl Default for AttendanceArgs {
    fn default() -> Self {
        Self {
            regular: true,
            playoffs: true,
            start_season: None,
            end_season: None,
        }
    }
}

/// API client wrapper exposing the validated query entry points.
///
/// Every entry point checks its arguments before touching the network, then
/// issues exactly one request. Nothing is cached or retried.
pub struct StatsClient {
    inner: Client,
    context: SeasonContext,
}

impl StatsClient {
    pub fn new(config: StatsConfig) -> Self {
        let inner = Client::with_urls(
            &config.stats_api_url,
            &config.records_api_url,
            &config.legacy_api_url,
        )
        .with_timeout(config.timeout);
        Self {
            inner,
            context: config.season,
        }
    }

    /// Sends every request to `base_url`. Used for testing.
    pub fn with_base_url(base_url: &str, context: SeasonContext) -> Self {
        Self {
            inner: Client::with_base_url(base_url),
            context,
        }
    }

    /// Top skaters by points (then goals, then assists) over a game-date window.
    ///
    /// Omitted dates fall back to the context's season window. At most 100
    /// rows come back; an empty window yields an empty table.
    pub async fn player_stats(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Table, PuckError> {
        let start = match start_date {
            Some(s) => validate_date_format(s)?,
            None => self.context.window_start(),
        };
        let end = match end_date {
            Some(s) => validate_date_format(s)?,
            None => self.context.window_end(),
        };
        check_date_order(start, end)?;

        let query = SkaterSummaryQuery::new(start, end);
        let resp = self.inner.get_skater_summary(&query).await?;
        map_player_rows(resp.data)
    }

    /// Regular-season team summaries for every season in `[start, end]`.
    ///
    /// Omitted seasons fall back to the context's current season. An empty
    /// result is returned as an empty table.
    pub async fn team_stats(
        &self,
        start_season: Option<&str>,
        end_season: Option<&str>,
    ) -> Result<Table, PuckError> {
        let start = match start_season {
            Some(s) => validate_season_format(s)?,
            None => self.context.current_season(),
        };
        let end = match end_season {
            Some(s) => validate_season_format(s)?,
            None => self.context.current_season(),
        };
        check_season_order(&start, &end)?;

        let query = TeamSummaryQuery::new(start, end);
        let resp = self.inner.get_team_summary(&query).await?;
        map_rows(resp.data, EmptyPolicy::Report, "team summary")
    }

    /// Draft selections with the given pick-in-round, optionally narrowed to
    /// one round and/or one draft year. Fails when nothing matches.
    pub async fn draft_pick(
        &self,
        pick_number: u32,
        round_number: Option<u32>,
        year: Option<i32>,
    ) -> Result<Table, PuckError> {
        let (lo, hi) = PICK_NUMBER_BOUNDS;
        check_bounded_range(pick_number, lo, hi, "pick_number")?;
        let mut query = DraftQuery::new(pick_number);
        if let Some(round) = round_number {
            let (lo, hi) = ROUND_NUMBER_BOUNDS;
            check_bounded_range(round, lo, hi, "round_number")?;
            query = query.with_round(round);
        }
        if let Some(year) = year {
            let (lo, hi) = DRAFT_YEAR_BOUNDS;
            check_bounded_range(year, lo, hi, "year")?;
            query = query.with_year(year);
        }

        let resp = self.inner.get_draft(&query).await?;
        map_draft_rows(resp.data, &query)
    }

    /// League attendance per season as one or two bar series.
    pub async fn attendance(&self, args: AttendanceArgs) -> Result<AttendanceChart, PuckError> {
        let selection = AttendanceSelection::from_flags(args.regular, args.playoffs)?;
        let start = args.start_season.unwrap_or(ATTENDANCE_START_BOUNDS.0);
        let end = args.end_season.unwrap_or(ATTENDANCE_END_BOUNDS.1);
        let (lo, hi) = ATTENDANCE_START_BOUNDS;
        check_bounded_range(start, lo, hi, "start_season")?;
        let (lo, hi) = ATTENDANCE_END_BOUNDS;
        check_bounded_range(end, lo, hi, "end_season")?;
        if end <= start {
            return Err(PuckError::Range(
                "end_season must be later than start_season".to_string(),
            ));
        }
        let start = Season::single_year(start).ok_or_else(|| season_code_error(start))?;
        let end = Season::single_year(end).ok_or_else(|| season_code_error(end))?;

        let resp = self.inner.get_attendance().await?;
        let records = map_attendance_rows(resp.data, start, end)?;
        tracing::info!("attendance: {} seasons in range", records.len());
        Ok(AttendanceChart::new(records, selection))
    }

    /// Current single-season summary of one team from the legacy stats API.
    pub async fn team_performance(&self, team_id: u32) -> Result<TeamPerformance, PuckError> {
        if team_id == 0 {
            return Err(PuckError::Range("team_id must be at least 1".to_string()));
        }
        let resp = self.inner.get_team_stats(team_id).await?;
        map_team_performance(team_id, resp)
    }
}

fn season_code_error(year: i32) -> PuckError {
    PuckError::Range(format!("{} cannot be encoded as a season", year))
}
