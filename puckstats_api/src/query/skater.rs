use chrono::NaiveDate;
use url::Url;

use super::common::{sort_param, CayenneExp, GameType, Query, SortKey};

/// Hard cap on rows returned by the skater summary report.
pub const PLAYER_ROW_LIMIT: u32 = 100;

/// Skaters with fewer games in the window are left out of the report.
pub const MIN_GAMES_PLAYED: u32 = 1;

/// Points, then goals, then assists; all descending.
const PLAYER_SORT: [SortKey; 3] = [
    SortKey::desc("points"),
    SortKey::desc("goals"),
    SortKey::desc("assists"),
];

/// Aggregated skater summary over a game-date window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkaterSummaryQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub game_type: GameType,
}

impl SkaterSummaryQuery {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            game_type: GameType::RegularSeason,
        }
    }

    pub fn with_game_type(mut self, game_type: GameType) -> Self {
        self.game_type = game_type;
        self
    }

    pub fn sort_keys(&self) -> &'static [SortKey] {
        &PLAYER_SORT
    }
}

impl Query for SkaterSummaryQuery {
    fn cayenne_exp(&self) -> CayenneExp {
        CayenneExp::new()
            .le("gameDate", self.end_date)
            .ge("gameDate", self.start_date)
            .eq("gameTypeId", self.game_type.id())
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("isAggregate", "true")
            .append_pair("isGame", "true")
            .append_pair("sort", &sort_param(&PLAYER_SORT))
            .append_pair("start", "0")
            .append_pair("limit", &PLAYER_ROW_LIMIT.to_string())
            .append_pair(
                "factCayenneExp",
                &CayenneExp::new()
                    .ge("gamesPlayed", MIN_GAMES_PLAYED)
                    .to_string(),
            )
            .append_pair("cayenneExp", &self.cayenne_exp().to_string());
        url
    }
}
