use url::Url;

use crate::types::Season;

use super::common::{CayenneExp, GameType, Query};

/// Per-season team summary between two seasons, inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamSummaryQuery {
    pub start_season: Season,
    pub end_season: Season,
    pub game_type: GameType,
}

impl TeamSummaryQuery {
    pub fn new(start_season: Season, end_season: Season) -> Self {
        Self {
            start_season,
            end_season,
            game_type: GameType::RegularSeason,
        }
    }

    pub fn with_game_type(mut self, game_type: GameType) -> Self {
        self.game_type = game_type;
        self
    }
}

impl Query for TeamSummaryQuery {
    fn cayenne_exp(&self) -> CayenneExp {
        CayenneExp::new()
            .eq("gameTypeId", self.game_type.id())
            .le("seasonId", self.end_season)
            .ge("seasonId", self.start_season)
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("cayenneExp", &self.cayenne_exp().to_string());
        url
    }
}
