use serde_json::Value;
use url::Url;

use crate::types::Row;

use super::common::{CayenneExp, Query};

/// Columns kept from a draft record, in output order.
pub const DRAFT_COLUMNS: [&str; 5] = [
    "playerName",
    "pickInRound",
    "roundNumber",
    "triCode",
    "draftYear",
];

/// Draft selections by pick-in-round, optionally narrowed by round and year.
///
/// The pick number is always part of the predicate; round and year only when set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftQuery {
    pub pick_number: u32,
    pub round_number: Option<u32>,
    pub year: Option<i32>,
}

impl Default for DraftQuery {
    fn default() -> Self {
        Self::new(1)
    }
}

impl DraftQuery {
    pub fn new(pick_number: u32) -> Self {
        Self {
            pick_number,
            round_number: None,
            year: None,
        }
    }

    pub fn with_round(mut self, round_number: u32) -> Self {
        self.round_number = Some(round_number);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Returns true when `row` satisfies every predicate of this query.
    pub fn matches(&self, row: &Row) -> bool {
        let field = |name: &str| row.get(name).and_then(Value::as_i64);
        if field("pickInRound") != Some(self.pick_number.into()) {
            return false;
        }
        if let Some(round) = self.round_number {
            if field("roundNumber") != Some(round.into()) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if field("draftYear") != Some(year.into()) {
                return false;
            }
        }
        true
    }
}

impl Query for DraftQuery {
    fn cayenne_exp(&self) -> CayenneExp {
        let mut exp = CayenneExp::new().eq("pickInRound", self.pick_number);
        if let Some(round) = self.round_number {
            exp = exp.eq("roundNumber", round);
        }
        if let Some(year) = self.year {
            exp = exp.eq("draftYear", year);
        }
        exp
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("cayenneExp", &self.cayenne_exp().to_string());
        url
    }
}
