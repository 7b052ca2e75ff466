//! Response envelopes returned by the stats, records, and legacy team APIs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record of a report. Key order is kept as received.
pub type Row = Map<String, Value>;

/// Envelope used by the stats and records APIs: `{"data": [...], "total": n}`.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct DataResponse {
    pub data: Vec<Row>,
    #[serde(default)]
    pub total: Option<i64>,
}

/// Envelope of the legacy `/api/v1/teams/{id}/stats` endpoint.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct TeamStatsResponse {
    #[serde(default)]
    pub stats: Vec<TeamStatsGroup>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct TeamStatsGroup {
    #[serde(rename = "type", default)]
    pub kind: Option<Value>,
    #[serde(default)]
    pub splits: Vec<TeamStatSplit>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct TeamStatSplit {
    pub stat: Row,
    #[serde(default)]
    pub team: Option<Row>,
}
