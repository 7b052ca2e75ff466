use puckstats_api::types::{DataResponse, TeamStatsResponse};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_team_summary() {
    let json = load_fixture("team_summary.json");
    let resp: DataResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 36);
    assert_eq!(resp.total, Some(36));

    let first = &resp.data[0];
    assert_eq!(first["seasonId"], 19531954);
    assert_eq!(first["teamFullName"], "Boston Bruins");
    assert!(first["faceoffWinPct"].is_null());
}

#[test]
fn deserialize_keeps_key_order() {
    let json = load_fixture("draft.json");
    let resp: DataResponse = serde_json::from_str(&json).unwrap();
    let keys: Vec<&str> = resp.data[0].keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [
            "id",
            "draftYear",
            "overallPickNumber",
            "pickInRound",
            "playerName",
            "position",
            "roundNumber",
            "teamPickHistory",
            "triCode"
        ]
    );
}

#[test]
fn deserialize_empty_data() {
    let json = load_fixture("empty.json");
    let resp: DataResponse = serde_json::from_str(&json).unwrap();
    assert!(resp.data.is_empty());
    assert_eq!(resp.total, Some(0));
}

#[test]
fn deserialize_without_total() {
    let resp: DataResponse = serde_json::from_str(r#"{"data": [{"a": 1}]}"#).unwrap();
    assert_eq!(resp.data.len(), 1);
    assert_eq!(resp.total, None);
}

#[test]
fn deserialize_legacy_team_stats() {
    let json = load_fixture("team_stats.json");
    let resp: TeamStatsResponse = serde_json::from_str(&json).unwrap();
    let split = &resp.stats[0].splits[0];
    assert_eq!(split.stat["gamesPlayed"], 71);
    assert_eq!(split.stat["ptPctg"], "58.5");
    assert_eq!(split.team.as_ref().unwrap()["name"], "Edmonton Oilers");
}

#[test]
fn deserialize_legacy_team_stats_without_stats() {
    let resp: TeamStatsResponse = serde_json::from_str(r#"{"copyright": "x"}"#).unwrap();
    assert!(resp.stats.is_empty());
}

#[test]
fn deserialize_missing_data_returns_error() {
    let result = serde_json::from_str::<DataResponse>(r#"{"total": 3}"#);
    assert!(result.is_err());
}

#[test]
fn deserialize_non_object_rows_returns_error() {
    let result = serde_json::from_str::<DataResponse>(r#"{"data": [1, 2, 3]}"#);
    assert!(result.is_err());
}
