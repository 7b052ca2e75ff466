use chrono::NaiveDate;
use puckstats_api::types::Season;
use puckstats_api::{Client, DraftQuery, Error, SkaterSummaryQuery, TeamSummaryQuery};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn get_skater_summary_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("skater_summary.json");

    Mock::given(method("GET"))
        .and(path("/stats/rest/en/skater/summary"))
        .and(query_param("limit", "100"))
        .and(query_param(
            "cayenneExp",
            r#"gameDate<="2020-02-28" and gameDate>="2019-10-02" and gameTypeId=2"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = SkaterSummaryQuery::new(
        NaiveDate::from_ymd_opt(2019, 10, 2).unwrap(),
        NaiveDate::from_ymd_opt(2020, 2, 28).unwrap(),
    );
    let resp = client.get_skater_summary(&query).await.unwrap();
    assert_eq!(resp.data.len(), 100);
    assert_eq!(resp.total, Some(907));
}

#[tokio::test]
async fn get_team_summary_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("team_summary.json");

    Mock::given(method("GET"))
        .and(path("/stats/rest/en/team/summary"))
        .and(query_param(
            "cayenneExp",
            "gameTypeId=2 and seasonId<=19581959 and seasonId>=19531954",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = TeamSummaryQuery::new(
        Season::new(1953, 1954).unwrap(),
        Season::new(1958, 1959).unwrap(),
    );
    let resp = client.get_team_summary(&query).await.unwrap();
    assert_eq!(resp.data.len(), 36);
}

#[tokio::test]
async fn get_draft_sends_predicate() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("draft.json");

    Mock::given(method("GET"))
        .and(path("/site/api/draft"))
        .and(query_param("cayenneExp", "pickInRound=9 and roundNumber=7"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client
        .get_draft(&DraftQuery::new(9).with_round(7))
        .await
        .unwrap();
    assert!(!resp.data.is_empty());
}

#[tokio::test]
async fn get_attendance_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("attendance.json");

    Mock::given(method("GET"))
        .and(path("/site/api/attendance"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client.get_attendance().await.unwrap();
    assert_eq!(resp.data.len(), 7);
}

#[tokio::test]
async fn get_team_stats_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("team_stats.json");

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/22/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client.get_team_stats(22).await.unwrap();
    assert_eq!(resp.stats[0].splits[0].stat["pts"], 83);
}

#[tokio::test]
async fn non_ok_status_is_reported_with_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/site/api/attendance"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    match client.get_attendance().await {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "Service Unavailable");
        }
        other => panic!("expected HttpStatus, got {:?}", other.map(|r| r.data.len())),
    }
}

#[tokio::test]
async fn success_other_than_200_is_not_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/site/api/attendance"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_attendance().await;
    assert!(matches!(result, Err(Error::HttpStatus { status: 204, .. })));
}

#[tokio::test]
async fn malformed_json_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/site/api/draft"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_draft(&DraftQuery::default()).await;
    assert!(matches!(result, Err(Error::Parse(_))));
}
