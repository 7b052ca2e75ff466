//! HTTP client for the NHL stats, records, and legacy team APIs.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{DraftQuery, Query, SkaterSummaryQuery, TeamSummaryQuery},
    types::{DataResponse, TeamStatsResponse},
    user_agent::get_user_agent,
    Error,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the NHL APIs.
///
/// Three hosts are involved: the stats REST API (skater and team reports),
/// the records API (draft and attendance), and the legacy stats API (per-team
/// season stats). Each request builds a fresh `reqwest::Client`.
pub struct Client {
    /// Defaults to `https://api.nhle.com`.
    stats_api_url: String,
    /// Defaults to `https://records.nhl.com`.
    records_api_url: String,
    /// Defaults to `https://statsapi.web.nhl.com`.
    legacy_api_url: String,
    timeout: Duration,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production NHL APIs.
    pub fn new() -> Self {
        Self::with_urls(
            "https://api.nhle.com",
            "https://records.nhl.com",
            "https://statsapi.web.nhl.com",
        )
    }

    /// Creates a client that sends every request to one base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_urls(base_url, base_url, base_url)
    }

    pub fn with_urls(stats_api_url: &str, records_api_url: &str, legacy_api_url: &str) -> Self {
        Self {
            stats_api_url: stats_api_url.trim_end_matches('/').to_string(),
            records_api_url: records_api_url.trim_end_matches('/').to_string(),
            legacy_api_url: legacy_api_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn get_url(&self, base: &str, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", base, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, base: &str, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(base, path, query)?;
        tracing::debug!("GET {}", url);
        let client = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .header("accept-language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if status != reqwest::StatusCode::OK {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
            Error::Parse(e.to_string())
        })
    }

    /// Fetches the aggregated skater summary report.
    pub async fn get_skater_summary(
        &self,
        query: &SkaterSummaryQuery,
    ) -> Result<DataResponse, Error> {
        self.get::<DataResponse, SkaterSummaryQuery>(
            &self.stats_api_url,
            "/stats/rest/en/skater/summary",
            Some(query),
        )
        .await
    }

    /// Fetches the per-season team summary report.
    pub async fn get_team_summary(&self, query: &TeamSummaryQuery) -> Result<DataResponse, Error> {
        self.get::<DataResponse, TeamSummaryQuery>(
            &self.stats_api_url,
            "/stats/rest/en/team/summary",
            Some(query),
        )
        .await
    }

    /// Fetches draft records matching the query's predicate.
    pub async fn get_draft(&self, query: &DraftQuery) -> Result<DataResponse, Error> {
        self.get::<DataResponse, DraftQuery>(&self.records_api_url, "/site/api/draft", Some(query))
            .await
    }

    /// Fetches league-wide attendance for every season on record.
    pub async fn get_attendance(&self) -> Result<DataResponse, Error> {
        self.get::<DataResponse, DraftQuery>(&self.records_api_url, "/site/api/attendance", None)
            .await
    }

    /// Fetches the current single-season stats of one team.
    pub async fn get_team_stats(&self, team_id: u32) -> Result<TeamStatsResponse, Error> {
        self.get::<TeamStatsResponse, DraftQuery>(
            &self.legacy_api_url,
            format!("/api/v1/teams/{}/stats", team_id).as_str(),
            None,
        )
        .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
