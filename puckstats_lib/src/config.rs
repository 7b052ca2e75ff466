//! Season context and client configuration.
//!
//! The "current season" drives the defaults of `player_stats` and
//! `team_stats`. It is passed in explicitly rather than read from a global so
//! callers can move it forward without a code change.

use std::path::Path;
use std::time::Duration;

use chrono::NaiveDate;
use puckstats_api::types::Season;
use serde::Deserialize;

use crate::error::PuckError;
use crate::range::check_date_order;
use crate::validation::{validate_date_format, validate_season_format};

pub const DEFAULT_STATS_API_URL: &str = "https://api.nhle.com";
pub const DEFAULT_RECORDS_API_URL: &str = "https://records.nhl.com";
pub const DEFAULT_LEGACY_API_URL: &str = "https://statsapi.web.nhl.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The season used when a caller omits dates or seasons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeasonContext {
    current_season: Season,
    window_start: NaiveDate,
    window_end: NaiveDate,
}

impl Default for SeasonContext {
    fn default() -> Self {
        Self {
            current_season: Season::new(2019, 2020).expect("20192020 is a valid season"),
            window_start: NaiveDate::from_ymd_opt(2019, 10, 2).expect("valid date"),
            window_end: NaiveDate::from_ymd_opt(2020, 4, 11).expect("valid date"),
        }
    }
}

impl SeasonContext {
    pub fn new(
        current_season: Season,
        window_start: NaiveDate,
        window_end: NaiveDate,
    ) -> Result<Self, PuckError> {
        check_date_order(window_start, window_end)?;
        Ok(Self {
            current_season,
            window_start,
            window_end,
        })
    }

    pub fn current_season(&self) -> Season {
        self.current_season
    }

    pub fn window_start(&self) -> NaiveDate {
        self.window_start
    }

    pub fn window_end(&self) -> NaiveDate {
        self.window_end
    }
}

/// Everything needed to build a [`crate::StatsClient`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsConfig {
    pub season: SeasonContext,
    pub stats_api_url: String,
    pub records_api_url: String,
    pub legacy_api_url: String,
    pub timeout: Duration,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            season: SeasonContext::default(),
            stats_api_url: DEFAULT_STATS_API_URL.to_string(),
            records_api_url: DEFAULT_RECORDS_API_URL.to_string(),
            legacy_api_url: DEFAULT_LEGACY_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    stats_api_url: Option<String>,
    records_api_url: Option<String>,
    legacy_api_url: Option<String>,
    timeout_secs: Option<u64>,
    #[serde(default)]
    season: SeasonSection,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SeasonSection {
    current: Option<String>,
    window_start: Option<String>,
    window_end: Option<String>,
}

impl StatsConfig {
    /// Parse a TOML document. Every key is optional:
    ///
    /// ```toml
    /// timeout_secs = 10
    ///
    /// [season]
    /// current = "20192020"
    /// window_start = "2019-10-02"
    /// window_end = "2020-04-11"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, PuckError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| PuckError::Config(e.to_string()))?;
        let defaults = StatsConfig::default();

        let current_season = match file.season.current.as_deref() {
            Some(s) => validate_season_format(s)?,
            None => defaults.season.current_season,
        };
        let window_start = match file.season.window_start.as_deref() {
            Some(s) => validate_date_format(s)?,
            None => defaults.season.window_start,
        };
        let window_end = match file.season.window_end.as_deref() {
            Some(s) => validate_date_format(s)?,
            None => defaults.season.window_end,
        };

        let timeout_secs = file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(PuckError::Config("timeout_secs must be at least 1".to_string()));
        }

        Ok(Self {
            season: SeasonContext::new(current_season, window_start, window_end)?,
            stats_api_url: file.stats_api_url.unwrap_or(defaults.stats_api_url),
            records_api_url: file.records_api_url.unwrap_or(defaults.records_api_url),
            legacy_api_url: file.legacy_api_url.unwrap_or(defaults.legacy_api_url),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, PuckError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PuckError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }
}
