//! football-data.org (v4) API client.
//!
//! Requires an API token, sent as the `X-Auth-Token` header. The free tier is
//! rate limited; a 429 is surfaced as [`ProviderError::RateLimited`] and not retried.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::{MatchProvider, ProviderError};
use crate::config::ProviderConfig;
use crate::metrics::{PROVIDER_REQUESTS, PROVIDER_REQUEST_DURATION};
use crate::model::{DateRange, MatchRecord, MatchStatus, Team, TeamId};

/// football-data.org API client for a single competition.
pub struct FootballDataClient {
    client: Client,
    base_url: String,
    api_key: String,
    competition: String,
}

impl FootballDataClient {
    /// Create a new client.
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        if config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "football-data.org API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_secs)))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            competition: config.competition,
        })
    }

    /// Competition code this client is bound to (e.g. "PD").
    pub fn competition(&self) -> &str {
        &self.competition
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let start = Instant::now();
        let result = self.send(url, query).await;

        PROVIDER_REQUEST_DURATION
            .with_label_values(&[endpoint])
            .observe(start.elapsed().as_secs_f64());
        PROVIDER_REQUESTS
            .with_label_values(&[endpoint, if result.is_ok() { "ok" } else { "error" }])
            .inc();

        let response = result?;
        response.json().await.map_err(|e| {
            ProviderError::ParseError(format!("Failed to parse {} response: {}", endpoint, e))
        })
    }

    async fn send(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<reqwest::Response, ProviderError> {
        let response = self
            .client
            .get(url)
            .header("X-Auth-Token", &self.api_key)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status == 401 || status == 403 {
            return Err(ProviderError::Unauthorized);
        }
        if status == 429 {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl MatchProvider for FootballDataClient {
    fn name(&self) -> &str {
        "football-data"
    }

    async fn fetch_teams(&self) -> Result<Vec<Team>, ProviderError> {
        let url = format!("{}/competitions/{}/teams", self.base_url, self.competition);

        debug!("football-data teams: competition={}", self.competition);

        let response: TeamsResponse = self.get_json("teams", &url, &[]).await?;
        Ok(response.teams.into_iter().map(Team::from).collect())
    }

    async fn fetch_matches(&self, range: &DateRange) -> Result<Vec<MatchRecord>, ProviderError> {
        let url = format!("{}/competitions/{}/matches", self.base_url, self.competition);
        let query = date_query(range);

        debug!(
            "football-data matches: competition={}, from={:?}, to={:?}",
            self.competition,
            range.start(),
            range.end()
        );

        let response: MatchesResponse = self.get_json("matches", &url, &query).await?;
        Ok(response
            .matches
            .into_iter()
            .filter_map(RawMatch::into_record)
            .collect())
    }
}

/// football-data.org only accepts `dateFrom` and `dateTo` as a pair, so a
/// half-open range is fetched unbounded and narrowed by the caller.
fn date_query(range: &DateRange) -> Vec<(&'static str, String)> {
    match (range.start(), range.end()) {
        (Some(start), Some(end)) => vec![
            ("dateFrom", start.format("%Y-%m-%d").to_string()),
            ("dateTo", end.format("%Y-%m-%d").to_string()),
        ],
        _ => Vec::new(),
    }
}

// ============================================================================
// football-data.org response types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct TeamsResponse {
    #[serde(default)]
    teams: Vec<RawTeam>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTeam {
    id: TeamId,
    name: String,
    short_name: Option<String>,
    tla: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MatchesResponse {
    #[serde(default)]
    matches: Vec<RawMatch>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMatch {
    id: u64,
    utc_date: DateTime<Utc>,
    status: MatchStatus,
    home_team: RawTeamRef,
    away_team: RawTeamRef,
    score: RawScore,
}

/// Team reference inside a match. The id is null for undecided fixtures.
#[derive(Debug, Deserialize)]
struct RawTeamRef {
    id: Option<TeamId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScore {
    full_time: RawScoreLine,
}

#[derive(Debug, Deserialize)]
struct RawScoreLine {
    home: Option<u32>,
    away: Option<u32>,
}

// ============================================================================
// Conversions
// ============================================================================

impl From<RawTeam> for Team {
    fn from(raw: RawTeam) -> Self {
        let short_name = raw
            .short_name
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| raw.name.clone());
        Self {
            id: raw.id,
            name: raw.name,
            short_name,
            tla: raw.tla.filter(|t| !t.is_empty()),
            aliases: Vec::new(),
        }
    }
}

impl RawMatch {
    /// Fixtures without both team ids cannot be attributed and are dropped.
    fn into_record(self) -> Option<MatchRecord> {
        Some(MatchRecord {
            id: self.id,
            date: self.utc_date,
            home_team_id: self.home_team.id?,
            away_team_id: self.away_team.id?,
            home_score: self.score.full_time.home,
            away_score: self.score.full_time.away,
            status: self.status,
        })
    }
}
