//! Upstream data provider integration.
//!
//! The engine never fetches anything itself. Callers use a [`MatchProvider`]
//! to take a snapshot of teams and match records, then pass that snapshot
//! into the engine functions.

mod football_data;

pub use football_data::FootballDataClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{DateRange, MatchRecord, Team};

/// Errors that can occur when talking to the data provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Provider rejected the API token.
    #[error("Provider rejected the API token")]
    Unauthorized,

    /// Provider rate limit hit.
    #[error("Provider rate limit exceeded, please wait before retrying")]
    RateLimited,

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client not configured (missing API key, etc.).
    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Source of team and match snapshots for one competition.
#[async_trait]
pub trait MatchProvider: Send + Sync {
    /// Name of this provider for logging.
    fn name(&self) -> &str;

    /// All teams in the configured competition.
    async fn fetch_teams(&self) -> Result<Vec<Team>, ProviderError>;

    /// Matches of the configured competition within `range`, in the
    /// provider's (chronological) order.
    async fn fetch_matches(&self, range: &DateRange) -> Result<Vec<MatchRecord>, ProviderError>;
}
