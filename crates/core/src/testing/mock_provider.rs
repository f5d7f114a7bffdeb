//! Mock match provider for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::{DateRange, MatchRecord, Team};
use crate::provider::{MatchProvider, ProviderError};

/// A recorded provider call for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedProviderCall {
    FetchTeams,
    FetchMatches { range: DateRange },
}

/// Mock implementation of the MatchProvider trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable teams and matches
/// - Track calls for assertions
/// - Simulate failures
///
/// Matches are returned unfiltered; date selection is the engine's job.
#[derive(Debug)]
pub struct MockProvider {
    teams: Arc<RwLock<Vec<Team>>>,
    matches: Arc<RwLock<Vec<MatchRecord>>>,
    /// Recorded calls.
    calls: Arc<RwLock<Vec<RecordedProviderCall>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<ProviderError>>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Create a new empty mock provider.
    pub fn new() -> Self {
        Self {
            teams: Arc::new(RwLock::new(Vec::new())),
            matches: Arc::new(RwLock::new(Vec::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replace the team list.
    pub async fn set_teams(&self, teams: Vec<Team>) {
        *self.teams.write().await = teams;
    }

    /// Replace the match list.
    pub async fn set_matches(&self, matches: Vec<MatchRecord>) {
        *self.matches.write().await = matches;
    }

    /// Make the next call fail with the given error.
    pub async fn set_next_error(&self, error: ProviderError) {
        *self.next_error.write().await = Some(error);
    }

    // =========================================================================
    // Assertions
    // =========================================================================

    /// All calls made so far.
    pub async fn recorded_calls(&self) -> Vec<RecordedProviderCall> {
        self.calls.read().await.clone()
    }

    async fn record(&self, call: RecordedProviderCall) -> Result<(), ProviderError> {
        self.calls.write().await.push(call);
        match self.next_error.write().await.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MatchProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_teams(&self) -> Result<Vec<Team>, ProviderError> {
        self.record(RecordedProviderCall::FetchTeams).await?;
        Ok(self.teams.read().await.clone())
    }

    async fn fetch_matches(&self, range: &DateRange) -> Result<Vec<MatchRecord>, ProviderError> {
        self.record(RecordedProviderCall::FetchMatches { range: *range })
            .await?;
        Ok(self.matches.read().await.clone())
    }
}
