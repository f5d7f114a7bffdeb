use std::sync::Arc;

use footstats_core::{
    Config, DateRange, Exporter, MatchProvider, MatchRecord, ProviderError, SanitizedConfig, Team,
};

/// Teams and matches fetched together for one request.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub teams: Vec<Team>,
    pub matches: Vec<MatchRecord>,
}

/// Shared application state
pub struct AppState {
    config: Config,
    provider: Arc<dyn MatchProvider>,
    exporter: Exporter,
}

impl AppState {
    pub fn new(config: Config, provider: Arc<dyn MatchProvider>) -> Self {
        let exporter = Exporter::new(config.export.output_dir.clone());
        Self {
            config,
            provider,
            exporter,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn provider(&self) -> &dyn MatchProvider {
        self.provider.as_ref()
    }

    pub fn exporter(&self) -> &Exporter {
        &self.exporter
    }

    /// Fetch teams and the matches in `range` concurrently.
    pub async fn snapshot(&self, range: &DateRange) -> Result<Snapshot, ProviderError> {
        let (teams, matches) = futures::try_join!(
            self.provider.fetch_teams(),
            self.provider.fetch_matches(range)
        )?;
        Ok(Snapshot { teams, matches })
    }
}
