//! Testing utilities: a mock data provider and match/team fixtures.
//!
//! # Example
//!
//! ```rust,ignore
//! use footstats_core::testing::{fixtures, MockProvider};
//!
//! let provider = MockProvider::new();
//! provider.set_teams(fixtures::la_liga_teams()).await;
//! provider
//!     .set_matches(vec![fixtures::finished_match(1, "2024-10-26", 86, 81, 0, 4)])
//!     .await;
//! ```

mod mock_provider;

pub use mock_provider::{MockProvider, RecordedProviderCall};

/// Test fixtures and helper functions.
pub mod fixtures {
    use chrono::{DateTime, NaiveDate, Utc};

    use crate::model::{MatchRecord, MatchStatus, Team, TeamId};

    /// The 2025/26 La Liga clubs as football-data.org reports them.
    pub fn la_liga_teams() -> Vec<Team> {
        [
            (77, "Athletic Club", "Athletic", "ATH"),
            (78, "Club Atlético de Madrid", "Atleti", "ATL"),
            (79, "CA Osasuna", "Osasuna", "OSA"),
            (80, "RCD Espanyol de Barcelona", "Espanyol", "ESP"),
            (81, "FC Barcelona", "Barça", "FCB"),
            (82, "Getafe CF", "Getafe", "GET"),
            (86, "Real Madrid CF", "Real Madrid", "RMA"),
            (87, "Rayo Vallecano de Madrid", "Rayo Vallecano", "RAY"),
            (88, "Levante UD", "Levante", "LEV"),
            (89, "RCD Mallorca", "Mallorca", "MAL"),
            (90, "Real Betis Balompié", "Real Betis", "BET"),
            (92, "Real Sociedad de Fútbol", "Real Sociedad", "RSO"),
            (94, "Villarreal CF", "Villarreal", "VIL"),
            (95, "Valencia CF", "Valencia", "VAL"),
            (263, "Deportivo Alavés", "Alavés", "ALA"),
            (285, "Elche CF", "Elche", "ELC"),
            (298, "Girona FC", "Girona", "GIR"),
            (558, "RC Celta de Vigo", "Celta", "CEL"),
            (559, "Sevilla FC", "Sevilla FC", "SEV"),
            (1048, "Real Oviedo", "Real Oviedo", "OVI"),
        ]
        .into_iter()
        .map(|(id, name, short, tla)| Team::new(id, name, short).with_tla(tla))
        .collect()
    }

    /// Kick-off at 20:00 UTC on `date` ("YYYY-MM-DD").
    pub fn kickoff(date: &str) -> DateTime<Utc> {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .expect("fixture date must be YYYY-MM-DD")
            .and_hms_opt(20, 0, 0)
            .expect("valid time")
            .and_utc()
    }

    /// Create a finished match with a full-time score.
    pub fn finished_match(
        id: u64,
        date: &str,
        home_team_id: TeamId,
        away_team_id: TeamId,
        home_score: u32,
        away_score: u32,
    ) -> MatchRecord {
        MatchRecord {
            id,
            date: kickoff(date),
            home_team_id,
            away_team_id,
            home_score: Some(home_score),
            away_score: Some(away_score),
            status: MatchStatus::Finished,
        }
    }

    /// Create a scheduled match without a score.
    pub fn scheduled_match(
        id: u64,
        date: &str,
        home_team_id: TeamId,
        away_team_id: TeamId,
    ) -> MatchRecord {
        MatchRecord {
            id,
            date: kickoff(date),
            home_team_id,
            away_team_id,
            home_score: None,
            away_score: None,
            status: MatchStatus::Scheduled,
        }
    }
}
