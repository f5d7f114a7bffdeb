use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{H2HSummary, Team, TeamId};
use crate::resolver::MatchKind;

/// One meeting between the two compared teams.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meeting {
    pub match_id: u64,
    pub date: DateTime<Utc>,
    pub home_team_id: TeamId,
    pub home_team_name: String,
    pub away_team_id: TeamId,
    pub away_team_name: String,
    pub home_score: u32,
    pub away_score: u32,
}

impl Meeting {
    /// "Real Madrid CF 2 - 1 FC Barcelona"
    pub fn score_line(&self) -> String {
        format!(
            "{} {} - {} {}",
            self.home_team_name, self.home_score, self.away_score, self.away_team_name
        )
    }
}

/// Full head-to-head comparison: resolved teams, totals and meeting history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct H2HReport {
    pub team_a: Team,
    pub team_b: Team,
    /// Resolver pass that found `team_a`.
    pub team_a_kind: MatchKind,
    pub team_b_kind: MatchKind,
    pub summary: H2HSummary,
    /// Meetings in input order.
    pub meetings: Vec<Meeting>,
}

impl H2HReport {
    /// "Real Madrid CF vs FC Barcelona"
    pub fn title(&self) -> String {
        format!("{} vs {}", self.team_a.name, self.team_b.name)
    }
}
