use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{MatchRecord, MatchStatus, ResultSummary, Team, TeamId};

const UNKNOWN_TEAM: &str = "Unknown Team";

/// One match with team names resolved against a team snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchRow {
    pub match_id: u64,
    /// Calendar date (UTC), `YYYY-MM-DD`.
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub status: MatchStatus,
}

impl MatchRow {
    /// Ids missing from `teams` are written as "Unknown Team".
    pub fn from_records(matches: &[MatchRecord], teams: &[Team]) -> Vec<Self> {
        let names: HashMap<TeamId, &str> =
            teams.iter().map(|t| (t.id, t.name.as_str())).collect();
        let name_of = |id: TeamId| names.get(&id).copied().unwrap_or(UNKNOWN_TEAM).to_string();

        matches
            .iter()
            .map(|m| Self {
                match_id: m.id,
                date: m.day().format("%Y-%m-%d").to_string(),
                home_team: name_of(m.home_team_id),
                away_team: name_of(m.away_team_id),
                home_score: m.home_score,
                away_score: m.away_score,
                status: m.status,
            })
            .collect()
    }
}

/// A result summary with the team's name and derived totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsRow {
    pub team_id: TeamId,
    pub team_name: String,
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl StatsRow {
    pub fn new(team: &Team, summary: &ResultSummary) -> Self {
        Self {
            team_id: team.id,
            team_name: team.name.clone(),
            matches_played: summary.matches_played,
            wins: summary.wins,
            draws: summary.draws,
            losses: summary.losses,
            goals_for: summary.goals_for,
            goals_against: summary.goals_against,
            goal_difference: summary.goal_difference(),
            points: summary.points(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamRow {
    pub id: TeamId,
    pub name: String,
    pub short_name: String,
    pub tla: Option<String>,
}

impl From<&Team> for TeamRow {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id,
            name: team.name.clone(),
            short_name: team.short_name.clone(),
            tla: team.tla.clone(),
        }
    }
}
