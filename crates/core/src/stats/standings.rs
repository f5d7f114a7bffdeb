use serde::{Deserialize, Serialize};

use crate::model::{DateRange, MatchRecord, Team, TeamId};

use super::{aggregate, filter};

/// One row of a computed league table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandingRow {
    /// 1-based table position.
    pub position: u32,
    pub team_id: TeamId,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

/// Build a league table for `teams` from the completed matches in `range`.
///
/// Ordered by points, goal difference, goals scored, then name.
pub fn standings(teams: &[Team], matches: &[MatchRecord], range: &DateRange) -> Vec<StandingRow> {
    let mut rows: Vec<StandingRow> = teams
        .iter()
        .map(|team| {
            let summary = aggregate(team.id, &filter(team.id, matches, range));
            StandingRow {
                position: 0,
                team_id: team.id,
                team_name: team.name.clone(),
                played: summary.matches_played,
                won: summary.wins,
                drawn: summary.draws,
                lost: summary.losses,
                goals_for: summary.goals_for,
                goals_against: summary.goals_against,
                goal_difference: summary.goal_difference(),
                points: summary.points(),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
            .then_with(|| a.team_name.cmp(&b.team_name))
    });

    for (index, row) in rows.iter_mut().enumerate() {
        row.position = index as u32 + 1;
    }

    rows
}
