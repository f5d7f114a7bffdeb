//! Head-to-head comparison between two teams.
//!
//! Both queries are resolved independently with the [`resolver`](crate::resolver);
//! the first failure is returned as-is. Only completed meetings with a known
//! score inside the optional date range are counted.

mod types;

pub use types::{H2HReport, Meeting};

use crate::model::{DateRange, EngineError, H2HSummary, MatchRecord, Team, TeamId};
use crate::resolver::resolve_match;
use crate::stats::is_countable;

/// Resolve both teams and count wins, draws and the last meeting date.
pub fn compare_head_to_head(
    query_a: &str,
    query_b: &str,
    teams: &[Team],
    matches: &[MatchRecord],
    range: Option<&DateRange>,
) -> Result<H2HSummary, EngineError> {
    head_to_head(query_a, query_b, teams, matches, range).map(|report| report.summary)
}

/// Like [`compare_head_to_head`], also returning the resolved teams and the
/// meeting history.
pub fn head_to_head(
    query_a: &str,
    query_b: &str,
    teams: &[Team],
    matches: &[MatchRecord],
    range: Option<&DateRange>,
) -> Result<H2HReport, EngineError> {
    let resolved_a = resolve_match(query_a, teams)?;
    let resolved_b = resolve_match(query_b, teams)?;
    let (team_a, team_b) = (resolved_a.team, resolved_b.team);

    if team_a.id == team_b.id {
        return Err(EngineError::SameTeam { team_id: team_a.id });
    }

    let range = range.copied().unwrap_or_default();
    let selected: Vec<MatchRecord> = matches
        .iter()
        .filter(|m| m.is_between(team_a.id, team_b.id) && is_countable(m, &range))
        .cloned()
        .collect();

    let summary = summarize(team_a.id, team_b.id, &selected);
    let meetings = selected
        .iter()
        .filter_map(|m| meeting(m, &team_a, &team_b))
        .collect();

    Ok(H2HReport {
        team_a,
        team_b,
        team_a_kind: resolved_a.kind,
        team_b_kind: resolved_b.kind,
        summary,
        meetings,
    })
}

/// Pairwise reducer over already-selected meetings.
///
/// Records that are not between `team_a_id` and `team_b_id`, that are not
/// completed, or that have no full-time score are ignored.
pub fn summarize(team_a_id: TeamId, team_b_id: TeamId, meetings: &[MatchRecord]) -> H2HSummary {
    meetings
        .iter()
        .filter(|m| m.is_between(team_a_id, team_b_id) && m.status.is_completed())
        .filter_map(|m| m.goals_for_against(team_a_id).map(|goals| (m, goals)))
        .fold(
            H2HSummary::empty(team_a_id, team_b_id),
            |mut summary, (m, (a_goals, b_goals))| {
                match a_goals.cmp(&b_goals) {
                    std::cmp::Ordering::Greater => summary.a_wins += 1,
                    std::cmp::Ordering::Less => summary.b_wins += 1,
                    std::cmp::Ordering::Equal => summary.draws += 1,
                }
                summary.matches_compared += 1;
                summary.last_meeting_date = summary.last_meeting_date.max(Some(m.date));
                summary
            },
        )
}

fn meeting(record: &MatchRecord, team_a: &Team, team_b: &Team) -> Option<Meeting> {
    let (home_score, away_score) = record.full_time()?;
    let name_of = |id: TeamId| {
        if id == team_a.id {
            team_a.name.clone()
        } else {
            team_b.name.clone()
        }
    };
    Some(Meeting {
        match_id: record.id,
        date: record.date,
        home_team_id: record.home_team_id,
        home_team_name: name_of(record.home_team_id),
        away_team_id: record.away_team_id,
        away_team_name: name_of(record.away_team_id),
        home_score,
        away_score,
    })
}
