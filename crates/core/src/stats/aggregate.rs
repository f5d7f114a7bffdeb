use crate::model::{MatchRecord, ResultSummary, TeamId};

/// Fold matches into a win/draw/loss and goals summary for `team_id`.
///
/// Matches the team did not play, matches that are not completed, and matches
/// without a full-time score are skipped. The result does not depend on the
/// order of `matches`.
pub fn aggregate(team_id: TeamId, matches: &[MatchRecord]) -> ResultSummary {
    matches
        .iter()
        .filter(|m| m.status.is_completed())
        .filter_map(|m| m.goals_for_against(team_id))
        .fold(ResultSummary::empty(team_id), |mut summary, (scored, conceded)| {
            match scored.cmp(&conceded) {
                std::cmp::Ordering::Greater => summary.wins += 1,
                std::cmp::Ordering::Equal => summary.draws += 1,
                std::cmp::Ordering::Less => summary.losses += 1,
            }
            summary.matches_played += 1;
            summary.goals_for += scored;
            summary.goals_against += conceded;
            summary
        })
}
