//! Value types shared by the resolver, filter, aggregator and H2H engine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::EngineError;

/// Provider-assigned team identifier.
pub type TeamId = u32;

/// A team as supplied by the data provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    /// Provider id (identity).
    pub id: TeamId,
    /// Canonical display name, e.g. "Real Madrid CF".
    pub name: String,
    /// Short display name, e.g. "Real Madrid".
    pub short_name: String,
    /// Three-letter abbreviation, e.g. "RMA".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tla: Option<String>,
    /// Extra names the team is known by.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            short_name: short_name.into(),
            tla: None,
            aliases: Vec::new(),
        }
    }

    pub fn with_tla(mut self, tla: impl Into<String>) -> Self {
        self.tla = Some(tla.into());
        self
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }
}

/// Match status, following the provider vocabulary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    Timed,
    InPlay,
    Paused,
    Finished,
    Suspended,
    Postponed,
    Cancelled,
    Awarded,
    #[serde(other)]
    Unknown,
}

impl MatchStatus {
    /// Whether the match has a final result.
    pub fn is_completed(&self) -> bool {
        matches!(self, MatchStatus::Finished | MatchStatus::Awarded)
    }
}

/// A single fixture or result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchRecord {
    pub id: u64,
    /// Kick-off time (UTC).
    pub date: DateTime<Utc>,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    /// Full-time home goals (`None` until played).
    #[serde(default)]
    pub home_score: Option<u32>,
    /// Full-time away goals (`None` until played).
    #[serde(default)]
    pub away_score: Option<u32>,
    pub status: MatchStatus,
}

impl MatchRecord {
    /// Full-time score as `(home, away)`, if both sides are known.
    pub fn full_time(&self) -> Option<(u32, u32)> {
        Some((self.home_score?, self.away_score?))
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// True when the two teams are exactly this match's pairing, in either order.
    pub fn is_between(&self, a: TeamId, b: TeamId) -> bool {
        (self.home_team_id == a && self.away_team_id == b)
            || (self.home_team_id == b && self.away_team_id == a)
    }

    /// Goals scored and conceded by `team_id`, or `None` if the team did not
    /// play or the score is unknown.
    pub fn goals_for_against(&self, team_id: TeamId) -> Option<(u32, u32)> {
        let (home, away) = self.full_time()?;
        if team_id == self.home_team_id {
            Some((home, away))
        } else if team_id == self.away_team_id {
            Some((away, home))
        } else {
            None
        }
    }

    /// The calendar day of kick-off (UTC).
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

/// Inclusive date window. A `None` bound is open.
///
/// Always satisfies `start <= end` when both bounds are set.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, EngineError> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(EngineError::InvalidDateRange { start: s, end: e });
            }
        }
        Ok(Self { start, end })
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Result<Self, EngineError> {
        Self::new(Some(start), Some(end))
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn since(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    pub fn until(end: NaiveDate) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start.is_none_or(|s| day >= s) && self.end.is_none_or(|e| day <= e)
    }
}

/// Win/draw/loss and goal totals for one team.
///
/// Invariant: `wins + draws + losses == matches_played`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultSummary {
    pub team_id: TeamId,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub matches_played: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl ResultSummary {
    pub fn empty(team_id: TeamId) -> Self {
        Self {
            team_id,
            wins: 0,
            draws: 0,
            losses: 0,
            matches_played: 0,
            goals_for: 0,
            goals_against: 0,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    /// League points at three for a win and one for a draw.
    pub fn points(&self) -> u32 {
        self.wins * 3 + self.draws
    }
}

/// Head-to-head record between two teams.
///
/// Invariant: `a_wins + b_wins + draws == matches_compared`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct H2HSummary {
    pub team_a_id: TeamId,
    pub team_b_id: TeamId,
    pub a_wins: u32,
    pub b_wins: u32,
    pub draws: u32,
    pub matches_compared: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_meeting_date: Option<DateTime<Utc>>,
}

impl H2HSummary {
    pub fn empty(team_a_id: TeamId, team_b_id: TeamId) -> Self {
        Self {
            team_a_id,
            team_b_id,
            a_wins: 0,
            b_wins: 0,
            draws: 0,
            matches_compared: 0,
            last_meeting_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(home: Option<u32>, away: Option<u32>) -> MatchRecord {
        MatchRecord {
            id: 1,
            date: Utc.with_ymd_and_hms(2024, 3, 10, 20, 0, 0).unwrap(),
            home_team_id: 86,
            away_team_id: 81,
            home_score: home,
            away_score: away,
            status: MatchStatus::Finished,
        }
    }

    #[test]
    fn test_date_range_rejects_inverted_bounds() {
        let err = DateRange::between(day(2024, 5, 2), day(2024, 5, 1)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidDateRange { .. }));
    }

    #[test]
    fn test_date_range_single_day_is_valid() {
        let range = DateRange::between(day(2024, 5, 1), day(2024, 5, 1)).unwrap();
        assert!(range.contains(day(2024, 5, 1)));
        assert!(!range.contains(day(2024, 5, 2)));
        assert!(!range.contains(day(2024, 4, 30)));
    }

    #[test]
    fn test_date_range_open_sides() {
        assert!(DateRange::unbounded().contains(day(1900, 1, 1)));
        assert!(DateRange::since(day(2024, 1, 1)).contains(day(2030, 1, 1)));
        assert!(!DateRange::since(day(2024, 1, 1)).contains(day(2023, 12, 31)));
        assert!(DateRange::until(day(2024, 1, 1)).contains(day(2024, 1, 1)));
        assert!(!DateRange::until(day(2024, 1, 1)).contains(day(2024, 1, 2)));
    }

    #[test]
    fn test_goals_for_against_by_role() {
        let m = record(Some(3), Some(1));
        assert_eq!(m.goals_for_against(86), Some((3, 1)));
        assert_eq!(m.goals_for_against(81), Some((1, 3)));
        assert_eq!(m.goals_for_against(95), None);
    }

    #[test]
    fn test_missing_score_has_no_full_time() {
        assert_eq!(record(Some(1), None).full_time(), None);
        assert_eq!(record(None, None).goals_for_against(86), None);
    }

    #[test]
    fn test_is_between_is_order_independent() {
        let m = record(Some(0), Some(0));
        assert!(m.is_between(86, 81));
        assert!(m.is_between(81, 86));
        assert!(!m.is_between(86, 95));
    }

    #[test]
    fn test_status_deserializes_provider_values() {
        let s: MatchStatus = serde_json::from_str("\"FINISHED\"").unwrap();
        assert_eq!(s, MatchStatus::Finished);
        let s: MatchStatus = serde_json::from_str("\"IN_PLAY\"").unwrap();
        assert_eq!(s, MatchStatus::InPlay);
        let s: MatchStatus = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(s, MatchStatus::Unknown);
        assert!(MatchStatus::Awarded.is_completed());
        assert!(!MatchStatus::Postponed.is_completed());
    }

    #[test]
    fn test_summary_points_and_goal_difference() {
        let summary = ResultSummary {
            team_id: 86,
            wins: 2,
            draws: 1,
            losses: 1,
            matches_played: 4,
            goals_for: 5,
            goals_against: 7,
        };
        assert_eq!(summary.points(), 7);
        assert_eq!(summary.goal_difference(), -2);
    }
}
