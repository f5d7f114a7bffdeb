use crate::model::{DateRange, MatchRecord, TeamId};

/// Completed matches involving `team_id` whose kick-off day falls in `range`.
///
/// Input order is preserved.
pub fn filter(team_id: TeamId, matches: &[MatchRecord], range: &DateRange) -> Vec<MatchRecord> {
    matches
        .iter()
        .filter(|m| m.involves(team_id) && is_countable(m, range))
        .cloned()
        .collect()
}

/// Completed and inside the window; shared by the H2H engine.
pub(crate) fn is_countable(record: &MatchRecord, range: &DateRange) -> bool {
    record.status.is_completed() && range.contains(record.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MatchStatus;
    use crate::testing::fixtures::{finished_match, scheduled_match};
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_keeps_home_and_away_matches() {
        let matches = vec![
            finished_match(1, "2024-01-10", 86, 81, 2, 1),
            finished_match(2, "2024-01-17", 95, 86, 0, 0),
            finished_match(3, "2024-01-24", 95, 81, 1, 3),
        ];
        let result = filter(86, &matches, &DateRange::unbounded());
        let ids: Vec<u64> = result.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_drops_unplayed_matches() {
        let matches = vec![
            finished_match(1, "2024-01-10", 86, 81, 2, 1),
            scheduled_match(2, "2024-06-01", 86, 95),
        ];
        let result = filter(86, &matches, &DateRange::unbounded());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].status, MatchStatus::Finished);
    }

    #[test]
    fn test_range_is_inclusive() {
        let matches = vec![
            finished_match(1, "2024-01-31", 86, 81, 2, 1),
            finished_match(2, "2024-02-01", 86, 95, 1, 1),
            finished_match(3, "2024-02-29", 82, 86, 0, 2),
            finished_match(4, "2024-03-01", 86, 94, 3, 0),
        ];
        let range = DateRange::between(day(2024, 2, 1), day(2024, 2, 29)).unwrap();
        let ids: Vec<u64> = filter(86, &matches, &range).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_preserves_input_order() {
        let matches = vec![
            finished_match(3, "2024-03-01", 86, 81, 1, 0),
            finished_match(1, "2024-01-01", 81, 86, 1, 0),
            finished_match(2, "2024-02-01", 86, 95, 1, 0),
        ];
        let ids: Vec<u64> = filter(86, &matches, &DateRange::unbounded())
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_empty_result_is_ok() {
        let matches = vec![finished_match(1, "2024-01-10", 95, 81, 2, 1)];
        assert!(filter(86, &matches, &DateRange::unbounded()).is_empty());
        assert!(filter(86, &[], &DateRange::unbounded()).is_empty());
    }
}
