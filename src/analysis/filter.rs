//! Recent-match window selection

use crate::MatchRecord;

/// The `n` most recent matches involving `team`.
///
/// `records` must be sorted newest-first; the result keeps that order. Asking
/// for more matches than exist returns the whole history.
pub fn last_n_matches(records: &[MatchRecord], team: &str, n: usize) -> Vec<MatchRecord> {
    records
        .iter()
        .filter(|m| m.involves(team))
        .take(n)
        .cloned()
        .collect()
}

/// Sort a dataset newest-first, keeping the input order for equal dates
pub fn sort_newest_first(records: &mut [MatchRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_match(day: u32, home: &str, away: &str) -> MatchRecord {
        MatchRecord {
            date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_goals: 1,
            away_goals: 1,
        }
    }

    fn dataset() -> Vec<MatchRecord> {
        vec![
            make_match(20, "A", "B"),
            make_match(18, "C", "D"),
            make_match(15, "B", "C"),
            make_match(12, "D", "A"),
            make_match(9, "A", "C"),
        ]
    }

    #[test]
    fn test_takes_most_recent_in_order() {
        let recent = last_n_matches(&dataset(), "A", 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].date.format("%d").to_string(), "20");
        assert_eq!(recent[1].date.format("%d").to_string(), "12");
    }

    #[test]
    fn test_window_larger_than_history() {
        let recent = last_n_matches(&dataset(), "A", 50);
        assert_eq!(recent.len(), 3);
        assert!(recent.iter().all(|m| m.involves("A")));
    }

    #[test]
    fn test_unknown_team_or_zero_window() {
        assert!(last_n_matches(&dataset(), "Z", 10).is_empty());
        assert!(last_n_matches(&dataset(), "A", 0).is_empty());
    }

    #[test]
    fn test_sort_newest_first() {
        let mut data = dataset();
        data.reverse();
        sort_newest_first(&mut data);
        let days: Vec<_> = data.iter().map(|m| m.date.format("%d").to_string()).collect();
        assert_eq!(days, vec!["20", "18", "15", "12", "09"]);
    }
}
