//! Head-to-head form verdict

use crate::analysis::{MatchStats, Ratio, TeamAnalysis};
use std::cmp::Ordering;

/// Which team looks in better form, judged on four metrics.
///
/// Each of form points, goals per match, over 2.5 rate and BTTS rate gives a
/// point to the team that is strictly ahead on it.
pub fn form_verdict(a: &TeamAnalysis, b: &TeamAnalysis) -> String {
    let (ta, tb) = (&a.total, &b.total);
    if ta.is_empty() || tb.is_empty() {
        return super::comment::INSUFFICIENT_DATA.to_string();
    }

    let metrics: [fn(&MatchStats) -> Ratio; 4] = [
        |s: &MatchStats| Ratio::new(s.form_points, 1),
        MatchStats::goals_for_rate,
        MatchStats::over_rate,
        MatchStats::both_scored_rate,
    ];

    let (mut score_a, mut score_b) = (0u32, 0u32);
    for metric in metrics {
        match metric(ta).compare(&metric(tb)) {
            Ordering::Greater => score_a += 1,
            Ordering::Less => score_b += 1,
            Ordering::Equal => {}
        }
    }

    match score_a.cmp(&score_b) {
        Ordering::Greater => format!(
            "Based on the last {} matches, {} looks in better form.",
            ta.played, a.team_name
        ),
        Ordering::Less => format!(
            "Based on the last {} matches, {} looks in better form.",
            tb.played, b.team_name
        ),
        Ordering::Equal => {
            "Both teams are in similar form; a balanced match is likely.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(name: &str, total: MatchStats) -> TeamAnalysis {
        TeamAnalysis {
            team_name: name.to_string(),
            total,
            home: MatchStats::default(),
            away: MatchStats::default(),
            matches: Vec::new(),
        }
    }

    fn stats(form_points: u32, goals_for: u32, over: u32, btts: u32) -> MatchStats {
        MatchStats {
            played: 10,
            form_points,
            goals_for,
            over_threshold_count: over,
            both_scored_count: btts,
            ..MatchStats::default()
        }
    }

    #[test]
    fn test_better_team_named() {
        let a = analysis("Porto", stats(22, 20, 6, 5));
        let b = analysis("Braga", stats(15, 14, 4, 5));
        assert_eq!(
            form_verdict(&a, &b),
            "Based on the last 10 matches, Porto looks in better form."
        );
        assert_eq!(
            form_verdict(&b, &a),
            "Based on the last 10 matches, Porto looks in better form."
        );
    }

    #[test]
    fn test_split_metrics_are_balanced() {
        let a = analysis("Porto", stats(22, 20, 3, 3));
        let b = analysis("Braga", stats(15, 14, 6, 6));
        assert_eq!(
            form_verdict(&a, &b),
            "Both teams are in similar form; a balanced match is likely."
        );
    }

    #[test]
    fn test_missing_data() {
        let a = analysis("Porto", MatchStats::default());
        let b = analysis("Braga", stats(15, 14, 6, 6));
        assert_eq!(form_verdict(&a, &b), "Insufficient data.");
    }
}
