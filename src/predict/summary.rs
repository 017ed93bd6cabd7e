//! Rule-based prediction summary
//!
//! Qualitative market levels derived from two teams' recent statistics. No
//! model is involved; every level comes from a fixed threshold rule.

use super::comment::FORM_GAP;
use crate::analysis::{MatchStats, Ratio};
use crate::Level;
use serde::Serialize;
use std::fmt;

/// Sample size below which a summary is flagged as unreliable
pub const SMALL_SAMPLE: u32 = 5;

/// Markets covered by a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Market {
    BothTeamsScore,
    OverGoals,
    HighScoring,
    Outcome,
}

impl Market {
    pub fn label(&self) -> &'static str {
        match self {
            Market::BothTeamsScore => "BTTS",
            Market::OverGoals => "Over 2.5",
            Market::HighScoring => "High-scoring match",
            Market::Outcome => "1X2 lean",
        }
    }
}

/// Which side the result market leans to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Lean {
    Team(String),
    Balanced,
}

impl fmt::Display for Lean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lean::Team(name) => write!(f, "{}", name),
            Lean::Balanced => write!(f, "Balanced"),
        }
    }
}

/// Verdict for one market; `None` when there was not enough data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment<T> {
    pub verdict: Option<T>,
    pub justification: String,
}

impl<T: fmt::Display> Assessment<T> {
    fn new(verdict: T, justification: String) -> Self {
        Assessment {
            verdict: Some(verdict),
            justification,
        }
    }

    fn insufficient() -> Self {
        Assessment {
            verdict: None,
            justification: "Insufficient data".to_string(),
        }
    }

    /// Verdict text, "-" when unavailable
    pub fn verdict_label(&self) -> String {
        self.verdict
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionSummary {
    pub both_teams_score: Assessment<Level>,
    pub over_goals: Assessment<Level>,
    pub high_scoring: Assessment<Level>,
    pub outcome: Assessment<Lean>,
    /// Caveats about the data, absent when there are none
    pub risk_note: Option<String>,
}

impl PredictionSummary {
    fn insufficient() -> Self {
        PredictionSummary {
            both_teams_score: Assessment::insufficient(),
            over_goals: Assessment::insufficient(),
            high_scoring: Assessment::insufficient(),
            outcome: Assessment::insufficient(),
            risk_note: Some("Insufficient data.".to_string()),
        }
    }

    /// Markets in display order as (market, verdict, justification)
    pub fn markets(&self) -> [(Market, String, &str); 4] {
        [
            (
                Market::BothTeamsScore,
                self.both_teams_score.verdict_label(),
                self.both_teams_score.justification.as_str(),
            ),
            (
                Market::OverGoals,
                self.over_goals.verdict_label(),
                self.over_goals.justification.as_str(),
            ),
            (
                Market::HighScoring,
                self.high_scoring.verdict_label(),
                self.high_scoring.justification.as_str(),
            ),
            (
                Market::Outcome,
                self.outcome.verdict_label(),
                self.outcome.justification.as_str(),
            ),
        ]
    }

    pub fn is_available(&self) -> bool {
        self.outcome.verdict.is_some()
    }
}

/// Summarize the markets for team A against team B
pub fn predict_summary(
    a: &MatchStats,
    b: &MatchStats,
    name_a: &str,
    name_b: &str,
) -> PredictionSummary {
    if a.is_empty() || b.is_empty() {
        return PredictionSummary::insufficient();
    }

    PredictionSummary {
        both_teams_score: both_teams_score(a, b),
        over_goals: over_goals(a, b),
        high_scoring: high_scoring(a, b),
        outcome: outcome_lean(a, b, name_a, name_b),
        risk_note: risk_note(a, b),
    }
}

fn both_teams_score(a: &MatchStats, b: &MatchStats) -> Assessment<Level> {
    let (rate_a, rate_b) = (a.both_scored_rate(), b.both_scored_rate());
    let mean = rate_a.mean(rate_b);
    let high = Ratio::percent(60);

    if rate_a.at_least(high) && rate_b.at_least(high) {
        Assessment::new(
            Level::High,
            format!(
                "Both teams have a high BTTS rate ({:.0}%, {:.0}%)",
                rate_a.as_percent(),
                rate_b.as_percent()
            ),
        )
    } else if mean.at_least(Ratio::percent(45)) {
        Assessment::new(
            Level::Medium,
            format!("Average BTTS rate {:.0}%", mean.as_percent()),
        )
    } else {
        Assessment::new(
            Level::Low,
            format!(
                "Low BTTS tendency ({:.0}%, {:.0}%)",
                rate_a.as_percent(),
                rate_b.as_percent()
            ),
        )
    }
}

fn over_goals(a: &MatchStats, b: &MatchStats) -> Assessment<Level> {
    let mean = a.over_rate().mean(b.over_rate());
    let pct = mean.as_percent();

    if mean.at_least(Ratio::percent(55)) {
        Assessment::new(Level::High, format!("Average over 2.5 rate {:.0}%", pct))
    } else if mean.at_least(Ratio::percent(40)) {
        Assessment::new(Level::Medium, format!("Average over 2.5 rate {:.0}%", pct))
    } else {
        Assessment::new(Level::Low, format!("Few high-scoring matches ({:.0}%)", pct))
    }
}

fn high_scoring(a: &MatchStats, b: &MatchStats) -> Assessment<Level> {
    let combined = a.goals_for_rate().sum(b.goals_for_rate());
    let goals = combined.value();

    if combined.at_least(Ratio::tenths(28)) {
        Assessment::new(
            Level::High,
            format!("Around {:.1} goals per match expected", goals),
        )
    } else if combined.at_least(Ratio::tenths(22)) {
        Assessment::new(Level::Medium, format!("Combined scoring average {:.1}", goals))
    } else {
        Assessment::new(Level::Low, format!("Low scoring tendency ({:.1})", goals))
    }
}

fn outcome_lean(a: &MatchStats, b: &MatchStats, name_a: &str, name_b: &str) -> Assessment<Lean> {
    let gap = a.form_points as i64 - b.form_points as i64;
    let threshold = FORM_GAP as i64;

    if gap >= threshold {
        Assessment::new(
            Lean::Team(name_a.to_string()),
            format!("{} ahead by {} form points", name_a, gap),
        )
    } else if gap <= -threshold {
        Assessment::new(
            Lean::Team(name_b.to_string()),
            format!("{} ahead by {} form points", name_b, -gap),
        )
    } else {
        Assessment::new(
            Lean::Balanced,
            format!("Form points are close ({}-point gap)", gap.abs()),
        )
    }
}

fn risk_note(a: &MatchStats, b: &MatchStats) -> Option<String> {
    let mut risks = Vec::new();

    let leaky = Ratio::tenths(13);
    if a.goals_against_rate().at_least(leaky) && b.goals_against_rate().at_least(leaky) {
        risks.push("Fragile defenses");
    }
    if a.played < SMALL_SAMPLE || b.played < SMALL_SAMPLE {
        risks.push("Small sample size, limited data");
    }

    if risks.is_empty() {
        None
    } else {
        Some(risks.join(". "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(played: u32, form_points: u32, goals_for: u32, goals_against: u32) -> MatchStats {
        MatchStats {
            played,
            form_points,
            goals_for,
            goals_against,
            ..MatchStats::default()
        }
    }

    fn with_markets(mut s: MatchStats, over: u32, btts: u32) -> MatchStats {
        s.over_threshold_count = over;
        s.both_scored_count = btts;
        s
    }

    #[test]
    fn test_insufficient_data_placeholders() {
        let summary = predict_summary(&MatchStats::default(), &stats(10, 15, 12, 8), "A", "B");

        assert!(!summary.is_available());
        for (_, verdict, justification) in summary.markets() {
            assert_eq!(verdict, "-");
            assert_eq!(justification, "Insufficient data");
        }
        assert_eq!(summary.risk_note.as_deref(), Some("Insufficient data."));
    }

    #[test]
    fn test_form_gap_of_six_leans_to_leader() {
        let summary = predict_summary(&stats(10, 18, 10, 10), &stats(10, 12, 10, 10), "Ajax", "PSV");
        assert_eq!(summary.outcome.verdict, Some(Lean::Team("Ajax".to_string())));
        assert_eq!(summary.outcome.justification, "Ajax ahead by 6 form points");

        let summary = predict_summary(&stats(10, 12, 10, 10), &stats(10, 18, 10, 10), "Ajax", "PSV");
        assert_eq!(summary.outcome.verdict, Some(Lean::Team("PSV".to_string())));
    }

    #[test]
    fn test_close_form_is_balanced() {
        let summary = predict_summary(&stats(10, 17, 10, 10), &stats(10, 12, 10, 10), "A", "B");
        assert_eq!(summary.outcome.verdict, Some(Lean::Balanced));
        assert_eq!(summary.outcome.justification, "Form points are close (5-point gap)");
    }

    #[test]
    fn test_btts_levels() {
        let high = predict_summary(
            &with_markets(stats(10, 15, 10, 10), 0, 6),
            &with_markets(stats(10, 15, 10, 10), 0, 7),
            "A",
            "B",
        );
        assert_eq!(high.both_teams_score.verdict, Some(Level::High));
        assert_eq!(
            high.both_teams_score.justification,
            "Both teams have a high BTTS rate (60%, 70%)"
        );

        // 80% and 10% average exactly 45%
        let medium = predict_summary(
            &with_markets(stats(10, 15, 10, 10), 0, 8),
            &with_markets(stats(10, 15, 10, 10), 0, 1),
            "A",
            "B",
        );
        assert_eq!(medium.both_teams_score.verdict, Some(Level::Medium));

        let low = predict_summary(
            &with_markets(stats(10, 15, 10, 10), 0, 4),
            &with_markets(stats(10, 15, 10, 10), 0, 4),
            "A",
            "B",
        );
        assert_eq!(low.both_teams_score.verdict, Some(Level::Low));
    }

    #[test]
    fn test_over_levels() {
        let level = |over_a, over_b| {
            predict_summary(
                &with_markets(stats(10, 15, 10, 10), over_a, 0),
                &with_markets(stats(10, 15, 10, 10), over_b, 0),
                "A",
                "B",
            )
            .over_goals
            .verdict
        };
        assert_eq!(level(6, 5), Some(Level::High));
        assert_eq!(level(4, 4), Some(Level::Medium));
        assert_eq!(level(3, 4), Some(Level::Low));
    }

    #[test]
    fn test_high_scoring_levels() {
        // 1.4 + 1.4 = 2.8
        let high = predict_summary(&stats(10, 15, 14, 10), &stats(5, 7, 7, 5), "A", "B");
        assert_eq!(high.high_scoring.verdict, Some(Level::High));
        assert_eq!(high.high_scoring.justification, "Around 2.8 goals per match expected");

        // 1.1 + 1.1 = 2.2
        let medium = predict_summary(&stats(10, 15, 11, 10), &stats(10, 15, 11, 10), "A", "B");
        assert_eq!(medium.high_scoring.verdict, Some(Level::Medium));

        let low = predict_summary(&stats(10, 15, 10, 10), &stats(10, 15, 11, 10), "A", "B");
        assert_eq!(low.high_scoring.verdict, Some(Level::Low));
    }

    #[test]
    fn test_small_sample_risk() {
        let summary = predict_summary(&stats(4, 6, 4, 2), &stats(10, 15, 10, 5), "A", "B");
        assert_eq!(
            summary.risk_note.as_deref(),
            Some("Small sample size, limited data")
        );
    }

    #[test]
    fn test_both_risks_joined() {
        let summary = predict_summary(&stats(4, 3, 4, 6), &stats(10, 9, 10, 13), "A", "B");
        assert_eq!(
            summary.risk_note.as_deref(),
            Some("Fragile defenses. Small sample size, limited data")
        );
    }

    #[test]
    fn test_no_risk_note() {
        let summary = predict_summary(&stats(10, 15, 10, 12), &stats(10, 15, 10, 13), "A", "B");
        assert_eq!(summary.risk_note, None);
    }
}
