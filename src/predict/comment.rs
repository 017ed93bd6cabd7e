//! Short match comment from two teams' recent form

use crate::analysis::{MatchStats, Ratio};
use std::fmt;

/// Returned when either side has no matches to judge from
pub const INSUFFICIENT_DATA: &str = "Insufficient data.";
/// Returned when no tendency rule fires
pub const NO_CLEAR_TENDENCY: &str = "No clear tendency.";

/// A tendency shared by both teams' recent matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tendency {
    /// Both average at least 1.5 goals scored per match
    HighScoring,
    /// Both have both-teams-scored in at least 60% of matches
    BothTeamsScore,
    /// Form points differ by 6 or more
    FormAdvantage,
    /// Both have over 2.5 goals in at least 50% of matches
    OverGoals,
}

impl fmt::Display for Tendency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tendency::HighScoring => write!(f, "High-scoring tendency"),
            Tendency::BothTeamsScore => write!(f, "Both teams likely to score"),
            Tendency::FormAdvantage => write!(f, "The in-form team has the advantage"),
            Tendency::OverGoals => write!(f, "Tendency toward high combined goals"),
        }
    }
}

/// Form point gap treated as a real difference (two wins)
pub const FORM_GAP: u32 = 6;

/// Tendencies that hold for this pairing, in fixed rule order.
///
/// Both sides must have played at least one match.
pub fn tendencies(a: &MatchStats, b: &MatchStats) -> Vec<Tendency> {
    let both = |rate: fn(&MatchStats) -> Ratio, threshold: Ratio| {
        rate(a).at_least(threshold) && rate(b).at_least(threshold)
    };

    let mut found = Vec::new();
    if both(MatchStats::goals_for_rate, Ratio::tenths(15)) {
        found.push(Tendency::HighScoring);
    }
    if both(MatchStats::both_scored_rate, Ratio::percent(60)) {
        found.push(Tendency::BothTeamsScore);
    }
    if a.form_points.abs_diff(b.form_points) >= FORM_GAP {
        found.push(Tendency::FormAdvantage);
    }
    if both(MatchStats::over_rate, Ratio::percent(50)) {
        found.push(Tendency::OverGoals);
    }
    found
}

/// One-sentence comment on the likely character of the match
pub fn match_comment(a: &MatchStats, b: &MatchStats) -> String {
    if a.is_empty() || b.is_empty() {
        return INSUFFICIENT_DATA.to_string();
    }

    let found = tendencies(a, b);
    if found.is_empty() {
        return NO_CLEAR_TENDENCY.to_string();
    }

    let parts: Vec<String> = found.iter().map(|t| t.to_string()).collect();
    format!("{}.", parts.join(". "))
}
