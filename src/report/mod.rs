//! Report rendering
//!
//! Terminal tables and standalone HTML pages built from analysis results.

pub mod html;
pub mod json;
pub mod terminal;

pub use html::{comparison_report_html, team_report_html, write_report};
pub use json::comparison_json;
pub use terminal::{
    format_comparison, format_match_comment, format_prediction_summary, format_team_report,
};

use crate::analysis::Ratio;
use crate::MatchStats;

/// Percentage with one decimal, "0.0%" for an empty sample
pub fn format_ratio(ratio: Ratio) -> String {
    format!("{:.1}%", ratio.as_percent())
}

/// Per-match average with two decimals
pub fn format_avg(ratio: Ratio) -> String {
    format!("{:.2}", ratio.value())
}

/// Display cells for one stats row: P W D L Pts GF/m GA/m Over2.5 BTTS
pub(crate) fn stats_cells(stats: &MatchStats) -> [String; 9] {
    [
        stats.played.to_string(),
        stats.wins.to_string(),
        stats.draws.to_string(),
        stats.losses.to_string(),
        stats.form_points.to_string(),
        format_avg(stats.goals_for_rate()),
        format_avg(stats.goals_against_rate()),
        format_ratio(stats.over_rate()),
        format_ratio(stats.both_scored_rate()),
    ]
}

pub(crate) const STATS_HEADERS: [&str; 9] =
    ["P", "W", "D", "L", "Pts", "GF/m", "GA/m", "Over 2.5", "BTTS"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_ratio(Ratio::new(0, 0)), "0.0%");
        assert_eq!(format_ratio(Ratio::new(2, 3)), "66.7%");
        assert_eq!(format_avg(Ratio::new(0, 0)), "0.00");
        assert_eq!(format_avg(Ratio::new(7, 4)), "1.75");
    }

    #[test]
    fn test_stats_cells() {
        let stats = MatchStats {
            played: 4,
            wins: 2,
            draws: 1,
            losses: 1,
            form_points: 7,
            goals_for: 7,
            goals_against: 3,
            over_threshold_count: 2,
            both_scored_count: 1,
        };
        assert_eq!(
            stats_cells(&stats),
            ["4", "2", "1", "1", "7", "1.75", "0.75", "50.0%", "25.0%"]
        );
    }
}
