//! Team form analysis
//!
//! Name resolution, recent-match selection and statistics aggregation.

pub mod filter;
pub mod ratio;
pub mod resolve;
pub mod stats;

pub use filter::last_n_matches;
pub use ratio::Ratio;
pub use resolve::{normalize_team_name, resolve_team_name, NameMatch};
pub use stats::MatchStats;

use crate::{FootyError, MatchRecord, Result};
use serde::Serialize;

/// Statistics for one team over its recent matches
#[derive(Debug, Clone, Serialize)]
pub struct TeamAnalysis {
    /// Team name as stored in the data, not necessarily as queried
    pub team_name: String,
    pub total: MatchStats,
    pub home: MatchStats,
    pub away: MatchStats,
    /// Analyzed matches, newest first
    pub matches: Vec<MatchRecord>,
}

impl TeamAnalysis {
    /// Build the analysis for an already resolved team from its match window
    pub fn from_matches(team_name: String, matches: Vec<MatchRecord>) -> Self {
        let total = MatchStats::from_matches(&matches, &team_name);
        let home = MatchStats::from_matches(
            matches.iter().filter(|m| m.home_team == team_name),
            &team_name,
        );
        let away = MatchStats::from_matches(
            matches.iter().filter(|m| m.away_team == team_name),
            &team_name,
        );

        TeamAnalysis {
            team_name,
            total,
            home,
            away,
            matches,
        }
    }

    /// Result letters for the analyzed matches, newest first (e.g. "WDLWW")
    pub fn form_guide(&self) -> String {
        self.matches
            .iter()
            .filter_map(|m| m.outcome(&self.team_name))
            .map(|o| o.code())
            .collect()
    }
}

/// Analyze a team's last `last_n` matches in a newest-first dataset.
///
/// Fails with `TeamNotFound` when the name cannot be resolved and with
/// `EmptyDataset` when there is nothing to analyze.
pub fn analyze_team(
    records: &[MatchRecord],
    team: &str,
    last_n: usize,
    mode: NameMatch,
) -> Result<TeamAnalysis> {
    if records.is_empty() {
        return Err(FootyError::EmptyDataset);
    }

    let resolved = resolve_team_name(records, team, mode)
        .ok_or_else(|| FootyError::TeamNotFound(team.to_string()))?;

    let window = last_n_matches(records, &resolved, last_n);
    if window.is_empty() {
        return Err(FootyError::EmptyDataset);
    }

    log::debug!(
        "Analyzing {} over {} of last {} matches",
        resolved,
        window.len(),
        last_n
    );

    Ok(TeamAnalysis::from_matches(resolved, window))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_match(day: u32, home: &str, away: &str, hg: u32, ag: u32) -> MatchRecord {
        MatchRecord {
            date: NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_goals: hg,
            away_goals: ag,
        }
    }

    fn dataset() -> Vec<MatchRecord> {
        vec![
            make_match(28, "Kasımpaşa", "Sivasspor", 2, 2),
            make_match(21, "Göztepe", "Kasımpaşa", 0, 1),
            make_match(14, "Kasımpaşa", "Konyaspor", 3, 1),
            make_match(7, "Alanyaspor", "Sivasspor", 1, 0),
            make_match(1, "Rizespor", "Kasımpaşa", 2, 0),
        ]
    }

    #[test]
    fn test_analyze_with_ascii_query() {
        let analysis = analyze_team(&dataset(), "kasimpasa", 10, NameMatch::Normalized).unwrap();

        assert_eq!(analysis.team_name, "Kasımpaşa");
        assert_eq!(analysis.total.played, 4);
        assert_eq!(analysis.home.played, 2);
        assert_eq!(analysis.away.played, 2);
        assert_eq!(analysis.home + analysis.away, analysis.total);
        assert_eq!(analysis.form_guide(), "DWWL");
    }

    #[test]
    fn test_window_limits_matches() {
        let analysis = analyze_team(&dataset(), "Kasımpaşa", 2, NameMatch::Exact).unwrap();

        assert_eq!(analysis.total.played, 2);
        assert_eq!(analysis.matches.len(), 2);
        assert_eq!(analysis.total.form_points, 4);
        assert_eq!(analysis.away.wins, 1);
    }

    #[test]
    fn test_team_not_found() {
        let err = analyze_team(&dataset(), "Trabzonspor", 10, NameMatch::Normalized).unwrap_err();
        assert!(matches!(err, FootyError::TeamNotFound(name) if name == "Trabzonspor"));
    }

    #[test]
    fn test_empty_dataset() {
        let err = analyze_team(&[], "Kasımpaşa", 10, NameMatch::Normalized).unwrap_err();
        assert!(matches!(err, FootyError::EmptyDataset));

        let err = analyze_team(&dataset(), "Kasımpaşa", 0, NameMatch::Normalized).unwrap_err();
        assert!(matches!(err, FootyError::EmptyDataset));
    }
}
