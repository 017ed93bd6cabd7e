//! Match statistics aggregation
//!
//! Folds a team's matches into result, goal and market counters.

use super::ratio::Ratio;
use crate::{MatchRecord, Outcome};
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Aggregated statistics for a group of matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    /// Matches played
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    /// 3 per win, 1 per draw
    pub form_points: u32,
    /// Goals scored
    pub goals_for: u32,
    /// Goals conceded
    pub goals_against: u32,
    /// Matches with more than two goals in total
    pub over_threshold_count: u32,
    /// Matches where both sides scored
    pub both_scored_count: u32,
}

impl MatchStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold matches into statistics from `team`'s point of view.
    ///
    /// Matches the team did not play in are skipped, so `played` equals the
    /// number of input records only when the input is already filtered to
    /// the team (as `last_n_matches` does).
    pub fn from_matches<'a, I>(matches: I, team: &str) -> Self
    where
        I: IntoIterator<Item = &'a MatchRecord>,
    {
        matches.into_iter().fold(Self::new(), |mut stats, record| {
            stats.update(record, team);
            stats
        })
    }

    /// Update statistics with a match result; no-op if `team` did not play
    pub fn update(&mut self, record: &MatchRecord, team: &str) {
        let (Some(scored), Some(conceded), Some(outcome)) = (
            record.goals_for(team),
            record.goals_against(team),
            record.outcome(team),
        ) else {
            return;
        };

        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;

        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
        }
        self.form_points += outcome.points();

        if record.is_over() {
            self.over_threshold_count += 1;
        }
        if record.both_scored() {
            self.both_scored_count += 1;
        }
    }

    /// Goals scored per match
    pub fn goals_for_rate(&self) -> Ratio {
        Ratio::new(self.goals_for, self.played)
    }

    /// Goals conceded per match
    pub fn goals_against_rate(&self) -> Ratio {
        Ratio::new(self.goals_against, self.played)
    }

    /// Share of matches with more than two goals
    pub fn over_rate(&self) -> Ratio {
        Ratio::new(self.over_threshold_count, self.played)
    }

    /// Share of matches where both sides scored
    pub fn both_scored_rate(&self) -> Ratio {
        Ratio::new(self.both_scored_count, self.played)
    }

    /// Average goals scored per match
    pub fn goals_for_avg(&self) -> f64 {
        self.goals_for_rate().value()
    }

    /// Average goals conceded per match
    pub fn goals_against_avg(&self) -> f64 {
        self.goals_against_rate().value()
    }

    /// Over 2.5 percentage (0-100)
    pub fn over_pct(&self) -> f64 {
        self.over_rate().as_percent()
    }

    /// Both-teams-scored percentage (0-100)
    pub fn both_scored_pct(&self) -> f64 {
        self.both_scored_rate().as_percent()
    }

    pub fn is_empty(&self) -> bool {
        self.played == 0
    }
}

impl Add for MatchStats {
    type Output = MatchStats;

    fn add(self, rhs: MatchStats) -> MatchStats {
        MatchStats {
            played: self.played + rhs.played,
            wins: self.wins + rhs.wins,
            draws: self.draws + rhs.draws,
            losses: self.losses + rhs.losses,
            form_points: self.form_points + rhs.form_points,
            goals_for: self.goals_for + rhs.goals_for,
            goals_against: self.goals_against + rhs.goals_against,
            over_threshold_count: self.over_threshold_count + rhs.over_threshold_count,
            both_scored_count: self.both_scored_count + rhs.both_scored_count,
        }
    }
}
