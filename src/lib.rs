//! Football form guide
//!
//! Last-N match statistics for football teams, rule-based market tendencies
//! and terminal/HTML reports. Match data comes from a CSV file or API-Football.

pub mod analysis;
pub mod data;
pub mod predict;
pub mod report;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use analysis::{analyze_team, MatchStats, NameMatch, TeamAnalysis};
pub use predict::{match_comment, predict_summary, PredictionSummary};

/// Numeric team identifier used by the remote data provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub i64);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a match from one team's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Single-letter form guide code
    pub fn code(&self) -> char {
        match self {
            Outcome::Win => 'W',
            Outcome::Draw => 'D',
            Outcome::Loss => 'L',
        }
    }

    /// League points awarded for this outcome (3/1/0)
    pub fn points(&self) -> u32 {
        match self {
            Outcome::Win => 3,
            Outcome::Draw => 1,
            Outcome::Loss => 0,
        }
    }
}

/// A single completed match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
}

impl MatchRecord {
    /// Combined goals above this count make an "over" match (over 2.5)
    pub const OVER_THRESHOLD: u32 = 2;

    /// Check if a team was playing at home
    pub fn is_home(&self, team: &str) -> Option<bool> {
        if team == self.home_team {
            Some(true)
        } else if team == self.away_team {
            Some(false)
        } else {
            None
        }
    }

    /// Check if the team took part in this match
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }

    /// Get the opponent for a given team
    pub fn opponent(&self, team: &str) -> Option<&str> {
        self.is_home(team).map(|home| {
            if home {
                self.away_team.as_str()
            } else {
                self.home_team.as_str()
            }
        })
    }

    /// Goals scored by a specific team
    pub fn goals_for(&self, team: &str) -> Option<u32> {
        self.is_home(team)
            .map(|home| if home { self.home_goals } else { self.away_goals })
    }

    /// Goals conceded by a specific team
    pub fn goals_against(&self, team: &str) -> Option<u32> {
        self.is_home(team)
            .map(|home| if home { self.away_goals } else { self.home_goals })
    }

    /// Win, draw or loss for the given team
    pub fn outcome(&self, team: &str) -> Option<Outcome> {
        let scored = self.goals_for(team)?;
        let conceded = self.goals_against(team)?;
        Some(match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }

    pub fn total_goals(&self) -> u32 {
        self.home_goals + self.away_goals
    }

    /// More than two goals in the match
    pub fn is_over(&self) -> bool {
        self.total_goals() > Self::OVER_THRESHOLD
    }

    /// Both sides scored at least once
    pub fn both_scored(&self) -> bool {
        self.home_goals > 0 && self.away_goals > 0
    }
}

/// Qualitative level for a market assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    High,
    Medium,
    Low,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::High => write!(f, "High"),
            Level::Medium => write!(f, "Medium"),
            Level::Low => write!(f, "Low"),
        }
    }
}

/// Application-wide errors
#[derive(Debug, Error)]
pub enum FootyError {
    #[error("Team not found in data: {0}")]
    TeamNotFound(String),

    #[error("No matches available for analysis")]
    EmptyDataset,

    #[error("Data source not found: {0}")]
    SourceNotFound(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("API server error (HTTP {0})")]
    Server(u16),

    #[error("API rate limit exceeded, wait a few minutes and try again")]
    RateLimited,

    #[error("No API key configured - set API_FOOTBALL_KEY in the environment or .env")]
    MissingApiKey,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FootyError {
    /// Whether retrying the same request may succeed
    pub fn is_transient(&self) -> bool {
        match self {
            FootyError::Http(e) => e.is_timeout() || e.is_connect(),
            FootyError::Server(_) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, FootyError>;

/// Application configuration loaded from footy.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub analysis: AnalysisConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub csv_path: String,
    pub output_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of most recent matches to analyze
    pub last_n: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub cache_ttl_secs: u64,
    pub max_attempts: u32,
    pub default_season: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: DataConfig {
                csv_path: "sample_matches.csv".to_string(),
                output_path: "report.html".to_string(),
            },
            analysis: AnalysisConfig { last_n: 10 },
            api: ApiConfig {
                base_url: "https://v3.football.api-sports.io".to_string(),
                timeout_secs: 15,
                cache_ttl_secs: 60,
                max_attempts: 3,
                default_season: 2025,
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FootyError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        toml::from_str(&content)
            .map_err(|e| FootyError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FootyError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
