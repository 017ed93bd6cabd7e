//! Remote fixture normalization
//!
//! Converts API-Football fixture payloads into `MatchRecord`s and works out
//! the team's display name.

use super::null_as_default;
use crate::analysis::filter::sort_newest_first;
use crate::{FootyError, MatchRecord, Result, TeamId};
use chrono::NaiveDate;
use serde::Deserialize;

/// A fixture as returned by the `fixtures` endpoint (only the fields we use)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Fixture {
    #[serde(deserialize_with = "null_as_default")]
    pub fixture: FixtureInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub teams: FixtureTeams,
    #[serde(deserialize_with = "null_as_default")]
    pub goals: Goals,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FixtureInfo {
    pub id: Option<i64>,
    /// ISO-8601 kick-off time, e.g. `2024-08-10T19:00:00+03:00`
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FixtureTeams {
    #[serde(deserialize_with = "null_as_default")]
    pub home: FixtureSide,
    #[serde(deserialize_with = "null_as_default")]
    pub away: FixtureSide,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FixtureSide {
    pub id: Option<TeamId>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Goals {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

/// Anything that can supply a team's completed fixtures
pub trait FixtureSource {
    /// Completed fixtures for a team in a league season, newest first, at most `last_n`
    fn team_fixtures(
        &self,
        team: TeamId,
        league_id: i64,
        season: u16,
        last_n: usize,
    ) -> Result<Vec<Fixture>>;

    /// Display name for a team id, if the provider knows it
    fn team_name(&self, team: TeamId) -> Result<Option<String>>;
}

/// Fetched matches plus the team name to analyze them under
#[derive(Debug, Clone)]
pub struct TeamFixtures {
    pub records: Vec<MatchRecord>,
    pub team_name: String,
}

/// Convert fixtures to match records, newest first.
///
/// Missing goals count as 0 and missing names become empty strings; a date
/// that cannot be parsed is an error.
pub fn fixtures_to_records(fixtures: &[Fixture]) -> Result<Vec<MatchRecord>> {
    let mut records = fixtures
        .iter()
        .map(|f| {
            let day = f.fixture.date.split('T').next().unwrap_or_default();
            let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| {
                FootyError::Parse(format!("malformed fixture date '{}'", f.fixture.date))
            })?;

            Ok(MatchRecord {
                date,
                home_team: f.teams.home.name.clone(),
                away_team: f.teams.away.name.clone(),
                home_goals: f.goals.home.unwrap_or(0),
                away_goals: f.goals.away.unwrap_or(0),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    sort_newest_first(&mut records);
    Ok(records)
}

/// Name of `team` as it appears in the fixtures (first match by id)
pub fn name_from_fixtures(fixtures: &[Fixture], team: TeamId) -> Option<String> {
    fixtures.iter().find_map(|f| {
        if f.teams.home.id == Some(team) {
            Some(f.teams.home.name.clone())
        } else if f.teams.away.id == Some(team) {
            Some(f.teams.away.name.clone())
        } else {
            None
        }
    })
}

/// Fetch a team's last `last_n` completed matches and its display name
pub fn fetch_team_matches<S: FixtureSource + ?Sized>(
    source: &S,
    team: TeamId,
    league_id: i64,
    season: u16,
    last_n: usize,
) -> Result<TeamFixtures> {
    let fixtures = source.team_fixtures(team, league_id, season, last_n)?;
    log::info!(
        "Fetched {} fixtures for team {} (league {}, season {})",
        fixtures.len(),
        team,
        league_id,
        season
    );

    let team_name = match source.team_name(team)? {
        Some(name) if !name.is_empty() => name,
        _ => name_from_fixtures(&fixtures, team).unwrap_or_default(),
    };

    Ok(TeamFixtures {
        records: fixtures_to_records(&fixtures)?,
        team_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> Vec<Fixture> {
        serde_json::from_value(json!([
            {
                "fixture": {"id": 1, "date": "2024-08-10T19:00:00+03:00"},
                "teams": {"home": {"id": 549, "name": "Beşiktaş"}, "away": {"id": 607, "name": "Samsunspor"}},
                "goals": {"home": 2, "away": 1}
            },
            {
                "fixture": {"id": 2, "date": "2024-08-24T21:45:00+03:00"},
                "teams": {"home": {"id": 1005, "name": "Antalyaspor"}, "away": {"id": 549, "name": "Beşiktaş"}},
                "goals": {"home": null, "away": 3}
            }
        ]))
        .unwrap()
    }

    struct StubSource {
        fixtures: Vec<Fixture>,
        name: Option<String>,
    }

    impl FixtureSource for StubSource {
        fn team_fixtures(&self, _: TeamId, _: i64, _: u16, last_n: usize) -> Result<Vec<Fixture>> {
            Ok(self.fixtures.iter().take(last_n).cloned().collect())
        }

        fn team_name(&self, _: TeamId) -> Result<Option<String>> {
            Ok(self.name.clone())
        }
    }

    #[test]
    fn test_fixtures_to_records() {
        let records = fixtures_to_records(&payload()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 8, 24).unwrap());
        assert_eq!(records[0].home_goals, 0);
        assert_eq!(records[0].away_goals, 3);
        assert_eq!(records[1].home_team, "Beşiktaş");
    }

    #[test]
    fn test_null_objects_read_as_missing() {
        let fixtures: Vec<Fixture> = serde_json::from_value(json!([
            {
                "fixture": {"id": 3, "date": "2024-09-01T20:00:00+03:00"},
                "teams": {"home": {"id": 549, "name": "Beşiktaş"}, "away": null},
                "goals": null
            },
            {
                "fixture": {"id": 4, "date": "2024-09-14T19:00:00+03:00"},
                "teams": {"home": {"id": 611, "name": null}, "away": {"id": 549, "name": "Beşiktaş"}},
                "goals": {"home": 1, "away": 1}
            }
        ]))
        .unwrap();

        let records = fixtures_to_records(&fixtures).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].home_team, "");
        assert_eq!((records[1].home_goals, records[1].away_goals), (0, 0));
        assert_eq!(records[1].away_team, "");
        assert_eq!(name_from_fixtures(&fixtures, TeamId(549)), Some("Beşiktaş".to_string()));
    }

    #[test]
    fn test_malformed_fixture_date() {
        let mut fixtures = payload();
        fixtures[0].fixture.date = "soon".to_string();
        assert!(matches!(fixtures_to_records(&fixtures), Err(FootyError::Parse(_))));
    }

    #[test]
    fn test_name_from_fixtures_compares_ids_by_value() {
        let fixtures = payload();
        assert_eq!(name_from_fixtures(&fixtures, TeamId(549)), Some("Beşiktaş".to_string()));
        assert_eq!(name_from_fixtures(&fixtures, TeamId(1005)), Some("Antalyaspor".to_string()));
        assert_eq!(name_from_fixtures(&fixtures, TeamId(1)), None);
    }

    #[test]
    fn test_fetch_prefers_provider_name() {
        let source = StubSource {
            fixtures: payload(),
            name: Some("Besiktas JK".to_string()),
        };
        let fetched = fetch_team_matches(&source, TeamId(549), 203, 2024, 10).unwrap();
        assert_eq!(fetched.team_name, "Besiktas JK");
        assert_eq!(fetched.records.len(), 2);
    }

    #[test]
    fn test_fetch_falls_back_to_fixture_name() {
        let source = StubSource {
            fixtures: payload(),
            name: Some(String::new()),
        };
        let fetched = fetch_team_matches(&source, TeamId(549), 203, 2024, 1).unwrap();
        assert_eq!(fetched.team_name, "Beşiktaş");
        assert_eq!(fetched.records.len(), 1);
    }
}
