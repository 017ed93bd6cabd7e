//! CSV match history loader
//!
//! Expects a header row with `date,home_team,away_team,home_goals,away_goals`.

use crate::analysis::filter::sort_newest_first;
use crate::{FootyError, MatchRecord, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    home_team: String,
    away_team: String,
    home_goals: u32,
    away_goals: u32,
}

/// Parse a match date in any of the accepted layouts
pub fn parse_match_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    for format in ["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    None
}

/// Load match records from a CSV file, newest first
pub fn load_matches<P: AsRef<Path>>(path: P) -> Result<Vec<MatchRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FootyError::SourceNotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        let row = row?;
        // Row 1 is the header
        let line = index + 2;
        let date = parse_match_date(&row.date).ok_or_else(|| {
            FootyError::Parse(format!("line {}: malformed date '{}'", line, row.date))
        })?;

        records.push(MatchRecord {
            date,
            home_team: row.home_team,
            away_team: row.away_team,
            home_goals: row.home_goals,
            away_goals: row.away_goals,
        });
    }

    sort_newest_first(&mut records);
    log::info!("Loaded {} matches from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_sorts_newest_first() {
        let file = write_csv(
            "date,home_team,away_team,home_goals,away_goals\n\
             2024-08-10,Beşiktaş,Samsunspor,2,1\n\
             2024-08-24,Antalyaspor,Beşiktaş,0,0\n\
             2024-08-17,Beşiktaş,Sivasspor,1,1\n",
        );

        let records = load_matches(file.path()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 8, 24).unwrap());
        assert_eq!(records[2].home_team, "Beşiktaş");
        assert_eq!(records[2].away_goals, 1);
    }

    #[test]
    fn test_missing_file() {
        let err = load_matches("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, FootyError::SourceNotFound(_)));
    }

    #[test]
    fn test_malformed_date() {
        let file = write_csv(
            "date,home_team,away_team,home_goals,away_goals\n\
             2024-08-10,A,B,2,1\n\
             yesterday,A,C,0,0\n",
        );
        let err = load_matches(file.path()).unwrap_err();
        assert!(matches!(err, FootyError::Parse(msg) if msg.contains("line 3")));
    }

    #[test]
    fn test_bad_goals_rejected() {
        let file = write_csv(
            "date,home_team,away_team,home_goals,away_goals\n\
             2024-08-10,A,B,two,1\n",
        );
        assert!(matches!(load_matches(file.path()), Err(FootyError::Csv(_))));
    }

    #[test]
    fn test_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9);
        assert_eq!(parse_match_date("2024-03-09"), expected);
        assert_eq!(parse_match_date("09.03.2024"), expected);
        assert_eq!(parse_match_date("09/03/2024"), expected);
        assert_eq!(parse_match_date("2024-03-09 19:00:00"), expected);
        assert_eq!(parse_match_date("March 9"), None);
    }
}
