//! Team name resolution
//!
//! Finds the canonical spelling of a team in a dataset, tolerating Turkish
//! diacritic variants ("Beşiktaş" vs "Besiktas").

use crate::MatchRecord;
use std::collections::BTreeSet;

/// How a query is compared against stored team names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameMatch {
    /// Byte-for-byte equality only, for names that are already canonical
    Exact,
    /// Exact equality first, then case- and diacritic-insensitive equality
    #[default]
    Normalized,
}

/// Fold Turkish diacritics to ASCII and lower-case the result
pub fn normalize_team_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'ç' => 'c',
            'ğ' => 'g',
            'ı' => 'i',
            'ö' => 'o',
            'ş' => 's',
            'ü' => 'u',
            'Ç' => 'C',
            'Ğ' => 'G',
            'İ' => 'I',
            'Ö' => 'O',
            'Ş' => 'S',
            'Ü' => 'U',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
}

/// Every team name that appears as home or away side
pub fn distinct_team_names(records: &[MatchRecord]) -> BTreeSet<&str> {
    records
        .iter()
        .flat_map(|m| [m.home_team.as_str(), m.away_team.as_str()])
        .collect()
}

/// Resolve a user-supplied name to the spelling stored in `records`.
///
/// When several stored spellings normalize to the same form, the first in
/// sorted order wins; which variant that is carries no meaning.
pub fn resolve_team_name(records: &[MatchRecord], query: &str, mode: NameMatch) -> Option<String> {
    let names = distinct_team_names(records);

    if names.contains(query) {
        return Some(query.to_string());
    }
    if mode == NameMatch::Exact {
        return None;
    }

    let wanted = normalize_team_name(query);
    let resolved = names
        .into_iter()
        .find(|name| normalize_team_name(name) == wanted)
        .map(str::to_string);

    if let Some(name) = &resolved {
        log::debug!("Resolved '{}' to '{}'", query, name);
    }
    resolved
}
