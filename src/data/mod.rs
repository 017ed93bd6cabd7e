//! Match data sources
//!
//! CSV files and the API-Football remote service.

pub mod api;
pub mod csv_file;
pub mod fixtures;

pub use api::ApiClient;
pub use csv_file::load_matches;
pub use fixtures::{fetch_team_matches, FixtureSource, TeamFixtures};

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
