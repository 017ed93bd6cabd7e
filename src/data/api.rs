//! API-Football (api-sports.io) client
//!
//! Blocking HTTP client with a short-lived response cache for lookup
//! endpoints and retries for transient failures.

use super::fixtures::{Fixture, FixtureSource};
use super::null_as_default;
use crate::{ApiConfig, FootyError, Result, TeamId};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "API_FOOTBALL_KEY";

/// Minimum query length accepted by team search
const MIN_SEARCH_LEN: usize = 3;

/// Read the API key from the environment
pub fn api_key_from_env() -> Result<String> {
    std::env::var(API_KEY_VAR)
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or(FootyError::MissingApiKey)
}

/// Retry an operation with exponential backoff while it fails transiently
pub fn with_retry<T, F>(mut operation: F, max_attempts: u32) -> Result<T>
where
    F: FnMut() -> Result<T>,
{
    let mut attempt = 0;
    loop {
        match operation() {
            Ok(result) => return Ok(result),
            Err(e) if e.is_transient() && attempt + 1 < max_attempts => {
                log::warn!("Attempt {} failed: {}", attempt + 1, e);
                let delay = Duration::from_millis(100 * 2u64.pow(attempt));
                std::thread::sleep(delay);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Reject a response whose `errors` field is populated
pub fn check_envelope(body: &Value) -> Result<()> {
    let errors = match body.get("errors") {
        Some(Value::Array(items)) if !items.is_empty() => body["errors"].clone(),
        Some(Value::Object(map)) if !map.is_empty() => Value::Object(map.clone()),
        _ => return Ok(()),
    };

    let message = errors
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| errors.to_string());

    let lower = message.to_lowercase();
    if lower.contains("rate") || lower.contains("limit") {
        Err(FootyError::RateLimited)
    } else {
        Err(FootyError::Api(message))
    }
}

/// A competition as listed by the `leagues` endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct League {
    pub id: Option<i64>,
    pub name: String,
    pub country: String,
}

/// A team search hit
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSummary {
    pub id: Option<TeamId>,
    pub name: String,
    pub country: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LeagueItem {
    #[serde(deserialize_with = "null_as_default")]
    league: LeagueInfo,
    #[serde(deserialize_with = "null_as_default")]
    country: CountryInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LeagueInfo {
    id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    name: String,
    #[serde(deserialize_with = "null_as_default")]
    country: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CountryInfo {
    #[serde(deserialize_with = "null_as_default")]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TeamItem {
    #[serde(deserialize_with = "null_as_default")]
    team: TeamInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TeamInfo {
    id: Option<TeamId>,
    #[serde(deserialize_with = "null_as_default")]
    name: String,
    #[serde(deserialize_with = "null_as_default")]
    country: String,
}

/// Deserialize the `response` array of an API envelope
fn response_items<T: serde::de::DeserializeOwned>(body: &Value) -> Result<Vec<T>> {
    match body.get("response") {
        Some(items) => Ok(serde_json::from_value(items.clone())?),
        None => Ok(Vec::new()),
    }
}

pub fn parse_leagues(body: &Value) -> Result<Vec<League>> {
    Ok(response_items::<LeagueItem>(body)?
        .into_iter()
        .map(|item| League {
            id: item.league.id,
            name: item.league.name,
            country: if item.country.name.is_empty() {
                item.league.country
            } else {
                item.country.name
            },
        })
        .collect())
}

pub fn parse_teams(body: &Value) -> Result<Vec<TeamSummary>> {
    Ok(response_items::<TeamItem>(body)?
        .into_iter()
        .map(|item| TeamSummary {
            id: item.team.id,
            name: item.team.name,
            country: item.team.country,
        })
        .collect())
}

/// API-Football v3 client
pub struct ApiClient {
    client: Client,
    base_url: String,
    cache_ttl: Duration,
    max_attempts: u32,
    cache: Mutex<HashMap<String, (Instant, Value)>>,
}

impl ApiClient {
    pub fn new(api_key: &str, config: &ApiConfig) -> Result<Self> {
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|_| FootyError::Config("API key contains invalid characters".to_string()))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("x-apisports-key", key);

        let client = Client::builder()
            .user_agent("footy/0.1")
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(ApiClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cache_ttl: Duration::from_secs(config.cache_ttl_secs),
            max_attempts: config.max_attempts.max(1),
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// Create a client using the key from the environment
    pub fn from_env(config: &ApiConfig) -> Result<Self> {
        Self::new(&api_key_from_env()?, config)
    }

    fn cache_key(endpoint: &str, params: &[(&str, String)]) -> String {
        let mut sorted: Vec<_> = params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        sorted.sort();
        format!("{}:{}", endpoint, sorted.join("&"))
    }

    fn cached(&self, key: &str) -> Option<Value> {
        let cache = self.cache.lock().ok()?;
        let (stored_at, value) = cache.get(key)?;
        if stored_at.elapsed() < self.cache_ttl {
            log::debug!("Cache hit: {}", key);
            Some(value.clone())
        } else {
            None
        }
    }

    fn store(&self, key: String, value: &Value) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(key, (Instant::now(), value.clone()));
        }
    }

    /// GET an endpoint, optionally through the response cache
    fn request(&self, endpoint: &str, params: &[(&str, String)], use_cache: bool) -> Result<Value> {
        let key = Self::cache_key(endpoint, params);
        if use_cache {
            if let Some(value) = self.cached(&key) {
                return Ok(value);
            }
        }

        let body = with_retry(|| self.send(endpoint, params), self.max_attempts)?;

        if use_cache {
            self.store(key, &body);
        }
        Ok(body)
    }

    /// Single HTTP round trip with status and envelope checks
    fn send(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("GET {} {:?}", url, params);

        let response = self.client.get(&url).query(params).send()?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(FootyError::RateLimited);
        }
        if status.is_server_error() {
            return Err(FootyError::Server(status.as_u16()));
        }
        if status != StatusCode::OK {
            return Err(FootyError::Api(format!("HTTP {}", status.as_u16())));
        }

        let text = response.text()?;
        let body: Value = serde_json::from_str(&text)
            .map_err(|_| FootyError::Api("invalid JSON in response".to_string()))?;
        check_envelope(&body)?;
        Ok(body)
    }

    /// All competitions known to the API
    pub fn leagues(&self) -> Result<Vec<League>> {
        let body = self.request("leagues", &[], true)?;
        parse_leagues(&body)
    }

    /// Search teams by name; queries shorter than three characters return nothing
    pub fn search_teams(&self, query: &str) -> Result<Vec<TeamSummary>> {
        let query = query.trim();
        if query.chars().count() < MIN_SEARCH_LEN {
            return Ok(Vec::new());
        }
        let body = self.request("teams", &[("search", query.to_string())], true)?;
        parse_teams(&body)
    }
}

impl FixtureSource for ApiClient {
    fn team_fixtures(
        &self,
        team: TeamId,
        league_id: i64,
        season: u16,
        last_n: usize,
    ) -> Result<Vec<Fixture>> {
        let params = [
            ("team", team.0.to_string()),
            ("league", league_id.to_string()),
            ("season", season.to_string()),
            ("status", "FT".to_string()),
        ];
        let body = self.request("fixtures", &params, false)?;

        let mut fixtures: Vec<Fixture> = response_items(&body)?;
        // ISO-8601 strings sort chronologically
        fixtures.sort_by(|a, b| b.fixture.date.cmp(&a.fixture.date));
        fixtures.truncate(last_n);
        Ok(fixtures)
    }

    fn team_name(&self, team: TeamId) -> Result<Option<String>> {
        let body = self.request("teams", &[("id", team.0.to_string())], true)?;
        Ok(parse_teams(&body)?.into_iter().next().map(|t| t.name))
    }
}
