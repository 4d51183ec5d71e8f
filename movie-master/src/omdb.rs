use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_OMDB_BASE_URL: &str = "https://www.omdbapi.com/";

/// Marker the movie service uses for a field it has no value for
const NOT_AVAILABLE: &str = "N/A";

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("request to movie service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("movie service returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("movie not found: {0}")]
    NotFound(String),

    #[error("malformed response from movie service: {0}")]
    Malformed(String),

    #[error("invalid {field} rating: {value}")]
    InvalidRating { field: &'static str, value: String },

    #[error("invalid release date: {0}")]
    InvalidDate(String),
}

/// A rating as the service reported it. The "no ratings" verdict depends on
/// whether a rating was left blank or explicitly marked "N/A".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Rating {
    #[default]
    Blank,
    NotAvailable,
    Value(String),
}

impl Rating {
    pub fn value(&self) -> Option<&str> {
        match self {
            Rating::Value(v) => Some(v.as_str()),
            Rating::Blank | Rating::NotAvailable => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Rating::Blank)
    }

    pub fn is_not_available(&self) -> bool {
        matches!(self, Rating::NotAvailable)
    }
}

impl From<&str> for Rating {
    fn from(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            Rating::Blank
        } else if raw.eq_ignore_ascii_case(NOT_AVAILABLE) {
            Rating::NotAvailable
        } else {
            Rating::Value(raw.to_string())
        }
    }
}

/// One title as reported by the movie service. Text fields the service marks
/// as unknown are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "Title", default, deserialize_with = "available")]
    pub title: Option<String>,
    #[serde(rename = "Plot", default, deserialize_with = "available")]
    pub plot: Option<String>,
    #[serde(rename = "Actors", default, deserialize_with = "available")]
    pub actors: Option<String>,
    #[serde(rename = "Director", default, deserialize_with = "available")]
    pub director: Option<String>,
    #[serde(rename = "imdbRating", default, deserialize_with = "rating")]
    pub imdb_rating: Rating,
    #[serde(rename = "tomatoRating", default, deserialize_with = "rating")]
    pub tomato_rating: Rating,
    #[serde(rename = "Released", default, deserialize_with = "available")]
    pub released: Option<String>,
}

/// Blank strings and the "N/A" marker both mean the value is unknown
fn available<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(NOT_AVAILABLE)))
}

fn rating<'de, D>(deserializer: D) -> Result<Rating, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(Rating::from).unwrap_or_default())
}

/// Remote movie metadata. Implementations must not keep per-call state so a
/// single instance can serve overlapping requests.
#[async_trait]
pub trait MovieLookup: Send + Sync {
    /// Exact title lookup. `with_ratings` asks for the extended critic ratings.
    async fn find_by_title(&self, title: &str, with_ratings: bool)
    -> Result<MovieRecord, LookupError>;

    /// Number of titles matching a fuzzy search
    async fn search(&self, title: &str) -> Result<u64, LookupError>;
}

/// Client for the OMDb HTTP API
#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("movie-master/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    async fn get(&self, params: &[(&str, &str)]) -> Result<Value, LookupError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        let body: Value = response.json().await?;

        // The service reports lookup failures in-band with a 200 status
        if body.get("Response").and_then(Value::as_str) == Some("False") {
            let message = body
                .get("Error")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(LookupError::NotFound(message));
        }

        Ok(body)
    }
}

#[async_trait]
impl MovieLookup for OmdbClient {
    async fn find_by_title(
        &self,
        title: &str,
        with_ratings: bool,
    ) -> Result<MovieRecord, LookupError> {
        debug!(title = %title, with_ratings, "Looking up movie by title");

        let mut params = vec![("t", title)];
        if with_ratings {
            params.push(("tomatoes", "true"));
        }

        let body = self.get(&params).await?;
        let record: MovieRecord =
            serde_json::from_value(body).map_err(|e| LookupError::Malformed(e.to_string()))?;

        info!(title = %title, found = ?record.title, "Movie lookup completed");
        Ok(record)
    }

    async fn search(&self, title: &str) -> Result<u64, LookupError> {
        debug!(title = %title, "Searching movie listings");

        let body = self.get(&[("s", title)]).await?;
        let total = match body.get("totalResults") {
            Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
            Some(Value::Number(n)) => n.as_u64(),
            _ => None,
        }
        .ok_or_else(|| LookupError::Malformed("missing totalResults".to_string()))?;

        info!(title = %title, total, "Movie search completed");
        Ok(total)
    }
}
