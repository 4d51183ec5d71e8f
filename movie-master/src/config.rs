//! Service configuration read from environment variables

use std::env;
use thiserror::Error;

use crate::omdb::DEFAULT_OMDB_BASE_URL;

/// Application id of the published Movie Master skill
pub const DEFAULT_APPLICATION_ID: &str = "amzn1.ask.skill.477cb321-b587-47ed-a5db-30196e96d3c2";

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub omdb_api_key: String,
    pub omdb_base_url: String,
    /// Callers outside this list are rejected; empty accepts everyone
    pub allowed_application_ids: Vec<String>,
    pub log_format: LogFormat,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_lookup<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match var("PORT") {
            Some(value) => {
                value
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidValue {
                        name: "PORT",
                        value: value.clone(),
                    })?
            }
            None => DEFAULT_PORT,
        };

        let omdb_api_key = var("OMDB_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingRequired("OMDB_API_KEY"))?;

        let omdb_base_url =
            var("OMDB_BASE_URL").unwrap_or_else(|| DEFAULT_OMDB_BASE_URL.to_string());

        let allowed_application_ids = match var("ALLOWED_APPLICATION_IDS") {
            Some(ids) => ids
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect(),
            None => vec![DEFAULT_APPLICATION_ID.to_string()],
        };

        let log_format = match var("LOG_FORMAT").as_deref() {
            Some("pretty") => LogFormat::Pretty,
            Some("json") | None => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: "LOG_FORMAT",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            port,
            omdb_api_key,
            omdb_base_url,
            allowed_application_ids,
            log_format,
        })
    }
}
