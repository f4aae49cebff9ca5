#![warn(clippy::pedantic)]

use ::log::LevelFilter;
use chrono::TimeDelta;
use url::Url;

pub mod log;

pub const RAPID_API_KEY: &str = "FITFLEX_RAPID_API_KEY";
pub const EXERCISE_DB_URL: &str = "FITFLEX_EXERCISE_DB_URL";
pub const EXERCISE_DB_HOST: &str = "FITFLEX_EXERCISE_DB_HOST";
pub const TAXONOMY_URL: &str = "FITFLEX_TAXONOMY_URL";
pub const CACHE_TTL_HOURS: &str = "FITFLEX_CACHE_TTL_HOURS";
pub const LOG_LEVEL: &str = "FITFLEX_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rapid_api_key: String,
    pub exercise_db_url: String,
    pub exercise_db_host: String,
    pub taxonomy_url: String,
    pub cache_ttl_hours: u32,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rapid_api_key: String::new(),
            exercise_db_url: "https://exercisedb.p.rapidapi.com".to_string(),
            exercise_db_host: "exercisedb.p.rapidapi.com".to_string(),
            taxonomy_url: "https://wger.de/api/v2".to_string(),
            cache_ttl_hours: 24,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Build the configuration from variables provided by `lookup`.
    ///
    /// Unset or blank variables take their default value, except for the API key, which is
    /// required.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or a value cannot be parsed.
    pub fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let default = Config::default();

        let rapid_api_key = value(RAPID_API_KEY).ok_or(ConfigError::Missing(RAPID_API_KEY))?;

        let cache_ttl_hours = match value(CACHE_TTL_HOURS) {
            Some(hours) => match hours.parse::<u32>() {
                Ok(h) if h > 0 => h,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: CACHE_TTL_HOURS,
                        value: hours,
                        reason: "expected a positive number of hours".to_string(),
                    });
                }
            },
            None => default.cache_ttl_hours,
        };

        let log_level = match value(LOG_LEVEL) {
            Some(level) => level.parse::<LevelFilter>().map_err(|err| ConfigError::Invalid {
                name: LOG_LEVEL,
                value: level.clone(),
                reason: err.to_string(),
            })?,
            None => default.log_level,
        };

        let exercise_db_url = match value(EXERCISE_DB_URL) {
            Some(url) => validate_base_url(EXERCISE_DB_URL, url)?,
            None => default.exercise_db_url,
        };
        let taxonomy_url = match value(TAXONOMY_URL) {
            Some(url) => validate_base_url(TAXONOMY_URL, url)?,
            None => default.taxonomy_url,
        };

        Ok(Self {
            rapid_api_key,
            exercise_db_url,
            exercise_db_host: value(EXERCISE_DB_HOST).unwrap_or(default.exercise_db_host),
            taxonomy_url,
            cache_ttl_hours,
            log_level,
        })
    }

    #[must_use]
    pub fn cache_ttl(&self) -> TimeDelta {
        TimeDelta::hours(i64::from(self.cache_ttl_hours))
    }
}

fn validate_base_url(name: &'static str, url: String) -> Result<String, ConfigError> {
    let reason = match Url::parse(&url) {
        Ok(parsed) if parsed.cannot_be_a_base() => "expected a base URL".to_string(),
        Ok(_) => return Ok(url),
        Err(err) => err.to_string(),
    };
    Err(ConfigError::Invalid {
        name,
        value: url,
        reason,
    })
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{name} has invalid value \"{value}\": {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}
