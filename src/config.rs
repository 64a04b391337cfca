use chrono_tz::Tz;
use std::env;
use std::time::Duration;

use crate::domain::entities::CountryCode;

pub const DEFAULT_GEOLOCATION_URL: &str = "https://ipinfo.io/json";
pub const DEFAULT_CALENDAR_API_URL: &str = "https://www.googleapis.com/calendar/v3";
pub const DEFAULT_LLM_API_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_LLM_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Clone, Debug)]
pub struct Config {
    pub gcp_api_key: String,
    pub groq_api_key: String,
    pub fallback_country: CountryCode,
    pub geolocation_url: String,
    pub geolocation_timeout: Duration,
    pub calendar_api_url: String,
    pub llm_api_url: String,
    pub llm_model: String,
    pub timezone: Option<Tz>,
    pub user_name: Option<String>,
}

impl Config {
    /// Configuration with every optional setting at its default.
    pub fn new(gcp_api_key: impl Into<String>, groq_api_key: impl Into<String>) -> Self {
        Config {
            gcp_api_key: gcp_api_key.into(),
            groq_api_key: groq_api_key.into(),
            fallback_country: CountryCode::us(),
            geolocation_url: DEFAULT_GEOLOCATION_URL.to_string(),
            geolocation_timeout: Duration::from_secs(5),
            calendar_api_url: DEFAULT_CALENDAR_API_URL.to_string(),
            llm_api_url: DEFAULT_LLM_API_URL.to_string(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            timezone: None,
            user_name: None,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let gcp_api_key = non_empty_var("GCP_API_KEY").ok_or(ConfigError::MissingGcpApiKey)?;
        let groq_api_key = non_empty_var("GROQ_API_KEY").ok_or(ConfigError::MissingGroqApiKey)?;

        let mut config = Config::new(gcp_api_key, groq_api_key);

        if let Some(raw) = non_empty_var("XLYA_FALLBACK_COUNTRY") {
            config.fallback_country = CountryCode::parse(&raw)
                .ok_or_else(|| ConfigError::InvalidFallbackCountry(raw.clone()))?;
        }

        if let Some(raw) = non_empty_var("XLYA_GEOLOCATION_TIMEOUT_SECS") {
            let secs = raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            config.geolocation_timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = non_empty_var("XLYA_TIMEZONE") {
            let tz: Tz = raw
                .parse()
                .map_err(|_| ConfigError::InvalidTimezone(raw.clone()))?;
            config.timezone = Some(tz);
        }

        if let Some(url) = non_empty_var("XLYA_GEOLOCATION_URL") {
            config.geolocation_url = url;
        }
        if let Some(url) = non_empty_var("XLYA_CALENDAR_API_URL") {
            config.calendar_api_url = url;
        }
        if let Some(url) = non_empty_var("XLYA_LLM_API_URL") {
            config.llm_api_url = url;
        }
        if let Some(model) = non_empty_var("XLYA_LLM_MODEL") {
            config.llm_model = model;
        }

        config.user_name = non_empty_var("XLYA_USER_NAME");

        Ok(config)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GCP_API_KEY environment variable not set")]
    MissingGcpApiKey,

    #[error("GROQ_API_KEY environment variable not set")]
    MissingGroqApiKey,

    #[error("Invalid fallback country code: {0}")]
    InvalidFallbackCountry(String),

    #[error("Invalid geolocation timeout: {0}")]
    InvalidTimeout(String),

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),
}
