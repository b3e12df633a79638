use eyre::{Result, WrapErr};
use std::env;
use std::time::Duration;

/// Configuration for talking to the booking API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, without trailing slash
    pub api_base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let api_base_url = env::var("MEETBOOK_API_URL").unwrap_or(defaults.api_base_url);

        let timeout_seconds = match env::var("MEETBOOK_CLIENT_TIMEOUT_SECONDS") {
            Ok(value) => value
                .parse()
                .wrap_err("MEETBOOK_CLIENT_TIMEOUT_SECONDS must be a whole number of seconds")?,
            Err(_) => defaults.timeout_seconds,
        };

        Ok(Self::new(api_base_url, timeout_seconds))
    }

    pub fn new(api_base_url: impl Into<String>, timeout_seconds: u64) -> Self {
        let api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        Self {
            api_base_url,
            timeout_seconds,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Absolute URL for an API path such as `/api/bookings`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}
