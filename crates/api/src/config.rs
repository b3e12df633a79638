//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the meetbook API
//! server. It retrieves configuration values from environment variables and
//! provides defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `BUSINESS_TIMEZONE`: IANA timezone booking dates are interpreted in (default: "UTC")
//! - `BOOKING_BUFFER_SLOTS`: Slots around a booking that are also shown busy (default: 0)
//! - `BOOKING_REJECT_DOUBLE`: Refuse bookings for busy slots (default: false)
//! - `AVAILABILITY_FAIL_OPEN`: Show every slot when bookings cannot be read (default: true)
//! - `ADMIN_TOKEN_HASH`: Argon2 hash of the admin bearer token (admin routes are closed without it)

use eyre::{Result, WrapErr};
use meetbook_core::{calendar::BusinessCalendar, scheduler::BookingPolicy};
use std::env;
use tracing::Level;

/// Configuration for the meetbook API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use meetbook_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Timezone in which booking dates are interpreted
    pub calendar: BusinessCalendar,

    /// Buffer and double-booking policy
    pub policy: BookingPolicy,

    /// Serve the full catalog when the booking store is unreachable
    pub fail_open: bool,

    /// Argon2 PHC string guarding the admin routes
    pub admin_token_hash: Option<String>,
}

fn parse_flag(name: &str, default: bool) -> Result<bool> {
    match env::var(name) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(eyre::eyre!("Invalid {} value: {}", name, other)),
        },
        Err(_) => Ok(default),
    }
}

fn parse_log_level(value: &str) -> Level {
    match value {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT or BOOKING_BUFFER_SLOTS value cannot be parsed
    /// - BUSINESS_TIMEZONE is not a known IANA timezone
    /// - A boolean flag holds something other than true/false
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Scheduling settings
        let calendar = BusinessCalendar::from_env()
            .map_err(|e| eyre::eyre!("Invalid BUSINESS_TIMEZONE value: {}", e))?;

        let buffer_slots = env::var("BOOKING_BUFFER_SLOTS")
            .unwrap_or_else(|_| "0".to_string())
            .parse()
            .wrap_err("Invalid BOOKING_BUFFER_SLOTS value")?;
        let policy = BookingPolicy {
            buffer_slots,
            reject_double_booking: parse_flag("BOOKING_REJECT_DOUBLE", false)?,
        };
        let fail_open = parse_flag("AVAILABILITY_FAIL_OPEN", true)?;

        // Security settings
        let admin_token_hash = env::var("ADMIN_TOKEN_HASH")
            .ok()
            .filter(|hash| !hash.trim().is_empty());

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            calendar,
            policy,
            fail_open,
            admin_token_hash,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
