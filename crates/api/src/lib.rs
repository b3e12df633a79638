//! # meetbook API
//!
//! The API crate provides the web server for the meeting scheduler. It exposes
//! the slot catalog, per-date availability and booking creation, plus an
//! admin surface for listing and deleting bookings.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate HTTP requests into scheduler calls
//! - **Middleware**: Admin token checks and error-to-response mapping
//! - **Config**: Environment-driven settings
//!
//! The API uses Axum as the web framework; bookings live behind the
//! [`BookingStore`](meetbook_core::store::BookingStore) seam, backed by
//! Postgres in production.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use eyre::Result;
use meetbook_core::{scheduler::Scheduler, store::BookingStore};
use meetbook_db::store::PgBookingStore;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Availability resolver and booking service
    pub scheduler: Scheduler,
    /// Serve the full catalog when bookings cannot be read
    pub fail_open: bool,
    /// Argon2 hash of the admin bearer token, if admin access is enabled
    pub admin_token_hash: Option<String>,
}

impl ApiState {
    pub fn new(store: Arc<dyn BookingStore>, config: &config::ApiConfig) -> Self {
        Self {
            scheduler: Scheduler::new(store, config.calendar, config.policy),
            fail_open: config.fail_open,
            admin_token_hash: config.admin_token_hash.clone(),
        }
    }
}

/// Builds the application router with all routes attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot catalog and availability endpoints
        .merge(routes::availability::routes())
        // Booking endpoints
        .merge(routes::booking::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Builds the CORS layer for the configured origins.
///
/// `*` allows any origin, without credentials. Otherwise only the listed
/// origins are allowed and unparsable entries are skipped.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]);

    if origins.iter().any(|origin| origin == "*") {
        if origins.len() > 1 {
            warn!("API_CORS_ORIGINS contains '*', ignoring the other origins");
        }
        return cors.allow_origin(AllowOrigin::any());
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    cors.allow_origin(allowed).allow_credentials(true)
}

/// Starts the API server with the provided configuration and database connection
///
/// Initializes logging, wires the Postgres booking store into the scheduler,
/// applies CORS and timeout layers, and serves until the listener fails.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let store: Arc<dyn BookingStore> = Arc::new(PgBookingStore::new(db_pool));
    let state = Arc::new(ApiState::new(store, &config));

    info!(
        "Scheduling in {} (buffer slots: {}, reject double bookings: {}, fail open: {})",
        config.calendar.timezone(),
        config.policy.buffer_slots,
        config.policy.reject_double_booking,
        config.fail_open
    );
    if config.admin_token_hash.is_none() {
        warn!("ADMIN_TOKEN_HASH is not set, admin routes will refuse every request");
    }

    let app = app(state).layer(TraceLayer::new_for_http());

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(axum::error_handling::HandleErrorLayer::new(
                |_: tower::BoxError| async { axum::http::StatusCode::REQUEST_TIMEOUT },
            ))
            .timeout(std::time::Duration::from_secs(config.request_timeout)),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
