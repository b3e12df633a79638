use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/slots", get(handlers::availability::list_slots))
        .route(
            "/api/availability",
            get(handlers::availability::get_availability),
        )
}
