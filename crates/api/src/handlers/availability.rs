//! # Availability Handlers
//!
//! `GET /api/availability?date=YYYY-MM-DD` answers which of the daily slots
//! can still be booked. When the booking store cannot be read and fail-open
//! is enabled, every slot is reported available instead of returning an
//! error, so the scheduling page keeps working through a backend outage.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    Json,
};
use std::sync::Arc;
use meetbook_core::models::{
    availability::{AvailabilityQuery, AvailabilityResponse},
    time_slot::catalog_labels,
};

use crate::{middleware::error_handling::AppError, ApiState};

/// Returns the slot catalog in display order.
pub async fn list_slots() -> Json<Vec<String>> {
    Json(catalog_labels())
}

/// Partitions the slot catalog for one date into available and busy slots.
///
/// # Errors
///
/// * `InvalidInput` (400) - the date is missing or malformed
/// * `UpstreamUnavailable` (503) - bookings cannot be read and fail-open is off
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let Query(query) = query?;
    let date = state.scheduler.calendar().parse_date(query.date.as_deref())?;

    let result = if state.fail_open {
        state.scheduler.resolve_or_open(date).await?
    } else {
        state.scheduler.resolve_availability(date).await?
    };

    Ok(Json(result.into()))
}
