use axum::{
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode},
    Json,
};
use meetbook_core::models::booking::{Booking, CreateBookingRequest};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

#[derive(Debug, Default, Deserialize)]
pub struct ListBookingsQuery {
    pub date: Option<String>,
}

/// Stores a booking submitted by the scheduling form.
///
/// Availability is not re-checked unless the double-booking policy is on.
#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let Json(payload) = payload?;
    let booking = state.scheduler.create_booking(&payload).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    query: Result<Query<ListBookingsQuery>, QueryRejection>,
) -> Result<Json<Vec<Booking>>, AppError> {
    auth::require_admin(&headers, state.admin_token_hash.as_deref())?;
    let Query(query) = query?;

    let date = match query.date.as_deref() {
        Some(raw) => Some(state.scheduler.calendar().parse_date(Some(raw))?),
        None => None,
    };

    let bookings = state.scheduler.list_bookings(date).await?;
    Ok(Json(bookings))
}

#[axum::debug_handler]
pub async fn delete_booking(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    auth::require_admin(&headers, state.admin_token_hash.as_deref())?;
    let Path(id) = id?;

    state.scheduler.delete_booking(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
