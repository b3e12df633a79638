mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use meetbook_core::errors::BookingError;
use meetbook_db::mock::repositories::MockBookingStore;
use serde_json::{Value, json};

use common::TestContext;

#[tokio::test]
async fn test_health_reports_timezone() {
    let mut ctx = TestContext::new();
    ctx.calendar = meetbook_core::calendar::BusinessCalendar::from_name("Europe/Zurich").unwrap();

    let body: Value = ctx.server().get("/health").await.json();

    assert_eq!(body, json!({ "status": "ok", "timezone": "Europe/Zurich" }));
}

#[tokio::test]
async fn test_readiness_follows_store() {
    let response = TestContext::new().server().get("/health/ready").await;
    response.assert_status_ok();

    let mut store = MockBookingStore::new();
    store
        .expect_bookings_on()
        .returning(|_| Err(BookingError::UpstreamUnavailable(eyre::eyre!("down"))));
    let response = TestContext::with_store(Arc::new(store))
        .server()
        .get("/health/ready")
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["booking_store"], "unreachable");
}

#[tokio::test]
async fn test_version() {
    let body: Value = TestContext::new().server().get("/version").await.json();
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
