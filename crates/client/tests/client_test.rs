use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::eyre;
use meetbook_api::{ApiState, app};
use meetbook_client::{BookingClient, ClientError, config::ClientConfig};
use meetbook_core::{
    calendar::BusinessCalendar,
    errors::{BookingError, BookingResult},
    models::{
        booking::{Booking, CreateBookingRequest, NewBooking},
        time_slot::{SLOTS_PER_DAY, TimeSlot},
    },
    scheduler::{BookingPolicy, Scheduler},
    store::{BookingStore, InMemoryBookingStore},
};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use tokio::net::TcpListener;
use uuid::Uuid;

struct DownStore;

#[async_trait]
impl BookingStore for DownStore {
    async fn insert_booking(&self, _booking: NewBooking) -> BookingResult<Booking> {
        Err(BookingError::UpstreamUnavailable(eyre!("connection refused")))
    }

    async fn bookings_on(&self, _date: NaiveDate) -> BookingResult<Vec<Booking>> {
        Err(BookingError::UpstreamUnavailable(eyre!("connection refused")))
    }

    async fn list_bookings(&self) -> BookingResult<Vec<Booking>> {
        Err(BookingError::UpstreamUnavailable(eyre!("connection refused")))
    }

    async fn delete_booking(&self, _id: Uuid) -> BookingResult<bool> {
        Err(BookingError::UpstreamUnavailable(eyre!("connection refused")))
    }
}

/// Serves the API on an ephemeral port and returns a client pointed at it.
async fn spawn_api(store: Arc<dyn BookingStore>, fail_open: bool) -> BookingClient {
    let state = Arc::new(ApiState {
        scheduler: Scheduler::new(store, BusinessCalendar::default(), BookingPolicy::default()),
        fail_open,
        admin_token_hash: None,
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });

    BookingClient::new(ClientConfig::new(&format!("http://{}", addr), 5)).unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn slot(label: &str) -> TimeSlot {
    label.parse().unwrap()
}

fn request(date: &str, time: &str) -> CreateBookingRequest {
    CreateBookingRequest {
        name: Some("Grace Hopper".to_string()),
        email: Some("grace@example.com".to_string()),
        date: Some(date.to_string()),
        time: Some(time.to_string()),
        message: None,
    }
}

#[tokio::test]
async fn test_booked_slot_shows_busy() {
    let client = spawn_api(Arc::new(InMemoryBookingStore::new()), true).await;

    let booking = client.create_booking(&request("2030-03-11", "10:00 AM")).await.unwrap();
    assert_eq!(booking.time_slot, slot("10:00 AM"));
    assert_eq!(booking.date, date("2030-03-11"));

    let view = client.availability_or_open(date("2030-03-11")).await;
    assert!(!view.degraded);
    assert_eq!(view.busy, vec![slot("10:00 AM")]);
    assert_eq!(view.available.len(), SLOTS_PER_DAY - 1);
    assert!(!view.is_available(slot("10:00 AM")));

    let other_day = client.fetch_availability(date("2030-03-12")).await.unwrap();
    assert_eq!(other_day.available_slots.len(), SLOTS_PER_DAY);
}

#[tokio::test]
async fn test_rejected_booking_carries_api_message() {
    let client = spawn_api(Arc::new(InMemoryBookingStore::new()), true).await;

    let err = client
        .create_booking(&request("2030-03-11", "07:00 AM"))
        .await
        .unwrap_err();

    match &err {
        ClientError::Api { status, message } => {
            assert_eq!(*status, StatusCode::UNPROCESSABLE_ENTITY);
            assert!(message.contains("07:00 AM"), "unexpected message: {}", message);
        }
        other => panic!("Expected Api error, got: {:?}", other),
    }
    assert!(err.is_user_facing());
}

#[tokio::test]
async fn test_unreachable_api_shows_every_slot() {
    // Grab a free port and release it so nothing is listening there.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = BookingClient::new(ClientConfig::new(&format!("http://{}", addr), 2)).unwrap();

    let err = client.fetch_availability(date("2030-03-11")).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert!(!err.is_user_facing());

    let view = client.availability_or_open(date("2030-03-11")).await;
    assert!(view.degraded);
    assert!(view.busy.is_empty());
    assert_eq!(view.available.len(), SLOTS_PER_DAY);
}

#[tokio::test]
async fn test_strict_api_failure_falls_back_in_client() {
    let client = spawn_api(Arc::new(DownStore), false).await;

    let err = client.fetch_availability(date("2030-03-11")).await.unwrap_err();
    match err {
        ClientError::Api { status, .. } => assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE),
        other => panic!("Expected Api error, got: {:?}", other),
    }

    let view = client.availability_or_open(date("2030-03-11")).await;
    assert!(view.degraded);
    assert_eq!(view.available.len(), SLOTS_PER_DAY);
}

#[tokio::test]
async fn test_fail_open_api_answers_with_full_catalog() {
    let client = spawn_api(Arc::new(DownStore), true).await;

    let view = client.availability_or_open(date("2030-03-11")).await;
    assert!(!view.degraded);
    assert!(view.busy.is_empty());
    assert_eq!(view.available.len(), SLOTS_PER_DAY);
}
