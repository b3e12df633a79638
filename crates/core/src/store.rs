//! Storage seam for bookings.
//!
//! The API talks to bookings only through [`BookingStore`]. Implementations
//! report an unreachable backend as `BookingError::UpstreamUnavailable` and a
//! violated `(date, slot)` uniqueness constraint as `BookingError::Conflict`.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    errors::{BookingError, BookingResult},
    models::booking::{Booking, NewBooking},
};

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Persists a booking and returns it with its id and creation time.
    async fn insert_booking(&self, booking: NewBooking) -> BookingResult<Booking>;

    /// All bookings whose date equals `date`, oldest first.
    async fn bookings_on(&self, date: NaiveDate) -> BookingResult<Vec<Booking>>;

    /// Every booking, ordered by date, slot and creation time.
    async fn list_bookings(&self) -> BookingResult<Vec<Booking>>;

    /// Removes a booking. Returns false if no booking had that id.
    async fn delete_booking(&self, id: Uuid) -> BookingResult<bool>;
}

/// Process-local store, used by tests and local runs without Postgres.
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    bookings: Mutex<Vec<Booking>>,
    unique_slots: bool,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses a second booking for the same date and slot.
    pub fn with_unique_slots() -> Self {
        Self {
            bookings: Mutex::new(Vec::new()),
            unique_slots: true,
        }
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn insert_booking(&self, booking: NewBooking) -> BookingResult<Booking> {
        let mut bookings = self.bookings.lock().await;

        if self.unique_slots
            && bookings
                .iter()
                .any(|b| b.date == booking.date && b.time_slot == booking.time_slot)
        {
            return Err(BookingError::Conflict(format!(
                "{} on {} is already booked",
                booking.time_slot, booking.date
            )));
        }

        let booking = booking.into_booking(Uuid::new_v4(), Utc::now());
        bookings.push(booking.clone());
        Ok(booking)
    }

    async fn bookings_on(&self, date: NaiveDate) -> BookingResult<Vec<Booking>> {
        let bookings = self.bookings.lock().await;
        Ok(bookings.iter().filter(|b| b.date == date).cloned().collect())
    }

    async fn list_bookings(&self) -> BookingResult<Vec<Booking>> {
        let mut bookings = self.bookings.lock().await.clone();
        bookings.sort_by(|a, b| {
            (a.date, a.time_slot, a.created_at).cmp(&(b.date, b.time_slot, b.created_at))
        });
        Ok(bookings)
    }

    async fn delete_booking(&self, id: Uuid) -> BookingResult<bool> {
        let mut bookings = self.bookings.lock().await;
        let before = bookings.len();
        bookings.retain(|b| b.id != id);
        Ok(bookings.len() != before)
    }
}
