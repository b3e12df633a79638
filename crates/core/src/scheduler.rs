//! # Availability resolution and booking
//!
//! [`Scheduler`] answers "which of the daily slots are still bookable on this
//! date?" and records new bookings. It is stateless apart from its
//! configuration; every call goes straight to the [`BookingStore`].
//!
//! Under the default policy booking creation does not re-check availability,
//! so two submissions racing for the same slot can both succeed. Setting
//! [`BookingPolicy::reject_double_booking`] adds a pre-check against the
//! resolver and relies on the store's `(date, slot)` uniqueness constraint to
//! settle races.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    calendar::BusinessCalendar,
    errors::{BookingError, BookingResult},
    models::{
        availability::AvailabilityResult,
        booking::{Booking, CreateBookingRequest},
    },
    store::BookingStore,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingPolicy {
    /// Slots on either side of a booking that are also reported busy.
    pub buffer_slots: u8,
    /// Refuse a booking for a slot the resolver reports busy.
    pub reject_double_booking: bool,
}

#[derive(Clone)]
pub struct Scheduler {
    store: Arc<dyn BookingStore>,
    calendar: BusinessCalendar,
    policy: BookingPolicy,
}

impl Scheduler {
    pub fn new(store: Arc<dyn BookingStore>, calendar: BusinessCalendar, policy: BookingPolicy) -> Self {
        Self {
            store,
            calendar,
            policy,
        }
    }

    pub fn calendar(&self) -> &BusinessCalendar {
        &self.calendar
    }

    pub fn policy(&self) -> BookingPolicy {
        self.policy
    }

    /// Partitions the slot catalog for `date` into available and busy slots.
    ///
    /// Read-only. Fails with `UpstreamUnavailable` when bookings cannot be
    /// read.
    pub async fn resolve_availability(&self, date: NaiveDate) -> BookingResult<AvailabilityResult> {
        let bookings = self.store.bookings_on(date).await?;
        debug!("Found {} bookings on {}", bookings.len(), date);

        Ok(AvailabilityResult::partition(
            date,
            bookings.iter().map(|b| b.time_slot),
            self.policy.buffer_slots,
        ))
    }

    /// Like [`resolve_availability`](Self::resolve_availability), but an
    /// unreachable store yields the whole catalog as available instead of an
    /// error. Any other failure still propagates.
    pub async fn resolve_or_open(&self, date: NaiveDate) -> BookingResult<AvailabilityResult> {
        match self.resolve_availability(date).await {
            Err(BookingError::UpstreamUnavailable(e)) => {
                warn!("Availability lookup for {} failed, showing all slots: {}", date, e);
                Ok(AvailabilityResult::fully_open(date))
            }
            other => other,
        }
    }

    /// Validates and stores a booking.
    pub async fn create_booking(&self, request: &CreateBookingRequest) -> BookingResult<Booking> {
        let new_booking = request.validate(&self.calendar)?;

        if self.policy.reject_double_booking {
            let availability = self.resolve_availability(new_booking.date).await?;
            if !availability.is_available(new_booking.time_slot) {
                return Err(BookingError::Conflict(format!(
                    "{} on {} is no longer available",
                    new_booking.time_slot, new_booking.date
                )));
            }
        }

        let booking = self.store.insert_booking(new_booking).await?;
        info!(
            "Booked {} on {} for {} (id={})",
            booking.time_slot, booking.date, booking.email, booking.id
        );
        Ok(booking)
    }

    /// Bookings for one date, or all of them.
    pub async fn list_bookings(&self, date: Option<NaiveDate>) -> BookingResult<Vec<Booking>> {
        match date {
            Some(date) => self.store.bookings_on(date).await,
            None => self.store.list_bookings().await,
        }
    }

    pub async fn delete_booking(&self, id: Uuid) -> BookingResult<()> {
        if self.store.delete_booking(id).await? {
            info!("Deleted booking {}", id);
            Ok(())
        } else {
            Err(BookingError::NotFound(format!("Booking with ID {} not found", id)))
        }
    }
}
