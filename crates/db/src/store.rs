//! Postgres implementation of the booking store.

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::WrapErr;
use meetbook_core::{
    errors::{BookingError, BookingResult},
    models::booking::{Booking, NewBooking},
    store::BookingStore,
};
use uuid::Uuid;

use crate::{DbPool, models::DbBooking, repositories::booking};

#[derive(Clone)]
pub struct PgBookingStore {
    pool: DbPool,
}

impl PgBookingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn into_bookings(rows: Vec<DbBooking>) -> BookingResult<Vec<Booking>> {
    rows.into_iter().map(Booking::try_from).collect()
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn insert_booking(&self, new_booking: NewBooking) -> BookingResult<Booking> {
        match booking::create_booking(&self.pool, &new_booking).await {
            Ok(row) => Booking::try_from(row),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(BookingError::Conflict(format!(
                    "{} on {} is already booked",
                    new_booking.time_slot, new_booking.date
                )))
            }
            Err(e) => Err(BookingError::UpstreamUnavailable(
                eyre::Report::new(e).wrap_err("Failed to insert booking"),
            )),
        }
    }

    async fn bookings_on(&self, date: NaiveDate) -> BookingResult<Vec<Booking>> {
        let rows = booking::get_bookings_by_date(&self.pool, date)
            .await
            .wrap_err_with(|| format!("Failed to load bookings for {}", date))?;
        into_bookings(rows)
    }

    async fn list_bookings(&self) -> BookingResult<Vec<Booking>> {
        let rows = booking::list_bookings(&self.pool)
            .await
            .wrap_err("Failed to list bookings")?;
        let mut bookings = into_bookings(rows)?;
        // Labels do not sort chronologically ("01:00 PM" < "08:00 AM").
        bookings.sort_by(|a, b| {
            (a.date, a.time_slot, a.created_at).cmp(&(b.date, b.time_slot, b.created_at))
        });
        Ok(bookings)
    }

    async fn delete_booking(&self, id: Uuid) -> BookingResult<bool> {
        let deleted = booking::delete_booking(&self.pool, id)
            .await
            .wrap_err_with(|| format!("Failed to delete booking {}", id))?;
        Ok(deleted)
    }
}
