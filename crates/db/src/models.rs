use chrono::{DateTime, NaiveDate, Utc};
use meetbook_core::{errors::BookingError, models::booking::Booking};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub booking_date: NaiveDate,
    pub time_slot: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbBooking> for Booking {
    type Error = BookingError;

    /// Fails if the stored label is no longer part of the slot catalog.
    fn try_from(row: DbBooking) -> Result<Self, Self::Error> {
        let time_slot = row.time_slot.parse().map_err(|_| {
            BookingError::Internal(
                format!(
                    "booking {} has unknown time slot '{}'",
                    row.id, row.time_slot
                )
                .into(),
            )
        })?;

        Ok(Booking {
            id: row.id,
            name: row.name,
            email: row.email,
            date: row.booking_date,
            time_slot,
            message: row.message,
            created_at: row.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(time_slot: &str) -> DbBooking {
        DbBooking {
            id: Uuid::new_v4(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            booking_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            time_slot: time_slot.to_string(),
            message: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn converts_catalog_rows() {
        let db_row = row("03:00 PM");
        let booking = Booking::try_from(db_row.clone()).unwrap();

        assert_eq!(booking.id, db_row.id);
        assert_eq!(booking.date, db_row.booking_date);
        assert_eq!(booking.time_slot.label(), "03:00 PM");
    }

    #[test]
    fn rejects_rows_outside_catalog() {
        match Booking::try_from(row("11:30 PM")) {
            Err(BookingError::Internal(e)) => assert!(e.to_string().contains("11:30 PM")),
            other => panic!("Expected Internal error, got: {:?}", other),
        }
    }
}
