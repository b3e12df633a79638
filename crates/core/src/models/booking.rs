use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    calendar::BusinessCalendar,
    errors::{BookingError, BookingResult},
    models::time_slot::TimeSlot,
};

/// A confirmed meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub date: NaiveDate,
    #[serde(rename = "time")]
    pub time_slot: TimeSlot,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Booking form as submitted by the scheduler. Every field is optional on the
/// wire so that missing values are reported as validation failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A validated booking ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub message: Option<String>,
}

impl NewBooking {
    pub fn into_booking(self, id: Uuid, created_at: DateTime<Utc>) -> Booking {
        Booking {
            id,
            name: self.name,
            email: self.email,
            date: self.date,
            time_slot: self.time_slot,
            message: self.message,
            created_at,
        }
    }
}

fn required(value: Option<&str>, field: &str) -> BookingResult<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(BookingError::ValidationFailed(format!("{} is required", field))),
    }
}

/// Loose address check: one `@`, non-empty local part, dotted domain, no
/// whitespace.
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

impl CreateBookingRequest {
    /// Checks the request and normalizes it into a [`NewBooking`].
    ///
    /// Missing fields, a slot outside the catalog and a malformed email fail
    /// with `ValidationFailed`; a present but unparsable date fails with
    /// `InvalidInput`.
    pub fn validate(&self, calendar: &BusinessCalendar) -> BookingResult<NewBooking> {
        let name = required(self.name.as_deref(), "name")?;
        let email = required(self.email.as_deref(), "email")?;
        let raw_date = required(self.date.as_deref(), "date")?;
        let raw_time = required(self.time.as_deref(), "time")?;

        if !is_plausible_email(&email) {
            return Err(BookingError::ValidationFailed(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        let time_slot: TimeSlot = raw_time.parse()?;
        let date = calendar.parse_date(Some(&raw_date))?;

        let message = self
            .message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        Ok(NewBooking {
            name,
            email,
            date,
            time_slot,
            message,
        })
    }
}
