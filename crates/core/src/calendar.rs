//! # Business calendar
//!
//! Booking dates are calendar days in one fixed business timezone. Clients
//! normally send `YYYY-MM-DD`, but browsers that serialize a date picker
//! value with `toISOString()` send an RFC 3339 instant; those are converted
//! into the business timezone before the day is taken, so a booking made
//! just after local midnight never lands on the previous day.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;

use crate::errors::{BookingError, BookingResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessCalendar {
    timezone: Tz,
}

impl Default for BusinessCalendar {
    fn default() -> Self {
        Self { timezone: Tz::UTC }
    }
}

impl BusinessCalendar {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Builds a calendar from an IANA timezone name such as `Europe/Zurich`.
    pub fn from_name(name: &str) -> BookingResult<Self> {
        name.trim()
            .parse::<Tz>()
            .map(Self::new)
            .map_err(|e| BookingError::InvalidInput(format!("Unknown timezone '{}': {}", name, e)))
    }

    /// Builds a calendar from a `BUSINESS_TIMEZONE` setting; unset or blank
    /// means UTC.
    pub fn from_setting(value: Option<&str>) -> BookingResult<Self> {
        match value.map(str::trim) {
            Some(name) if !name.is_empty() => Self::from_name(name),
            _ => Ok(Self::default()),
        }
    }

    /// Reads `BUSINESS_TIMEZONE` from the environment.
    pub fn from_env() -> BookingResult<Self> {
        Self::from_setting(std::env::var("BUSINESS_TIMEZONE").ok().as_deref())
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Parses a date-only value or an RFC 3339 timestamp into a business day.
    pub fn parse_date(&self, raw: Option<&str>) -> BookingResult<NaiveDate> {
        let raw = match raw.map(str::trim) {
            Some(r) if !r.is_empty() => r,
            _ => return Err(BookingError::InvalidInput("date is required".to_string())),
        };

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(date);
        }

        DateTime::parse_from_rfc3339(raw)
            .map(|instant| instant.with_timezone(&self.timezone).date_naive())
            .map_err(|_| {
                BookingError::InvalidInput(format!(
                    "'{}' is not a valid date, expected YYYY-MM-DD",
                    raw
                ))
            })
    }

    /// Business day containing the given instant.
    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.timezone).date_naive()
    }

    pub fn today(&self) -> NaiveDate {
        self.date_of(Utc::now())
    }

    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}
