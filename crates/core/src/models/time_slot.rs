//! # Slot catalog
//!
//! Meetings are offered in eleven one-hour slots per business day, from
//! 08:00 AM to 06:00 PM. The catalog is a static table; a [`TimeSlot`] can
//! only be obtained from it, so every slot in the system is a catalog member.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::errors::BookingError;

/// Hour of day of the first slot in the catalog.
const FIRST_HOUR: u8 = 8;

/// Number of slots offered per business day.
pub const SLOTS_PER_DAY: usize = 11;

/// One entry of the daily slot catalog, serialized as its label
/// (e.g. `"10:00 AM"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    hour: u8,
}

/// The full catalog in display order.
pub const SLOT_CATALOG: [TimeSlot; SLOTS_PER_DAY] = [
    TimeSlot::at(8),
    TimeSlot::at(9),
    TimeSlot::at(10),
    TimeSlot::at(11),
    TimeSlot::at(12),
    TimeSlot::at(13),
    TimeSlot::at(14),
    TimeSlot::at(15),
    TimeSlot::at(16),
    TimeSlot::at(17),
    TimeSlot::at(18),
];

impl TimeSlot {
    const fn at(hour: u8) -> Self {
        Self { hour }
    }

    /// Returns the whole catalog.
    pub fn catalog() -> &'static [TimeSlot] {
        &SLOT_CATALOG
    }

    /// Position of this slot in the catalog.
    pub fn index(&self) -> usize {
        usize::from(self.hour - FIRST_HOUR)
    }

    /// Wall-clock start of the slot in the business timezone.
    pub fn start_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), 0, 0).unwrap_or_default()
    }

    /// Display label, 12-hour clock with a zero-padded hour.
    pub fn label(&self) -> String {
        let (hour, meridiem) = match self.hour {
            0 => (12, "AM"),
            h if h < 12 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        format!("{:02}:00 {}", hour, meridiem)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for TimeSlot {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SLOT_CATALOG
            .iter()
            .copied()
            .find(|slot| slot.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                BookingError::ValidationFailed(format!("'{}' is not a bookable time slot", wanted))
            })
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = BookingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.label()
    }
}

/// Labels of the whole catalog, in order.
pub fn catalog_labels() -> Vec<String> {
    SLOT_CATALOG.iter().map(TimeSlot::label).collect()
}
