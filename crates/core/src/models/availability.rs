use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::time_slot::{SLOT_CATALOG, TimeSlot};

/// Partition of the slot catalog for one date. `available` and `busy` are
/// disjoint, both in catalog order, and together cover the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityResult {
    pub date: NaiveDate,
    pub available: Vec<TimeSlot>,
    pub busy: Vec<TimeSlot>,
}

impl AvailabilityResult {
    /// Everything free, used when bookings cannot be read.
    pub fn fully_open(date: NaiveDate) -> Self {
        Self {
            date,
            available: SLOT_CATALOG.to_vec(),
            busy: Vec::new(),
        }
    }

    /// Splits the catalog into busy and available slots.
    ///
    /// A slot is busy when it is booked or lies within `buffer_slots`
    /// catalog positions of a booked slot. Duplicate bookings of the same
    /// slot count once.
    pub fn partition<I>(date: NaiveDate, booked: I, buffer_slots: u8) -> Self
    where
        I: IntoIterator<Item = TimeSlot>,
    {
        let booked: BTreeSet<usize> = booked.into_iter().map(|slot| slot.index()).collect();
        let buffer = usize::from(buffer_slots);

        let (busy, available): (Vec<TimeSlot>, Vec<TimeSlot>) =
            SLOT_CATALOG.iter().copied().partition(|slot| {
                let idx = slot.index();
                booked
                    .range(idx.saturating_sub(buffer)..=idx + buffer)
                    .next()
                    .is_some()
            });

        Self {
            date,
            available,
            busy,
        }
    }

    pub fn is_available(&self, slot: TimeSlot) -> bool {
        self.available.contains(&slot)
    }
}

/// Wire shape of an availability answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub available_slots: Vec<TimeSlot>,
    pub busy_slots: Vec<TimeSlot>,
}

impl From<AvailabilityResult> for AvailabilityResponse {
    fn from(result: AvailabilityResult) -> Self {
        Self {
            available_slots: result.available,
            busy_slots: result.busy,
        }
    }
}

/// Query string of the availability endpoint. The date stays a raw string so
/// that absence and malformed values are reported as `InvalidInput`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    pub date: Option<String>,
}
