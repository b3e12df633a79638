//! # Scheduling flow
//!
//! The booking page walks a visitor through three steps: pick a business day,
//! pick one of that day's free slots, then leave contact details and submit.
//! Nothing is reserved while the visitor is in the flow; abandoning it at any
//! step leaves no trace on the server.
//!
//! The flow also enforces the date-picker policies the resolver leaves to its
//! caller: weekends and days in the past cannot be selected.

use chrono::NaiveDate;
use meetbook_core::{
    calendar::BusinessCalendar,
    models::{
        booking::{Booking, CreateBookingRequest},
        time_slot::TimeSlot,
    },
};
use thiserror::Error;

use crate::client::AvailabilityView;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("Meetings cannot be scheduled on weekends ({0})")]
    Weekend(NaiveDate),

    #[error("{0} is in the past")]
    PastDate(NaiveDate),

    #[error("Please select a date")]
    NoDateSelected,

    #[error("Please select a time")]
    NoTimeSelected,

    #[error("{0} is no longer available")]
    SlotUnavailable(TimeSlot),

    #[error("Please enter your {0}")]
    MissingField(&'static str),

    #[error("This meeting has already been booked")]
    AlreadySubmitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    PickDate,
    PickTime {
        date: NaiveDate,
        availability: Option<AvailabilityView>,
    },
    Details {
        date: NaiveDate,
        slot: TimeSlot,
        availability: Option<AvailabilityView>,
    },
    Submitted(Booking),
}

#[derive(Debug, Clone)]
pub struct SchedulingFlow {
    step: Step,
}

impl Default for SchedulingFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingFlow {
    pub fn new() -> Self {
        Self {
            step: Step::PickDate,
        }
    }

    pub fn step(&self) -> &Step {
        &self.step
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        match &self.step {
            Step::PickDate => None,
            Step::PickTime { date, .. } | Step::Details { date, .. } => Some(*date),
            Step::Submitted(booking) => Some(booking.date),
        }
    }

    pub fn selected_slot(&self) -> Option<TimeSlot> {
        match &self.step {
            Step::Details { slot, .. } => Some(*slot),
            Step::Submitted(booking) => Some(booking.time_slot),
            _ => None,
        }
    }

    fn ensure_open(&self) -> Result<(), FlowError> {
        match self.step {
            Step::Submitted(_) => Err(FlowError::AlreadySubmitted),
            _ => Ok(()),
        }
    }

    /// Picks a day. Choosing a new day drops any previously chosen time.
    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<(), FlowError> {
        self.ensure_open()?;

        if BusinessCalendar::is_weekend(date) {
            return Err(FlowError::Weekend(date));
        }
        if date < today {
            return Err(FlowError::PastDate(date));
        }

        self.step = Step::PickTime {
            date,
            availability: None,
        };
        Ok(())
    }

    /// Attaches availability loaded for the picked day. Returns false when the
    /// view belongs to a different day, e.g. a slow response for a date the
    /// visitor already moved away from.
    pub fn show_availability(&mut self, view: AvailabilityView) -> bool {
        match &mut self.step {
            Step::PickTime { date, availability } | Step::Details { date, availability, .. }
                if *date == view.date =>
            {
                *availability = Some(view);
                true
            }
            _ => false,
        }
    }

    /// Picks a slot on the chosen day.
    pub fn select_time(&mut self, slot: TimeSlot) -> Result<(), FlowError> {
        let (date, availability) = match &self.step {
            Step::PickDate => return Err(FlowError::NoDateSelected),
            Step::PickTime { date, availability } | Step::Details { date, availability, .. } => {
                (*date, availability.clone())
            }
            Step::Submitted(_) => return Err(FlowError::AlreadySubmitted),
        };

        if let Some(view) = &availability {
            if !view.is_available(slot) {
                return Err(FlowError::SlotUnavailable(slot));
            }
        }

        self.step = Step::Details {
            date,
            slot,
            availability,
        };
        Ok(())
    }

    /// Goes one step back, keeping what was chosen before that step.
    pub fn back(&mut self) {
        self.step = match std::mem::replace(&mut self.step, Step::PickDate) {
            Step::Details {
                date, availability, ..
            } => Step::PickTime { date, availability },
            Step::PickTime { .. } | Step::PickDate => Step::PickDate,
            submitted @ Step::Submitted(_) => submitted,
        };
    }

    /// Builds the booking request from the visitor's details.
    pub fn submission(
        &self,
        name: &str,
        email: &str,
        message: Option<&str>,
    ) -> Result<CreateBookingRequest, FlowError> {
        let (date, slot) = match &self.step {
            Step::PickDate => return Err(FlowError::NoDateSelected),
            Step::PickTime { .. } => return Err(FlowError::NoTimeSelected),
            Step::Details { date, slot, .. } => (*date, *slot),
            Step::Submitted(_) => return Err(FlowError::AlreadySubmitted),
        };

        if name.trim().is_empty() {
            return Err(FlowError::MissingField("name"));
        }
        if email.trim().is_empty() {
            return Err(FlowError::MissingField("email"));
        }

        Ok(CreateBookingRequest {
            name: Some(name.trim().to_string()),
            email: Some(email.trim().to_string()),
            date: Some(date.format("%Y-%m-%d").to_string()),
            time: Some(slot.label()),
            message: message.map(str::to_string),
        })
    }

    /// Records the booking the API confirmed.
    pub fn complete(&mut self, booking: Booking) {
        self.step = Step::Submitted(booking);
    }
}
