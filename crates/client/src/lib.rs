//! # meetbook client
//!
//! Talks to the meetbook API on behalf of the scheduling page: fetches
//! availability (falling back to "everything free" when the API cannot be
//! reached), submits bookings, and drives the multi-step scheduling flow.

pub mod client;
pub mod config;
pub mod flow;

pub use client::{AvailabilityView, BookingClient, ClientError};
pub use flow::{FlowError, SchedulingFlow, Step};
