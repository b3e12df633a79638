//! # meetbook core
//!
//! Domain types for the meeting scheduler: the fixed slot catalog, bookings,
//! availability results, the business calendar used to normalize dates, the
//! storage seam and the scheduler that resolves availability against it.

pub mod calendar;
pub mod errors;
pub mod models;
pub mod scheduler;
pub mod store;
