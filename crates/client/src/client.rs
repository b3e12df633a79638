use chrono::NaiveDate;
use meetbook_core::models::{
    availability::AvailabilityResponse,
    booking::{Booking, CreateBookingRequest},
    time_slot::{SLOT_CATALOG, TimeSlot},
};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ClientConfig;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

impl ClientError {
    /// True when the API rejected the request content (400/422) and the user
    /// can correct it.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ClientError::Api { status, .. }
                if *status == StatusCode::BAD_REQUEST || *status == StatusCode::UNPROCESSABLE_ENTITY
        )
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Availability as shown on the scheduling page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityView {
    pub date: NaiveDate,
    pub available: Vec<TimeSlot>,
    pub busy: Vec<TimeSlot>,
    /// True when the API could not be asked and every slot is shown open.
    pub degraded: bool,
}

impl AvailabilityView {
    pub fn fully_open(date: NaiveDate) -> Self {
        Self {
            date,
            available: SLOT_CATALOG.to_vec(),
            busy: Vec::new(),
            degraded: true,
        }
    }

    pub fn is_available(&self, slot: TimeSlot) -> bool {
        self.available.contains(&slot)
    }
}

#[derive(Debug, Clone)]
pub struct BookingClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl BookingClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { http, config })
    }

    async fn error_from(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string(),
        };
        ClientError::Api { status, message }
    }

    /// Asks the API for availability on `date`; errors propagate.
    pub async fn fetch_availability(&self, date: NaiveDate) -> Result<AvailabilityResponse, ClientError> {
        let url = self.config.endpoint("/api/availability");
        debug!("Fetching availability for {} from {}", date, url);

        let response = self
            .http
            .get(url)
            .query(&[("date", date.format("%Y-%m-%d").to_string())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        Ok(response.json::<AvailabilityResponse>().await?)
    }

    /// Availability for the scheduling page. Any failure, whether the API is
    /// unreachable, answers with an error status or sends an unreadable body,
    /// shows every slot as available.
    pub async fn availability_or_open(&self, date: NaiveDate) -> AvailabilityView {
        match self.fetch_availability(date).await {
            Ok(response) => AvailabilityView {
                date,
                available: response.available_slots,
                busy: response.busy_slots,
                degraded: false,
            },
            Err(e) => {
                warn!("Could not load availability for {}, showing all slots: {}", date, e);
                AvailabilityView::fully_open(date)
            }
        }
    }

    /// Submits a booking.
    pub async fn create_booking(&self, request: &CreateBookingRequest) -> Result<Booking, ClientError> {
        let response = self
            .http
            .post(self.config.endpoint("/api/bookings"))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        Ok(response.json::<Booking>().await?)
    }
}
