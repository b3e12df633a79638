use async_trait::async_trait;
use chrono::NaiveDate;
use meetbook_core::{
    errors::BookingResult,
    models::booking::{Booking, NewBooking},
    store::BookingStore,
};
use mockall::mock;
use uuid::Uuid;

// Mock booking store for testing
mock! {
    pub BookingStore {}

    #[async_trait]
    impl BookingStore for BookingStore {
        async fn insert_booking(&self, booking: NewBooking) -> BookingResult<Booking>;

        async fn bookings_on(&self, date: NaiveDate) -> BookingResult<Vec<Booking>>;

        async fn list_bookings(&self) -> BookingResult<Vec<Booking>>;

        async fn delete_booking(&self, id: Uuid) -> BookingResult<bool>;
    }
}
