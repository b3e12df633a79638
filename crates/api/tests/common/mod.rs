#![allow(dead_code)]

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, header::AUTHORIZATION};
use axum_test::TestServer;
use meetbook_api::{ApiState, app, middleware::auth};
use meetbook_core::{
    calendar::BusinessCalendar,
    models::booking::CreateBookingRequest,
    scheduler::{BookingPolicy, Scheduler},
    store::{BookingStore, InMemoryBookingStore},
};

pub const ADMIN_TOKEN: &str = "correct-horse-battery-staple";

pub struct TestContext {
    pub store: Arc<dyn BookingStore>,
    pub policy: BookingPolicy,
    pub calendar: BusinessCalendar,
    pub fail_open: bool,
    pub admin_token_hash: Option<String>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryBookingStore::new()))
    }

    pub fn with_store(store: Arc<dyn BookingStore>) -> Self {
        Self {
            store,
            policy: BookingPolicy::default(),
            calendar: BusinessCalendar::default(),
            fail_open: true,
            admin_token_hash: None,
        }
    }

    pub fn with_admin(mut self) -> Self {
        self.admin_token_hash = Some(auth::hash_password(ADMIN_TOKEN).unwrap());
        self
    }

    pub fn build_state(&self) -> Arc<ApiState> {
        Arc::new(ApiState {
            scheduler: Scheduler::new(self.store.clone(), self.calendar, self.policy),
            fail_open: self.fail_open,
            admin_token_hash: self.admin_token_hash.clone(),
        })
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(app(self.build_state())).unwrap()
    }
}

pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    )
}

pub fn booking_request(date: &str, time: &str) -> CreateBookingRequest {
    CreateBookingRequest {
        name: Some("Margaret Hamilton".to_string()),
        email: Some("margaret@example.com".to_string()),
        date: Some(date.to_string()),
        time: Some(time.to_string()),
        message: Some("Apollo guidance software".to_string()),
    }
}
