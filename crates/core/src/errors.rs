use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Booking store unavailable: {0}")]
    UpstreamUnavailable(#[from] eyre::Report),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl BookingError {
    /// True for errors the user can fix by correcting the request.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            BookingError::InvalidInput(_) | BookingError::ValidationFailed(_)
        )
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
