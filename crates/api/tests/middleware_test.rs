use axum::http::{HeaderMap, HeaderValue, StatusCode, header::AUTHORIZATION};
use meetbook_api::middleware::{auth, error_handling::map_error};
use meetbook_core::errors::BookingError;
use rstest::rstest;

#[rstest]
#[case(BookingError::InvalidInput("date is required".into()), StatusCode::BAD_REQUEST)]
#[case(BookingError::ValidationFailed("name is required".into()), StatusCode::UNPROCESSABLE_ENTITY)]
#[case(BookingError::NotFound("Booking not found".into()), StatusCode::NOT_FOUND)]
#[case(BookingError::Conflict("already booked".into()), StatusCode::CONFLICT)]
#[case(BookingError::Authentication("Invalid admin token".into()), StatusCode::UNAUTHORIZED)]
#[case(BookingError::UpstreamUnavailable(eyre::eyre!("connection refused")), StatusCode::SERVICE_UNAVAILABLE)]
#[case(
    BookingError::Internal(Box::new(std::io::Error::new(std::io::ErrorKind::Other, "Internal error"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: BookingError, #[case] expected: StatusCode) {
    let response = map_error(error);
    assert_eq!(response.status(), expected);
}

#[test]
fn test_hash_password() {
    let hashed = auth::hash_password("admin-token").unwrap();

    assert_ne!(hashed, "admin-token");
    assert!(hashed.starts_with("$argon2"));
    assert!(auth::verify_password("admin-token", &hashed).unwrap());
    assert!(!auth::verify_password("wrong-token", &hashed).unwrap());
}

#[test]
fn test_verify_password_rejects_garbage_hash() {
    assert!(auth::verify_password("admin-token", "not-a-phc-string").is_err());
}

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn test_require_admin() {
    let hash = auth::hash_password("s3cret").unwrap();

    assert!(auth::require_admin(&headers_with("Bearer s3cret"), Some(&hash)).is_ok());

    for headers in [
        HeaderMap::new(),
        headers_with("Bearer "),
        headers_with("Basic s3cret"),
        headers_with("Bearer nope"),
    ] {
        let err = auth::require_admin(&headers, Some(&hash)).unwrap_err();
        assert!(matches!(err.0, BookingError::Authentication(_)));
    }

    let err = auth::require_admin(&headers_with("Bearer s3cret"), None).unwrap_err();
    assert!(matches!(err.0, BookingError::Authentication(_)));
}
