use meetbook_client::config::ClientConfig;
use std::time::Duration;

#[test]
fn test_default_points_at_local_api() {
    let config = ClientConfig::default();

    assert_eq!(config.api_base_url, "http://localhost:3000");
    assert_eq!(config.timeout(), Duration::from_secs(10));
}

#[test]
fn test_endpoint_strips_trailing_slash() {
    let config = ClientConfig::new("https://example.com/", 5);

    assert_eq!(config.endpoint("/api/bookings"), "https://example.com/api/bookings");
    assert_eq!(config.timeout(), Duration::from_secs(5));
}
