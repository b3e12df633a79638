use chrono::{NaiveDate, TimeZone, Utc};
use meetbook_core::{calendar::BusinessCalendar, errors::BookingError};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn test_parse_plain_date_ignores_timezone() {
    let zurich = BusinessCalendar::from_name("Europe/Zurich").unwrap();
    let utc = BusinessCalendar::default();

    assert_eq!(zurich.parse_date(Some("2025-03-10")).unwrap(), date(2025, 3, 10));
    assert_eq!(utc.parse_date(Some(" 2025-03-10 ")).unwrap(), date(2025, 3, 10));
}

#[rstest]
// 23:30 UTC on the 9th is already the 10th in Zurich (UTC+1 in March)
#[case("Europe/Zurich", "2025-03-09T23:30:00Z", date(2025, 3, 10))]
#[case("UTC", "2025-03-09T23:30:00Z", date(2025, 3, 9))]
// 02:00 UTC on the 10th is still the 9th in New York
#[case("America/New_York", "2025-03-10T02:00:00Z", date(2025, 3, 9))]
#[case("America/New_York", "2025-03-10T00:30:00-04:00", date(2025, 3, 10))]
fn test_parse_timestamp_uses_business_day(
    #[case] timezone: &str,
    #[case] raw: &str,
    #[case] expected: NaiveDate,
) {
    let calendar = BusinessCalendar::from_name(timezone).unwrap();
    assert_eq!(calendar.parse_date(Some(raw)).unwrap(), expected);
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("   "))]
#[case(Some("tomorrow"))]
#[case(Some("2025-13-01"))]
#[case(Some("2025-02-30"))]
#[case(Some("03/10/2025"))]
fn test_parse_rejects_missing_or_malformed_dates(#[case] raw: Option<&str>) {
    match BusinessCalendar::default().parse_date(raw) {
        Err(BookingError::InvalidInput(_)) => {}
        other => panic!("Expected InvalidInput, got: {:?}", other),
    }
}

#[test]
fn test_unknown_timezone_is_invalid_input() {
    match BusinessCalendar::from_name("Mars/Olympus_Mons") {
        Err(BookingError::InvalidInput(message)) => assert!(message.contains("Mars/Olympus_Mons")),
        other => panic!("Expected InvalidInput, got: {:?}", other),
    }
}

#[test]
fn test_date_of_instant_near_midnight() {
    let calendar = BusinessCalendar::from_name("Asia/Tokyo").unwrap();
    let instant = Utc.with_ymd_and_hms(2025, 3, 10, 15, 30, 0).unwrap();
    assert_eq!(calendar.date_of(instant), date(2025, 3, 11));
}

#[rstest]
#[case(date(2025, 3, 8), true)]
#[case(date(2025, 3, 9), true)]
#[case(date(2025, 3, 10), false)]
#[case(date(2025, 3, 14), false)]
fn test_is_weekend(#[case] day: NaiveDate, #[case] expected: bool) {
    assert_eq!(BusinessCalendar::is_weekend(day), expected);
}

#[rstest]
#[case::unset(None)]
#[case::blank(Some("  "))]
fn test_missing_timezone_setting_means_utc(#[case] value: Option<&str>) {
    assert_eq!(
        BusinessCalendar::from_setting(value).unwrap(),
        BusinessCalendar::default()
    );
}

#[test]
fn test_timezone_setting_is_parsed() {
    let tokyo = BusinessCalendar::from_setting(Some("Asia/Tokyo")).unwrap();
    assert_eq!(tokyo.timezone(), chrono_tz::Asia::Tokyo);

    let err = BusinessCalendar::from_setting(Some("Mars/Olympus")).unwrap_err();
    assert!(matches!(err, BookingError::InvalidInput(_)));
}

#[test]
fn test_today_is_the_business_day() {
    // Kiritimati is UTC+14, so its day differs from UTC for most of the UTC day.
    let calendar = BusinessCalendar::from_setting(Some("Pacific/Kiritimati")).unwrap();

    let before = Utc::now().with_timezone(&chrono_tz::Pacific::Kiritimati).date_naive();
    let today = calendar.today();
    let after = Utc::now().with_timezone(&chrono_tz::Pacific::Kiritimati).date_naive();

    assert!(today == before || today == after);
}
