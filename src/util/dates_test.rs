use super::*;

#[test]
fn api_birthday_becomes_input_value() {
    assert_eq!(iso_to_input("2025-12-17T00:00:00"), "2025-12-17");
    assert_eq!(iso_to_input("2025-12-17"), "2025-12-17");
}

#[test]
fn unparseable_birthday_becomes_empty() {
    assert_eq!(iso_to_input(""), "");
    assert_eq!(iso_to_input("17/12/2025"), "");
}

#[test]
fn input_value_is_sent_day_first() {
    assert_eq!(input_to_api("2025-12-17").as_deref(), Some("17/12/2025"));
    assert_eq!(input_to_api("2024-02-05").as_deref(), Some("05/02/2024"));
}

#[test]
fn empty_or_invalid_input_is_null() {
    assert_eq!(input_to_api(""), None);
    assert_eq!(input_to_api("2025-13-40"), None);
    assert_eq!(input_to_api("yesterday"), None);
}

#[test]
fn created_date_uses_short_month() {
    assert_eq!(format_created(Some("2025-01-04T10:15:00")), "04 Jan 2025");
    assert_eq!(format_created(Some("2025-01-04T10:15:00.123")), "04 Jan 2025");
    assert_eq!(format_created(Some("2025-03-09T08:00:00Z")), "09 Mar 2025");
}

#[test]
fn missing_created_date_is_dash() {
    assert_eq!(format_created(None), "-");
    assert_eq!(format_created(Some("soon")), "-");
}

#[test]
fn now_iso_is_rfc3339() {
    let now = now_iso();
    assert!(DateTime::parse_from_rfc3339(&now).is_ok(), "{now}");
    assert!(now.ends_with('Z'));
}
