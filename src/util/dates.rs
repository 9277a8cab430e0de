//! Date conversions between the API, `<input type="date">` and list columns.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

const INPUT_FORMAT: &str = "%Y-%m-%d";
const API_DATE_FORMAT: &str = "%d/%m/%Y";
const CREATED_FORMAT: &str = "%d %b %Y";

/// `2025-12-17T00:00:00` -> `2025-12-17`. Unparseable values become `""`.
pub fn iso_to_input(raw: &str) -> String {
    let day = raw.trim().split('T').next().unwrap_or_default();
    match NaiveDate::parse_from_str(day, INPUT_FORMAT) {
        Ok(date) => date.format(INPUT_FORMAT).to_string(),
        Err(_) => String::new(),
    }
}

/// `2025-12-17` -> `17/12/2025`. Empty or invalid input is `None`.
pub fn input_to_api(input: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(input.trim(), INPUT_FORMAT).ok()?;
    Some(date.format(API_DATE_FORMAT).to_string())
}

/// Render an API timestamp as `04 Jan 2025`; `-` when absent or unparseable.
pub fn format_created(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map_or_else(|| "-".to_owned(), |date| date.format(CREATED_FORMAT).to_string())
}

fn parse_timestamp(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, INPUT_FORMAT).ok()
}

/// Current UTC time as ISO-8601 with milliseconds, for audit fields.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
