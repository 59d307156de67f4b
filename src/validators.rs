use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Input validation utilities

// Compiled once at startup; the pattern is a hardcoded constant.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("hardcoded email regex is invalid - fix source code")
});

/// Validate email format (RFC 5322 simplified)
pub fn validate_email(email: &str) -> bool {
    !email.is_empty() && email.len() <= 254 && EMAIL_REGEX.is_match(email)
}

/// Combine an event date (`YYYY-MM-DD`) and time (`HH:MM` or `HH:MM:SS`)
/// into one UTC instant.
///
/// Returns `None` when either part does not parse or the calendar date does
/// not exist (e.g. 2024-02-30).
pub fn parse_event_instant(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()?;

    Some(date.and_time(time).and_utc())
}
