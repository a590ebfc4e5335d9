//! Display helpers shared by the board and profile views.

use chrono::{DateTime, Datelike, NaiveDate};

/// Parse a date column. Accepts `YYYY-MM-DD`, with or without a time suffix,
/// and full RFC 3339 timestamps.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Whole years between `birth` and `today`.
///
/// The year difference is reduced by one when today's month/day falls before
/// the birth month/day. Birth dates in the future yield `None`.
#[must_use]
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

/// Age from a raw birth-date column. Unparseable or missing dates yield `None`.
#[must_use]
pub fn age_from_birth_date(birth_date: Option<&str>, today: NaiveDate) -> Option<u32> {
    age_on(parse_date(birth_date?)?, today)
}

/// Format total inches as feet and inches, e.g. `6' 9"`.
///
/// Zero or missing heights yield `None`.
#[must_use]
pub fn display_height(inches: Option<f64>) -> Option<String> {
    let inches = inches.filter(|h| *h > 0.0)?;
    let feet = (inches / 12.0).floor();
    let remainder = inches % 12.0;
    Some(format!("{feet}' {remainder}\""))
}

/// Round to one decimal place.
#[must_use]
pub fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
