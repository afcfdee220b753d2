//! Validation functions for contact data.
//
// Format gates run before any mutation so a failed command leaves the
// record untouched.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Display and parse format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").unwrap());
static BIRTHDAY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").unwrap());

/// Validate phone string is exactly ten ASCII digits
pub fn validate_phone_format(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Parse a birthday in DD.MM.YYYY form.
///
/// The regex enforces the field shape; chrono rejects impossible
/// calendar dates such as 32.01 or 30.02.
pub fn parse_birthday(text: &str) -> Option<NaiveDate> {
    if !BIRTHDAY_RE.is_match(text) {
        return None;
    }
    NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT).ok()
}
