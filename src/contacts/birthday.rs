//! Upcoming-birthday date arithmetic.
//
// Pure functions of (birthday, today) so the query can be exercised
// against fixed dates.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// One entry in the `birthdays` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

/// This year's occurrence of `birthday`, rolled to next year once the
/// date has passed.
pub(crate) fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(birthday, today.year());
    if this_year < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        this_year
    }
}

// Feb 29 birthdays fall on Mar 1 outside leap years.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).unwrap())
}

/// Weekend occurrences are congratulated on the following Monday.
pub(crate) fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    match occurrence.weekday() {
        Weekday::Sat => occurrence + Duration::days(2),
        Weekday::Sun => occurrence + Duration::days(1),
        _ => occurrence,
    }
}
