//! Contact records and the in-memory address book.

use chrono::NaiveDate;
use std::fmt;

mod birthday;
mod validation;

pub use birthday::UpcomingBirthday;
pub use validation::{parse_birthday, validate_phone_format, BIRTHDAY_FORMAT};

/// Custom error type for contact operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Invalid phone number '{0}': expected exactly ten digits")]
    InvalidPhone(String),
    #[error("Invalid birthday '{0}': expected DD.MM.YYYY")]
    InvalidBirthday(String),
    #[error("Phone number '{0}' is not listed for this contact")]
    PhoneNotFound(String),
}

/// A single contact: name, phone numbers, optional birthday.
///
/// The name is fixed at creation time; there is no rename operation.
#[derive(Debug, Clone)]
pub struct Record {
    name: String,
    phones: Vec<String>,
    birthday: Option<NaiveDate>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), phones: Vec::new(), birthday: None }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Phone numbers in the order they were added. Duplicates are kept;
    /// `edit_phone` only ever touches the first match.
    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<NaiveDate> {
        self.birthday
    }

    /// Append a phone number after validating its format.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ContactError> {
        if !validation::validate_phone_format(phone) {
            return Err(ContactError::InvalidPhone(phone.to_string()));
        }
        self.phones.push(phone.to_string());
        Ok(())
    }

    /// Replace the first occurrence of `old` with `new`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ContactError> {
        if !validation::validate_phone_format(new) {
            return Err(ContactError::InvalidPhone(new.to_string()));
        }
        let slot = self
            .phones
            .iter_mut()
            .find(|phone| phone.as_str() == old)
            .ok_or_else(|| ContactError::PhoneNotFound(old.to_string()))?;
        *slot = new.to_string();
        Ok(())
    }

    /// Set the birthday from its DD.MM.YYYY textual form.
    pub fn add_birthday(&mut self, text: &str) -> Result<(), ContactError> {
        let parsed = validation::parse_birthday(text)
            .ok_or_else(|| ContactError::InvalidBirthday(text.to_string()))?;
        self.birthday = Some(parsed);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phones.join("; "))?;
        if let Some(birthday) = self.birthday {
            write!(f, ", birthday {}", birthday.format(BIRTHDAY_FORMAT))?;
        }
        Ok(())
    }
}

/// In-memory collection of records, keyed by contact name.
///
/// Backed by a vector so iteration follows insertion order; lookups are
/// linear, which is fine at address-book scale.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any existing entry with the same name.
    /// Callers that care about the distinction are expected to `find`
    /// first; the `add` command relies on that to report added vs updated.
    pub fn add_record(&mut self, record: Record) {
        match self.records.iter_mut().find(|r| r.name == record.name) {
            Some(slot) => *slot = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name == name)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose next birthday falls within `[today, today + window_days)`.
    ///
    /// Occurrences on a weekend are congratulated the following Monday.
    /// Results follow address-book insertion order, not congratulation
    /// date order.
    pub fn upcoming_birthdays(&self, window_days: i64, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let occurrence = birthday::next_occurrence(record.birthday?, today);
                let days_until = (occurrence - today).num_days();
                if !(0..window_days).contains(&days_until) {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name.clone(),
                    congratulation_date: birthday::congratulation_date(occurrence),
                })
            })
            .collect()
    }
}
