//! The CalendarDate value type.
//!
//! This module defines the calendar-day foundation for all cycle arithmetic.
//! A [`CalendarDate`] holds only a wall-clock (year, month, day) value and is
//! constructed exclusively from explicit components or from the canonical
//! `YYYY-MM-DD` string form — never from a time-zone-sensitive timestamp,
//! which is how one-day drift near midnight creeps into rostering systems.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

/// A wall-clock calendar day, independent of time-of-day and time zone.
///
/// Equality, ordering, and hashing are by calendar value only.
///
/// # Example
///
/// ```
/// use roster_engine::models::CalendarDate;
///
/// let start = CalendarDate::new(2024, 1, 1).unwrap();
/// let later = CalendarDate::parse("2024-01-15").unwrap();
/// assert_eq!(later.days_since(start), 14);
/// assert_eq!(later.to_string(), "2024-01-15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a calendar date from explicit integer components.
    ///
    /// # Arguments
    ///
    /// * `year` - The calendar year
    /// * `month` - The 1-indexed month
    /// * `day` - The day of the month
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] if the components do not name a
    /// real calendar day (e.g. 2024-02-30).
    pub fn new(year: i32, month: u32, day: u32) -> EngineResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(EngineError::InvalidDate { year, month, day })
    }

    /// Parses a calendar date from its canonical `YYYY-MM-DD` string form.
    ///
    /// Validation is strict: exactly ten characters, zero-padded components,
    /// dashes at positions 4 and 7. Anything else — including variants chrono
    /// would normally accept, such as `2024-1-5` — is rejected, because date
    /// keys are exact-match lookup keys and a non-canonical key would silently
    /// miss its record.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DateParse`] for any non-canonical input.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::CalendarDate;
    ///
    /// assert!(CalendarDate::parse("2024-03-05").is_ok());
    /// assert!(CalendarDate::parse("2024-3-5").is_err());
    /// assert!(CalendarDate::parse("2024-02-30").is_err());
    /// ```
    pub fn parse(input: &str) -> EngineResult<Self> {
        let bytes = input.as_bytes();
        let canonical_shape = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !canonical_shape {
            return Err(EngineError::DateParse {
                input: input.to_string(),
            });
        }

        // The shape check guarantees these slices are pure ASCII digits.
        let year: i32 = input[0..4].parse().map_err(|_| EngineError::DateParse {
            input: input.to_string(),
        })?;
        let month: u32 = input[5..7].parse().map_err(|_| EngineError::DateParse {
            input: input.to_string(),
        })?;
        let day: u32 = input[8..10].parse().map_err(|_| EngineError::DateParse {
            input: input.to_string(),
        })?;

        Self::new(year, month, day).map_err(|_| EngineError::DateParse {
            input: input.to_string(),
        })
    }

    /// Returns the year component.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the 1-indexed month component.
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day-of-month component.
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the signed number of whole days from `other` to `self`.
    ///
    /// Positive when `self` is after `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::CalendarDate;
    ///
    /// let start = CalendarDate::new(2024, 1, 1).unwrap();
    /// let date = CalendarDate::new(2024, 1, 8).unwrap();
    /// assert_eq!(date.days_since(start), 7);
    /// assert_eq!(start.days_since(date), -7);
    /// ```
    pub fn days_since(self, other: CalendarDate) -> i64 {
        (self.0 - other.0).num_days()
    }

    /// Returns the date offset by the given number of days, or `None` if the
    /// result would fall outside the supported calendar range.
    pub fn plus_days(self, days: i64) -> Option<Self> {
        self.0
            .checked_add_signed(chrono::Duration::days(days))
            .map(Self)
    }

    /// Combines this date with a time-of-day into a local datetime.
    pub fn at(self, time: NaiveTime) -> NaiveDateTime {
        self.0.and_time(time)
    }

    /// Returns the canonical `YYYY-MM-DD` key for this date.
    pub fn date_key(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        CalendarDate::parse(&raw).map_err(serde::de::Error::custom)
    }
}
