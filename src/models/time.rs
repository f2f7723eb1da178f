//! Time-of-day parsing and serialization helpers.
//!
//! Presence records carry their day window as `HH:MM` strings (24-hour,
//! zero-padded). This module provides the strict parser plus serde helper
//! modules for fields carried as [`NaiveTime`].

use chrono::{NaiveTime, Timelike};

use crate::error::{EngineError, EngineResult};

/// Midnight, the start-of-day marker (`00:00`).
pub fn midnight() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).expect("00:00 is a valid time")
}

/// The end-of-day marker used by full-day presence windows (`23:59`).
pub fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 0).expect("23:59 is a valid time")
}

/// Parses a strict `HH:MM` time-of-day string.
///
/// # Errors
///
/// Returns [`EngineError::TimeParse`] unless the input is exactly five
/// characters, zero-padded, with a colon at position 2, naming a valid
/// 24-hour time.
///
/// # Example
///
/// ```
/// use roster_engine::models::parse_time_of_day;
///
/// assert!(parse_time_of_day("08:00").is_ok());
/// assert!(parse_time_of_day("8:00").is_err());
/// assert!(parse_time_of_day("24:00").is_err());
/// ```
pub fn parse_time_of_day(input: &str) -> EngineResult<NaiveTime> {
    let bytes = input.as_bytes();
    let canonical_shape = bytes.len() == 5
        && bytes[2] == b':'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || b.is_ascii_digit());
    if !canonical_shape {
        return Err(EngineError::TimeParse {
            input: input.to_string(),
        });
    }

    let hour: u32 = input[0..2].parse().map_err(|_| EngineError::TimeParse {
        input: input.to_string(),
    })?;
    let minute: u32 = input[3..5].parse().map_err(|_| EngineError::TimeParse {
        input: input.to_string(),
    })?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| EngineError::TimeParse {
        input: input.to_string(),
    })
}

/// Formats a time-of-day as its canonical `HH:MM` string.
pub fn format_time_of_day(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Serde helper for `NaiveTime` fields carried as `HH:MM` strings.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_time_of_day, parse_time_of_day};

    /// Serializes a time as its canonical `HH:MM` string.
    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_time_of_day(*time))
    }

    /// Deserializes a strict `HH:MM` string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time_of_day(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde helper for optional `NaiveTime` fields carried as `HH:MM` strings.
pub mod hhmm_option {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_time_of_day, parse_time_of_day};

    /// Serializes an optional time as its canonical `HH:MM` string.
    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_some(&format_time_of_day(*t)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional strict `HH:MM` string.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            Some(s) => parse_time_of_day(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
