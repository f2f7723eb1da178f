//! Person model and person-owned rule sources.
//!
//! This module defines [`Person`] together with the two rule sources a
//! person owns: per-date manual [`PresenceOverride`]s and an optional
//! [`PersonalRotation`].

use std::collections::HashMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::calendar_date::CalendarDate;
use super::presence::Phase;
use super::rotation::CycleSpec;
use super::time::{end_of_day, hhmm, midnight};

/// A human-entered presence record for one specific date.
///
/// Overrides outrank every computed rule. They persist until explicitly
/// cleared. An override may carry an explicit `status` tag; when untagged,
/// the resolver infers the status from the hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceOverride {
    /// Whether the person is available on the overridden date.
    pub is_available: bool,
    /// Start of the availability window.
    #[serde(with = "hhmm")]
    pub start_hour: NaiveTime,
    /// End of the availability window.
    #[serde(with = "hhmm")]
    pub end_hour: NaiveTime,
    /// Explicit status tag, if the editing surface recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Phase>,
}

impl PresenceOverride {
    /// Returns the explicit status tag, or infers one from the hours.
    ///
    /// Inference rules: unavailable → `Home`; a late start → `Arrival`; an
    /// early end → `Departure`; a full-day window → `Full`.
    pub fn status_or_inferred(&self) -> Phase {
        if let Some(status) = self.status {
            return status;
        }
        if !self.is_available {
            Phase::Home
        } else if self.start_hour != midnight() {
            Phase::Arrival
        } else if self.end_hour != end_of_day() {
            Phase::Departure
        } else {
            Phase::Full
        }
    }
}

/// A per-person recurring on/off schedule, independent of team rotation.
///
/// At most one definition exists per person. Whenever active it outranks the
/// team rotation, even if both could apply to the same date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalRotation {
    /// Whether this rotation is currently in force.
    pub is_active: bool,
    /// The first day of the rotation (an arrival day), if configured.
    #[serde(default)]
    pub start_date: Option<CalendarDate>,
    /// Number of consecutive on-duty days per cycle.
    pub days_on: u32,
    /// Number of consecutive off-duty days per cycle.
    pub days_off: u32,
}

impl PersonalRotation {
    /// Returns the validated cycle parameters, or `None` if the record is
    /// incomplete.
    pub fn cycle_spec(&self, person_id: &str) -> Option<CycleSpec> {
        CycleSpec::from_record(
            &format!("person:{person_id}"),
            self.start_date,
            self.days_on,
            self.days_off,
        )
    }
}

/// A person subject to availability resolution.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use roster_engine::models::Person;
///
/// let person = Person {
///     id: "person_001".to_string(),
///     team_id: Some("team_alpha".to_string()),
///     overrides: HashMap::new(),
///     personal_rotation: None,
/// };
/// assert!(person.overrides.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier for the person.
    pub id: String,
    /// The team the person belongs to, if any.
    #[serde(default)]
    pub team_id: Option<String>,
    /// Manual overrides, keyed by canonical `YYYY-MM-DD` date key.
    #[serde(default)]
    pub overrides: HashMap<String, PresenceOverride>,
    /// The person's own rotation, if one is defined.
    #[serde(default)]
    pub personal_rotation: Option<PersonalRotation>,
}
