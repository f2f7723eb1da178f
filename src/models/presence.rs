//! Presence result types.
//!
//! This module defines the closed variants for rotation phases and rule
//! sources, plus the [`PresenceResult`] the resolver produces for every
//! (person, date) query and its flattened snapshot projection
//! [`PresenceRow`].

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::calendar_date::CalendarDate;
use super::time::{end_of_day, hhmm, midnight};

/// The phase of a rotation cycle on a given day.
///
/// Phases form a cyclic state machine driven purely by elapsed-day count
/// modulo cycle length: `Arrival` on day 0, `Full` mid-cycle, `Departure` on
/// the last on-duty day, `Home` for the off-duty tail. A one-day on-duty
/// period collapses arrival and departure onto the same day; arrival wins.
///
/// # Example
///
/// ```
/// use roster_engine::models::Phase;
///
/// assert_eq!(serde_json::to_string(&Phase::Arrival).unwrap(), "\"arrival\"");
/// assert_eq!(format!("{}", Phase::Home), "home");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// First day of an on-duty period.
    Arrival,
    /// Mid-cycle on-duty day.
    Full,
    /// Last day of an on-duty period.
    Departure,
    /// Off-duty day.
    Home,
}

impl Phase {
    /// Returns true for the on-duty phases (`Arrival`, `Full`, `Departure`).
    pub fn is_present(self) -> bool {
        !matches!(self, Phase::Home)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Arrival => write!(f, "arrival"),
            Phase::Full => write!(f, "full"),
            Phase::Departure => write!(f, "departure"),
            Phase::Home => write!(f, "home"),
        }
    }
}

/// The rule source that produced a presence result.
///
/// Sources are listed in precedence order: a manual override outranks a
/// personal rotation, which outranks the team rotation, which outranks the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceSource {
    /// A human-entered override for one specific date.
    Manual,
    /// The person's own recurring on/off schedule.
    PersonalRotation,
    /// The rotation of the team the person belongs to.
    #[serde(rename = "rotation")]
    TeamRotation,
    /// No rule applied; the person is assumed available.
    Default,
}

impl std::fmt::Display for PresenceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresenceSource::Manual => write!(f, "manual"),
            PresenceSource::PersonalRotation => write!(f, "personal_rotation"),
            PresenceSource::TeamRotation => write!(f, "rotation"),
            PresenceSource::Default => write!(f, "default"),
        }
    }
}

/// The resolved presence of one person on one calendar date.
///
/// Ephemeral by design: recomputed on demand and never itself persisted as a
/// source of truth. Only its flattened [`PresenceRow`] projection is handed
/// to the snapshot subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceResult {
    /// Whether the person is available on this date.
    pub is_available: bool,
    /// Start of the availability window.
    #[serde(with = "hhmm")]
    pub start_hour: NaiveTime,
    /// End of the availability window.
    #[serde(with = "hhmm")]
    pub end_hour: NaiveTime,
    /// The resolved phase for this date.
    pub status: Phase,
    /// The rule source that determined this result.
    pub source: PresenceSource,
}

impl PresenceResult {
    /// Builds the result for an on-duty or off-duty rotation phase.
    ///
    /// `Home` maps to an unavailable zero-width window; every on-duty phase
    /// maps to a full-day availability window tagged with the phase.
    pub fn from_phase(phase: Phase, source: PresenceSource) -> Self {
        match phase {
            Phase::Home => Self {
                is_available: false,
                start_hour: midnight(),
                end_hour: midnight(),
                status: Phase::Home,
                source,
            },
            on_duty => Self {
                is_available: true,
                start_hour: midnight(),
                end_hour: end_of_day(),
                status: on_duty,
                source,
            },
        }
    }

    /// The all-sources-exhausted fallback: available for the whole day.
    pub fn default_available() -> Self {
        Self {
            is_available: true,
            start_hour: midnight(),
            end_hour: end_of_day(),
            status: Phase::Full,
            source: PresenceSource::Default,
        }
    }
}

/// One flattened presence record, as persisted by the snapshot subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceRow {
    /// The person this row belongs to.
    pub person_id: String,
    /// The calendar date this row covers.
    pub date: CalendarDate,
    /// The resolved phase.
    pub status: Phase,
    /// Start of the availability window.
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    /// End of the availability window.
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    /// The rule source that determined the result.
    pub source: PresenceSource,
}

impl PresenceRow {
    /// Flattens a resolved presence into its snapshot projection.
    pub fn flatten(person_id: &str, date: CalendarDate, result: &PresenceResult) -> Self {
        Self {
            person_id: person_id.to_string(),
            date,
            status: result.status,
            start_time: result.start_hour,
            end_time: result.end_hour,
            source: result.source,
        }
    }
}
