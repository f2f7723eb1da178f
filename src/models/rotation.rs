//! Team rotation model and the validated cycle specification.
//!
//! A [`TeamRotation`] is owned by a team and referenced by all its members.
//! Rotation records arrive from storage and may be incomplete (no start date,
//! zero durations); [`CycleSpec`] is the validated form the cycle calculator
//! actually operates on.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::calendar_date::CalendarDate;

/// The validated parameters of a rotation cycle.
///
/// Extracted from a rotation record only when the record is complete: a start
/// date is present and both durations are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSpec {
    /// The first day the rotation is in effect (an arrival day).
    pub start_date: CalendarDate,
    /// Number of consecutive on-duty days per cycle.
    pub days_on: u32,
    /// Number of consecutive off-duty days per cycle.
    pub days_off: u32,
}

impl CycleSpec {
    /// Builds a spec from raw record fields, or `None` if the record is
    /// incomplete. An incomplete record is a soft condition: it is logged and
    /// the rotation simply does not apply, so one bad record can never abort
    /// a batch resolution.
    pub fn from_record(
        description: &str,
        start_date: Option<CalendarDate>,
        days_on: u32,
        days_off: u32,
    ) -> Option<Self> {
        let Some(start_date) = start_date else {
            warn!(rotation = description, "Rotation record has no start date, skipping");
            return None;
        };
        if days_on == 0 || days_off == 0 {
            warn!(
                rotation = description,
                days_on, days_off, "Rotation record has non-positive durations, skipping"
            );
            return None;
        }
        Some(Self {
            start_date,
            days_on,
            days_off,
        })
    }

    /// The full cycle length in days.
    pub fn cycle_length(&self) -> u32 {
        self.days_on + self.days_off
    }
}

/// A per-team recurring on-base/at-home schedule.
///
/// At most one rotation exists per team; the configuration loader enforces
/// this. `start_date` is optional because storage may hold a half-configured
/// record; such a record never applies (see [`CycleSpec::from_record`]).
///
/// # Example
///
/// ```
/// use roster_engine::models::{CalendarDate, TeamRotation};
///
/// let rotation = TeamRotation {
///     team_id: "team_alpha".to_string(),
///     start_date: Some(CalendarDate::new(2024, 1, 1).unwrap()),
///     days_on_base: 7,
///     days_at_home: 7,
/// };
/// assert!(rotation.cycle_spec().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRotation {
    /// The team this rotation belongs to.
    pub team_id: String,
    /// The first day of the rotation (an arrival day), if configured.
    #[serde(default)]
    pub start_date: Option<CalendarDate>,
    /// Number of consecutive on-base days per cycle.
    pub days_on_base: u32,
    /// Number of consecutive at-home days per cycle.
    pub days_at_home: u32,
}

impl TeamRotation {
    /// Returns the validated cycle parameters, or `None` if the record is
    /// incomplete.
    pub fn cycle_spec(&self) -> Option<CycleSpec> {
        CycleSpec::from_record(
            &format!("team:{}", self.team_id),
            self.start_date,
            self.days_on_base,
            self.days_at_home,
        )
    }
}
