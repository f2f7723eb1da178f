//! Availability resolution across overlapping rule sources.
//!
//! This module implements the precedence walk that turns a person, a date,
//! and the applicable rule sources into exactly one [`PresenceResult`]:
//! manual override, then personal rotation, then team rotation, then the
//! default. The first applicable source wins outright; results are never
//! blended across sources.

use tracing::warn;

use crate::error::EngineResult;
use crate::models::{
    CalendarDate, Person, PresenceOverride, PresenceResult, PresenceSource, TeamRotation,
};

use super::cycle::phase_for;

/// Resolves the presence of `person` on `date`.
///
/// Precedence, evaluated top to bottom, first applicable source wins:
///
/// 1. A manual override for the date is returned verbatim (status inferred
///    from its hours when untagged).
/// 2. An active personal rotation that has started. This is checked whenever
///    the personal rotation is active, so it outranks the team rotation even
///    when both apply.
/// 3. The rotation of the person's team.
/// 4. The default: available for the whole day.
///
/// Incomplete rotation records never apply and never fail the call; a single
/// malformed record must not corrupt an entire batch resolution. Malformed
/// override date keys, by contrast, are caller bugs and raise
/// [`EngineError::DateParse`](crate::error::EngineError::DateParse).
///
/// Read-only and total: every well-formed input resolves to exactly one
/// result.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use roster_engine::models::{CalendarDate, Person, PresenceSource};
/// use roster_engine::resolution::resolve;
///
/// let person = Person {
///     id: "person_001".to_string(),
///     team_id: None,
///     overrides: HashMap::new(),
///     personal_rotation: None,
/// };
///
/// let date = CalendarDate::new(2024, 3, 5).unwrap();
/// let result = resolve(&person, date, &[]).unwrap();
/// assert!(result.is_available);
/// assert_eq!(result.source, PresenceSource::Default);
/// ```
pub fn resolve(
    person: &Person,
    date: CalendarDate,
    team_rotations: &[TeamRotation],
) -> EngineResult<PresenceResult> {
    // 1. Manual override. Every stored key is validated on the way past so a
    //    corrupted key surfaces instead of silently missing its date.
    if let Some(override_record) = find_override(person, date)? {
        return Ok(PresenceResult {
            is_available: override_record.is_available,
            start_hour: override_record.start_hour,
            end_hour: override_record.end_hour,
            status: override_record.status_or_inferred(),
            source: PresenceSource::Manual,
        });
    }

    // 2. Personal rotation, whenever active.
    if let Some(rotation) = person.personal_rotation.as_ref().filter(|r| r.is_active) {
        if let Some(spec) = rotation.cycle_spec(&person.id) {
            if let Some(phase) = phase_for(date, &spec) {
                return Ok(PresenceResult::from_phase(
                    phase,
                    PresenceSource::PersonalRotation,
                ));
            }
        }
    }

    // 3. Team rotation.
    if let Some(rotation) = team_rotation_for(person, team_rotations) {
        if let Some(spec) = rotation.cycle_spec() {
            if let Some(phase) = phase_for(date, &spec) {
                return Ok(PresenceResult::from_phase(
                    phase,
                    PresenceSource::TeamRotation,
                ));
            }
        }
    }

    // 4. Default.
    Ok(PresenceResult::default_available())
}

/// Looks up the manual override for `date`, validating every stored key.
fn find_override(person: &Person, date: CalendarDate) -> EngineResult<Option<PresenceOverride>> {
    let mut found = None;
    for (key, record) in &person.overrides {
        if CalendarDate::parse(key)? == date {
            found = Some(*record);
        }
    }
    Ok(found)
}

/// Finds the rotation of the person's team, if the person belongs to a team
/// that has one configured.
fn team_rotation_for<'a>(
    person: &Person,
    team_rotations: &'a [TeamRotation],
) -> Option<&'a TeamRotation> {
    let team_id = person.team_id.as_deref()?;
    let rotation = team_rotations.iter().find(|r| r.team_id == team_id);
    if rotation.is_none() {
        warn!(
            person_id = %person.id,
            team_id,
            "Person references a team with no configured rotation"
        );
    }
    rotation
}
