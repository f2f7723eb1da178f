//! Rotation cycle arithmetic.
//!
//! Given a calendar date and a validated cycle specification, this module
//! computes the rotation phase for that date. The phase progression is a
//! cyclic state machine driven purely by elapsed-day count modulo cycle
//! length: no external trigger, no terminal state. Before the rotation's
//! start date the machine has not started and no phase applies.

use crate::models::{CalendarDate, CycleSpec, Phase};

/// Computes the rotation phase for `date` under `spec`.
///
/// Returns `None` for any date strictly before the rotation's start date,
/// so callers can fall through to the next precedence level.
///
/// Phase assignment over `day_in_cycle = elapsed mod (days_on + days_off)`:
///
/// - day 0 is `Arrival`
/// - days 1 through `days_on - 2` are `Full`
/// - day `days_on - 1` is `Departure`
/// - days `days_on` onward are `Home`
///
/// With `days_on == 1`, day 0 is simultaneously the entry and exit day; the
/// arrival check runs first, so the resolved phase is `Arrival`. That is the
/// fixed contract, not an accident of ordering.
///
/// Pure function: same inputs always yield the same output.
///
/// # Example
///
/// ```
/// use roster_engine::models::{CalendarDate, CycleSpec, Phase};
/// use roster_engine::resolution::phase_for;
///
/// let spec = CycleSpec {
///     start_date: CalendarDate::new(2024, 1, 1).unwrap(),
///     days_on: 7,
///     days_off: 7,
/// };
///
/// let jan = |day| CalendarDate::new(2024, 1, day).unwrap();
/// assert_eq!(phase_for(jan(1), &spec), Some(Phase::Arrival));
/// assert_eq!(phase_for(jan(4), &spec), Some(Phase::Full));
/// assert_eq!(phase_for(jan(7), &spec), Some(Phase::Departure));
/// assert_eq!(phase_for(jan(8), &spec), Some(Phase::Home));
/// assert_eq!(phase_for(jan(15), &spec), Some(Phase::Arrival));
/// ```
pub fn phase_for(date: CalendarDate, spec: &CycleSpec) -> Option<Phase> {
    let elapsed = date.days_since(spec.start_date);
    if elapsed < 0 {
        return None;
    }

    let days_on = i64::from(spec.days_on);
    let day_in_cycle = elapsed % i64::from(spec.cycle_length());

    let phase = if day_in_cycle == 0 {
        Phase::Arrival
    } else if day_in_cycle < days_on - 1 {
        Phase::Full
    } else if day_in_cycle == days_on - 1 {
        Phase::Departure
    } else {
        Phase::Home
    };
    Some(phase)
}
