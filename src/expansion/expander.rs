//! Recurring shift expansion.
//!
//! This module turns a [`TaskTemplate`] into concrete [`Shift`] instances
//! over a generation horizon. Continuous (24/7) tasks are tiled back-to-back
//! across each day; a hard per-day safety cap bounds the tiling so a
//! misconfigured near-zero duration cannot produce an unbounded shift list.

use chrono::Duration;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::warn;

use crate::models::{CalendarDate, SchedulingType, Shift, TaskTemplate};

/// Hard safety cap on shifts tiled per day for a 24/7 task.
pub const MAX_SHIFTS_PER_DAY: usize = 20;

/// Default generation horizon in days.
pub const DEFAULT_HORIZON_DAYS: u32 = 30;

/// Fallback shift length in hours when a template leaves it unset.
pub const DEFAULT_DURATION_HOURS: u32 = 4;

/// Fallback start time when a template leaves it unset.
fn default_start_time() -> chrono::NaiveTime {
    chrono::NaiveTime::from_hms_opt(8, 0, 0).expect("08:00 is a valid time")
}

/// The result of expanding one task over a horizon.
///
/// `capped_days` makes the safety cap observable: callers that see a day
/// listed here are looking at a misconfigured (near-zero or non-positive)
/// duration and should surface it, but the truncated shifts are still
/// usable.
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    /// The generated shifts, in chronological order.
    pub shifts: Vec<Shift>,
    /// Days on which tiling stopped at the safety cap.
    pub capped_days: Vec<CalendarDate>,
}

impl Expansion {
    /// Returns true if any day hit the tiling safety cap.
    pub fn hit_safety_cap(&self) -> bool {
        !self.capped_days.is_empty()
    }
}

/// Expands `task` over the horizon `[horizon_start, horizon_start + horizon_days)`.
///
/// Per day:
///
/// - A one-time task proceeds only on its `specific_date`; with no specific
///   date set it never generates anything.
/// - A 24/7 task tiles shifts back-to-back from the day's start time until
///   the running start reaches 24 hours later, capped at
///   [`MAX_SHIFTS_PER_DAY`]. The final tile may extend past the 24-hour
///   boundary; it is deliberately not truncated to fit.
/// - Any other task emits exactly one shift.
///
/// Every emitted shift starts unassigned and unlocked, and no two shifts
/// from one call share the same `(task_id, start_time)` pair.
///
/// # Example
///
/// ```
/// use roster_engine::expansion::expand_task;
/// use roster_engine::models::{CalendarDate, SchedulingType, TaskTemplate};
/// use rust_decimal::Decimal;
///
/// let task = TaskTemplate {
///     id: "task_rounds".to_string(),
///     name: "Ward rounds".to_string(),
///     scheduling_type: SchedulingType::Recurring,
///     specific_date: None,
///     default_start_time: None,
///     duration_hours: Some(Decimal::from(4)),
///     is_247: false,
/// };
///
/// let start = CalendarDate::new(2024, 2, 1).unwrap();
/// let expansion = expand_task(&task, start, 3);
/// assert_eq!(expansion.shifts.len(), 3);
/// assert!(!expansion.hit_safety_cap());
/// ```
pub fn expand_task(task: &TaskTemplate, horizon_start: CalendarDate, horizon_days: u32) -> Expansion {
    let start_time = task.default_start_time.unwrap_or_else(default_start_time);
    let step = shift_step(task.duration_hours);
    let mut expansion = Expansion::default();

    for offset in 0..i64::from(horizon_days) {
        let Some(day) = horizon_start.plus_days(offset) else {
            break;
        };

        if task.scheduling_type == SchedulingType::OneTime && task.specific_date != Some(day) {
            continue;
        }

        let day_start = day.at(start_time);
        if task.is_247 {
            let window_end = day_start + Duration::hours(24);
            let mut cursor = day_start;
            let mut emitted = 0;

            while cursor < window_end {
                if emitted == MAX_SHIFTS_PER_DAY {
                    warn!(
                        task_id = %task.id,
                        date = %day,
                        cap = MAX_SHIFTS_PER_DAY,
                        "24/7 tiling hit the per-day safety cap, truncating"
                    );
                    expansion.capped_days.push(day);
                    break;
                }
                expansion.shifts.push(Shift::new(&task.id, cursor, cursor + step));
                emitted += 1;

                if step <= Duration::zero() {
                    // A non-positive step would tile the same start forever;
                    // stop after one shift and flag the day.
                    warn!(
                        task_id = %task.id,
                        date = %day,
                        "24/7 task has a non-positive duration, truncating"
                    );
                    expansion.capped_days.push(day);
                    break;
                }
                cursor += step;
            }
        } else {
            expansion
                .shifts
                .push(Shift::new(&task.id, day_start, day_start + step));
        }
    }

    expansion
}

/// Converts the configured duration into the tiling step, with the 4-hour
/// fallback. Fractional hours are truncated to whole seconds.
fn shift_step(duration_hours: Option<Decimal>) -> Duration {
    let hours = duration_hours.unwrap_or_else(|| Decimal::from(DEFAULT_DURATION_HOURS));
    let seconds = (hours * Decimal::from(3600)).to_i64().unwrap_or(0);
    Duration::seconds(seconds)
}
