//! Task template model.
//!
//! A [`TaskTemplate`] is a recurring or one-time work definition; the shift
//! expander turns templates into concrete [`Shift`](super::shift::Shift)
//! instances over a horizon.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calendar_date::CalendarDate;
use super::time::hhmm_option;

/// How a task recurs over the generation horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchedulingType {
    /// The task generates shifts on every day of the horizon.
    Recurring,
    /// The task generates shifts only on its specific date.
    OneTime,
}

/// A recurring or one-time work definition.
///
/// Optional fields mirror what the editing surface may leave unset: the
/// expander falls back to an `08:00` start and a 4-hour duration.
///
/// # Example
///
/// ```
/// use roster_engine::models::{SchedulingType, TaskTemplate};
///
/// let json = r#"{
///     "id": "task_gate_watch",
///     "name": "Gate watch",
///     "scheduling_type": "recurring",
///     "is_247": true
/// }"#;
/// let task: TaskTemplate = serde_json::from_str(json).unwrap();
/// assert_eq!(task.scheduling_type, SchedulingType::Recurring);
/// assert!(task.is_247);
/// assert!(task.duration_hours.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskTemplate {
    /// Unique identifier for the task.
    pub id: String,
    /// Human-readable task name.
    pub name: String,
    /// How the task recurs.
    pub scheduling_type: SchedulingType,
    /// The single date a one-time task runs on. A one-time task without a
    /// specific date never generates anything.
    #[serde(default)]
    pub specific_date: Option<CalendarDate>,
    /// Default shift start time, if configured.
    #[serde(default, with = "hhmm_option")]
    pub default_start_time: Option<NaiveTime>,
    /// Shift length in hours, if configured. May be fractional.
    #[serde(default)]
    pub duration_hours: Option<Decimal>,
    /// Whether the task needs continuous 24-hour coverage (back-to-back
    /// tiling).
    #[serde(default)]
    pub is_247: bool,
}
