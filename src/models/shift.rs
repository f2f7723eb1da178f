//! Shift model.
//!
//! A [`Shift`] is a concrete scheduled instance of a task. Shifts are created
//! only by the expander; the assignment layer later fills
//! `assigned_person_ids` and may lock a shift against regeneration.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A concrete scheduled instance of a task.
///
/// # Example
///
/// ```
/// use roster_engine::models::Shift;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2024-02-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2024-02-01 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let shift = Shift::new("task_gate_watch", start, end);
/// assert!(shift.assigned_person_ids.is_empty());
/// assert!(!shift.is_locked);
/// assert_eq!(shift.duration_minutes(), 240);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The task this shift was generated from.
    pub task_id: String,
    /// The start of the shift.
    pub start_time: NaiveDateTime,
    /// The end of the shift.
    pub end_time: NaiveDateTime,
    /// People assigned to this shift. Always empty at creation.
    #[serde(default)]
    pub assigned_person_ids: Vec<String>,
    /// Whether the assignment layer has locked this shift.
    #[serde(default)]
    pub is_locked: bool,
}

impl Shift {
    /// Creates an unassigned, unlocked shift.
    pub fn new(task_id: impl Into<String>, start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self {
            task_id: task_id.into(),
            start_time,
            end_time,
            assigned_person_ids: Vec::new(),
            is_locked: false,
        }
    }

    /// Returns the shift length in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}
