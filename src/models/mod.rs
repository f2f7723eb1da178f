//! Core data models for the roster engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calendar_date;
mod person;
mod presence;
mod rotation;
mod shift;
mod task;
mod time;

pub use calendar_date::CalendarDate;
pub use person::{Person, PersonalRotation, PresenceOverride};
pub use presence::{Phase, PresenceResult, PresenceRow, PresenceSource};
pub use rotation::{CycleSpec, TeamRotation};
pub use shift::Shift;
pub use task::{SchedulingType, TaskTemplate};
pub use time::{end_of_day, format_time_of_day, hhmm, hhmm_option, midnight, parse_time_of_day};
