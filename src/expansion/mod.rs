//! Shift expansion for the roster engine.
//!
//! This module turns recurring and one-time task templates into concrete
//! shift instances over a bounded generation horizon.

mod expander;

pub use expander::{
    DEFAULT_DURATION_HOURS, DEFAULT_HORIZON_DAYS, Expansion, MAX_SHIFTS_PER_DAY, expand_task,
};
