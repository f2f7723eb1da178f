//! Availability resolution for the roster engine.
//!
//! This module contains the rotation cycle calculator, the precedence-based
//! availability resolver, and the chunked batch driver used by snapshot and
//! export jobs.

mod batch;
mod cycle;
mod resolver;

pub use batch::{
    BatchFailure, BatchOptions, BatchOutcome, BatchProgress, DEFAULT_CHUNK_SIZE, resolve_range,
};
pub use cycle::phase_for;
pub use resolver::resolve;
