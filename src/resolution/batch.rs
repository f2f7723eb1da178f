//! Chunked batch resolution for snapshot and export jobs.
//!
//! Resolving presence for N people over M days is embarrassingly parallel
//! per record, but the storage layer that consumes the rows has write-batch
//! limits, so the driver works in chunks: progress is reported and
//! cancellation is honored at chunk boundaries. A single bad record becomes
//! a failure entry instead of aborting the batch.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::models::{CalendarDate, Person, PresenceRow, TeamRotation};

use super::resolver::resolve;

/// Default chunk size, sized to typical storage write-batch limits.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Options for a batch resolution run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Number of (person, date) records resolved per chunk.
    pub chunk_size: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Progress of a running batch, reported at chunk boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    /// Records processed so far (including failures).
    pub completed: usize,
    /// Total records in the batch.
    pub total: usize,
}

/// One record that failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    /// The person whose record failed.
    pub person_id: String,
    /// The date being resolved.
    pub date: CalendarDate,
    /// The error message.
    pub message: String,
}

/// The outcome of a batch resolution run.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Successfully resolved rows, in (person, date) order.
    pub rows: Vec<PresenceRow>,
    /// Records that failed to resolve.
    pub failures: Vec<BatchFailure>,
    /// True if the run stopped early at a chunk boundary.
    pub cancelled: bool,
}

/// Resolves presence rows for every person over `[start, start + days)`.
///
/// Records are processed in chunks of [`BatchOptions::chunk_size`]. After
/// each chunk the `progress` callback fires and the `cancel` flag is
/// checked; a cancelled run returns the rows accumulated so far with
/// `cancelled` set.
///
/// Failures are isolated per record: a malformed override key fails that one
/// (person, date) entry, is recorded in `failures`, and the batch continues.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use std::sync::atomic::AtomicBool;
/// use roster_engine::models::{CalendarDate, Person};
/// use roster_engine::resolution::{resolve_range, BatchOptions};
///
/// let people = vec![Person {
///     id: "person_001".to_string(),
///     team_id: None,
///     overrides: HashMap::new(),
///     personal_rotation: None,
/// }];
///
/// let start = CalendarDate::new(2024, 3, 1).unwrap();
/// let cancel = AtomicBool::new(false);
/// let outcome = resolve_range(
///     &people,
///     start,
///     7,
///     &[],
///     &BatchOptions::default(),
///     &cancel,
///     |_progress| {},
/// );
/// assert_eq!(outcome.rows.len(), 7);
/// assert!(outcome.failures.is_empty());
/// ```
pub fn resolve_range(
    people: &[Person],
    start: CalendarDate,
    days: u32,
    team_rotations: &[TeamRotation],
    options: &BatchOptions,
    cancel: &AtomicBool,
    mut progress: impl FnMut(BatchProgress),
) -> BatchOutcome {
    let chunk_size = options.chunk_size.max(1);
    let total = people.len() * days as usize;
    let mut outcome = BatchOutcome::default();
    let mut completed = 0;

    'outer: for person in people {
        for offset in 0..i64::from(days) {
            let Some(date) = start.plus_days(offset) else {
                // Past the end of the supported calendar; nothing further to
                // resolve for this person.
                break;
            };

            match resolve(person, date, team_rotations) {
                Ok(result) => {
                    outcome
                        .rows
                        .push(PresenceRow::flatten(&person.id, date, &result));
                }
                Err(err) => {
                    warn!(
                        person_id = %person.id,
                        date = %date,
                        error = %err,
                        "Skipping unresolvable record"
                    );
                    outcome.failures.push(BatchFailure {
                        person_id: person.id.clone(),
                        date,
                        message: err.to_string(),
                    });
                }
            }

            completed += 1;
            if completed % chunk_size == 0 {
                progress(BatchProgress { completed, total });
                if cancel.load(Ordering::Relaxed) {
                    debug!(completed, total, "Batch resolution cancelled");
                    outcome.cancelled = true;
                    break 'outer;
                }
            }
        }
    }

    if !outcome.cancelled && completed % chunk_size != 0 {
        progress(BatchProgress { completed, total });
    }
    outcome
}
