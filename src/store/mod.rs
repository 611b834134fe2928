//! Persistence seam.
//!
//! The scheduling core never talks to a database. Callers provide these
//! collaborators; [`MemoryStore`] is an in-process implementation.
//!
//! # Contract for writers
//! - `create_many` is all-or-nothing.
//! - It enforces uniqueness of `(shift_date, template_id, role_id)` and
//!   rejects a conflicting batch with [`StoreError::Conflict`] instead of
//!   duplicating. This is what makes concurrent materialization safe.

mod memory;

pub use memory::MemoryStore;

use tracing::{info, warn};

use crate::error::StoreError;
use crate::materialize::{materialize, Materialization};
use crate::models::{Schedule, ScheduledShift, ShiftTemplate};

/// Read access to a restaurant's templates.
pub trait TemplateSource {
    /// Templates of `restaurant_id`, in declaration order.
    fn list_by_restaurant(&self, restaurant_id: i64) -> Result<Vec<ShiftTemplate>, StoreError>;
}

/// Read access to persisted shifts.
pub trait ExistingInstanceSource {
    /// Every shift of `schedule_id`, template-derived or not.
    fn list(&self, schedule_id: i64) -> Result<Vec<ScheduledShift>, StoreError>;
}

/// Atomic batch insert of shifts.
pub trait BatchInstanceWriter {
    /// Persists `shifts`, returning their ids in input order.
    fn create_many(&self, shifts: &[ScheduledShift]) -> Result<Vec<i64>, StoreError>;
}

/// Result of [`materialize_schedule`].
#[derive(Debug, Clone)]
pub struct MaterializeOutcome {
    /// What the engine produced.
    pub materialization: Materialization,
    /// Ids assigned by the writer, parallel to `materialization.created`.
    pub ids: Vec<i64>,
}

/// Reads templates and existing shifts, materializes, and writes the new
/// shifts in one batch.
///
/// Skips the write when nothing is new. Store errors are returned as-is;
/// retries are up to the caller.
pub fn materialize_schedule<T, E, W>(
    schedule: &Schedule,
    templates: &T,
    existing: &E,
    writer: &W,
) -> Result<MaterializeOutcome, StoreError>
where
    T: TemplateSource + ?Sized,
    E: ExistingInstanceSource + ?Sized,
    W: BatchInstanceWriter + ?Sized,
{
    let templates = templates.list_by_restaurant(schedule.restaurant_id)?;
    let existing = existing.list(schedule.id)?;
    let materialization = materialize(schedule, &templates, &existing);

    if materialization.is_empty() {
        info!(schedule_id = schedule.id, "schedule already materialized");
        return Ok(MaterializeOutcome {
            materialization,
            ids: Vec::new(),
        });
    }

    let ids = writer
        .create_many(&materialization.created)
        .inspect_err(|err| warn!(schedule_id = schedule.id, %err, "shift batch rejected"))?;

    info!(
        schedule_id = schedule.id,
        created = materialization.created_count,
        "shift batch written"
    );

    Ok(MaterializeOutcome {
        materialization,
        ids,
    })
}
