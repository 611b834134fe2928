//! In-memory store.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::{BatchInstanceWriter, ExistingInstanceSource, TemplateSource};
use crate::error::StoreError;
use crate::models::{MaterializationKey, ScheduledShift, ShiftTemplate};

/// Thread-safe in-memory implementation of all three store traits.
///
/// Enforces the unique `(shift_date, template_id, role_id)` constraint.
/// Batches are validated in full before anything is inserted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    templates: Vec<ShiftTemplate>,
    shifts: Vec<(i64, ScheduledShift)>,
    keys: HashSet<MaterializationKey>,
    next_id: i64,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation checks before it writes, so a poisoned guard still
    // holds consistent data.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds a template.
    pub fn add_template(&self, template: ShiftTemplate) {
        self.lock().templates.push(template);
    }

    /// Deletes a shift by id. Returns whether it existed.
    ///
    /// Frees its materialization key, so the next materialization of the
    /// schedule recreates it.
    pub fn delete_shift(&self, id: i64) -> bool {
        let mut inner = self.lock();
        let Some(pos) = inner.shifts.iter().position(|(sid, _)| *sid == id) else {
            return false;
        };
        let (_, shift) = inner.shifts.remove(pos);
        if let Some(key) = shift.materialization_key() {
            inner.keys.remove(&key);
        }
        true
    }

    /// Looks up a shift by id.
    pub fn get_shift(&self, id: i64) -> Option<ScheduledShift> {
        self.lock()
            .shifts
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, shift)| shift.clone())
    }
}

impl TemplateSource for MemoryStore {
    fn list_by_restaurant(&self, restaurant_id: i64) -> Result<Vec<ShiftTemplate>, StoreError> {
        Ok(self
            .lock()
            .templates
            .iter()
            .filter(|t| t.restaurant_id == restaurant_id)
            .cloned()
            .collect())
    }
}

impl ExistingInstanceSource for MemoryStore {
    fn list(&self, schedule_id: i64) -> Result<Vec<ScheduledShift>, StoreError> {
        Ok(self
            .lock()
            .shifts
            .iter()
            .filter(|(_, s)| s.schedule_id == schedule_id)
            .map(|(_, s)| s.clone())
            .collect())
    }
}

impl BatchInstanceWriter for MemoryStore {
    fn create_many(&self, shifts: &[ScheduledShift]) -> Result<Vec<i64>, StoreError> {
        let mut inner = self.lock();

        let mut batch_keys = HashSet::new();
        for key in shifts.iter().filter_map(ScheduledShift::materialization_key) {
            if inner.keys.contains(&key) || !batch_keys.insert(key) {
                debug!(%key, "rejecting batch on duplicate key");
                return Err(StoreError::Conflict(key));
            }
        }

        let mut ids = Vec::with_capacity(shifts.len());
        for shift in shifts {
            inner.next_id += 1;
            let id = inner.next_id;
            inner.shifts.push((id, shift.clone()));
            ids.push(id);
        }
        inner.keys.extend(batch_keys);
        Ok(ids)
    }
}
