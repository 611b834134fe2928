//! Dedup index over already-persisted shifts.

use std::collections::HashSet;

use crate::models::{MaterializationKey, ScheduledShift};

/// Set of materialization keys already present.
///
/// Built from a snapshot passed in by the caller, never from shared state.
/// Ad-hoc shifts (no template) are not indexed.
#[derive(Debug, Clone, Default)]
pub struct ExistingInstanceIndex {
    keys: HashSet<MaterializationKey>,
}

impl ExistingInstanceIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes every template-derived shift in `shifts`.
    pub fn from_shifts<'a>(shifts: impl IntoIterator<Item = &'a ScheduledShift>) -> Self {
        Self {
            keys: shifts
                .into_iter()
                .filter_map(ScheduledShift::materialization_key)
                .collect(),
        }
    }

    /// Whether `key` is present.
    #[inline]
    pub fn contains(&self, key: &MaterializationKey) -> bool {
        self.keys.contains(key)
    }

    /// Adds `key`. Returns `false` if it was already present.
    pub fn insert(&mut self, key: MaterializationKey) -> bool {
        self.keys.insert(key)
    }

    /// Removes `key`. Returns whether it was present.
    pub fn remove(&mut self, key: &MaterializationKey) -> bool {
        self.keys.remove(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
