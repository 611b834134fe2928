//! Overlap clustering.
//!
//! # Algorithm
//! Sort by `(day, start, source_id)`, then sweep left to right keeping the
//! running maximum end of the open cluster. An item whose start is at or
//! after that maximum (or that falls on another day) closes the cluster
//! and opens a new one; otherwise it joins and extends the maximum.
//!
//! Once items are sorted by start, "transitively overlaps something in the
//! cluster" is the same as "starts before the running max end", so the
//! sweep yields maximal clusters.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the sweep.

use crate::models::{LayoutItem, TimeRange};

/// A maximal set of transitively overlapping items on one day.
///
/// Items are held in sweep order (start ascending, ties by source id).
#[derive(Debug)]
pub struct Cluster<'a, P> {
    items: Vec<&'a LayoutItem<P>>,
    end_minute: u32,
}

impl<'a, P> Cluster<'a, P> {
    fn open(item: &'a LayoutItem<P>) -> Self {
        Self {
            items: vec![item],
            end_minute: item.range.end_minute(),
        }
    }

    fn accepts(&self, range: &TimeRange) -> bool {
        self.items[0].range.day() == range.day() && range.start_minute() < self.end_minute
    }

    fn push(&mut self, item: &'a LayoutItem<P>) {
        self.end_minute = self.end_minute.max(item.range.end_minute());
        self.items.push(item);
    }

    /// Members, in sweep order.
    pub fn items(&self) -> &[&'a LayoutItem<P>] {
        &self.items
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; a cluster has at least one member.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Earliest start among the members.
    pub fn start_minute(&self) -> u32 {
        self.items[0].range.start_minute()
    }

    /// Latest end among the members.
    pub fn end_minute(&self) -> u32 {
        self.end_minute
    }
}

/// Partitions items into maximal overlap clusters.
///
/// Items in different clusters never overlap. Clusters come out ordered by
/// day, then start. Empty input gives no clusters.
pub fn build_clusters<P>(items: &[LayoutItem<P>]) -> Vec<Cluster<'_, P>> {
    let mut sorted: Vec<&LayoutItem<P>> = items.iter().collect();
    sorted.sort_by_key(|item| (item.range.day(), item.range.start_minute(), item.source_id));

    let mut clusters: Vec<Cluster<'_, P>> = Vec::new();
    for item in sorted {
        match clusters.last_mut() {
            Some(current) if current.accepts(&item.range) => current.push(item),
            _ => clusters.push(Cluster::open(item)),
        }
    }
    clusters
}
