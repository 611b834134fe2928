//! Column assignment within a cluster.
//!
//! # Algorithm
//! Greedy interval-graph coloring. Items are taken by start ascending
//! (ties: shorter first, then source id). Each goes into the lowest-index
//! column whose last end is at or before its start; if none is free a new
//! column opens. Columns are reused as soon as they free up, so the column
//! count equals the cluster's peak concurrency.
//!
//! # Complexity
//! O(n * k) where k = column count.
//!
//! # Reference
//! Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8

use serde::Serialize;

use super::cluster::Cluster;
use crate::models::LayoutItem;

/// Placement of one item within its cluster.
///
/// Framework-agnostic: only a lane index and the lane count. Pixel and
/// percentage math lives in [`super::geometry`].
#[derive(Debug, Serialize)]
pub struct ColumnAssignment<'a, P> {
    /// The placed item.
    pub item: &'a LayoutItem<P>,
    /// Zero-based lane.
    pub column_index: usize,
    /// Lanes in the item's cluster. Same for every member.
    pub column_count: usize,
}

impl<P> Clone for ColumnAssignment<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for ColumnAssignment<'_, P> {}

/// Assigns every member of `cluster` a column.
///
/// Items sharing a column never overlap. Output follows placement order.
pub fn assign_columns<'a, P>(cluster: &Cluster<'a, P>) -> Vec<ColumnAssignment<'a, P>> {
    let mut order: Vec<&'a LayoutItem<P>> = cluster.items().to_vec();
    order.sort_by_key(|item| {
        (
            item.range.start_minute(),
            item.range.duration_minutes(),
            item.source_id,
        )
    });

    let mut column_ends: Vec<u32> = Vec::new();
    let mut placed: Vec<(&'a LayoutItem<P>, usize)> = Vec::with_capacity(order.len());

    for item in order {
        let start = item.range.start_minute();
        let column = match column_ends.iter().position(|&end| end <= start) {
            Some(free) => {
                column_ends[free] = item.range.end_minute();
                free
            }
            None => {
                column_ends.push(item.range.end_minute());
                column_ends.len() - 1
            }
        };
        placed.push((item, column));
    }

    let column_count = column_ends.len();
    placed
        .into_iter()
        .map(|(item, column_index)| ColumnAssignment {
            item,
            column_index,
            column_count,
        })
        .collect()
}
