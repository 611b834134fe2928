//! Overlap layout for the weekly time-grid.
//!
//! Turns time-ranged items into side-by-side lanes that never collide:
//!
//! 1. [`build_clusters`]: maximal groups of transitively overlapping items.
//! 2. [`assign_columns`]: lane index and lane count per item in a cluster.
//! 3. [`GridConfig::geometry_for`]: pixel / percent box for rendering.
//!
//! Steps 1 and 2 are framework-agnostic and pure; all render math is in
//! step 3.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use shift_grid::layout::{layout_day, geometry_for};
//! use shift_grid::models::{LayoutItem, SourceId, TimeRange};
//!
//! let day = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
//! let items = vec![
//!     LayoutItem::new(SourceId::Template(1), TimeRange::new(day, 540, 600).unwrap(), "Host"),
//!     LayoutItem::new(SourceId::Template(2), TimeRange::new(day, 570, 630).unwrap(), "Line"),
//! ];
//!
//! let placed = layout_day(&items);
//! assert!(placed.iter().all(|a| a.column_count == 2));
//! assert_eq!(geometry_for(&placed[1]).left, 50.0);
//! ```

mod cluster;
mod columns;
mod geometry;

pub use cluster::{build_clusters, Cluster};
pub use columns::{assign_columns, ColumnAssignment};
pub use geometry::{geometry_for, Geometry, GridConfig};

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::models::{weekday_index, Event, LayoutItem, ShiftTemplate, SourceId};

/// Lays out one day's items.
///
/// Output is grouped by cluster (earliest first), in placement order within
/// each cluster. Items from several days are accepted; a day change always
/// starts a new cluster.
pub fn layout_day<P>(items: &[LayoutItem<P>]) -> Vec<ColumnAssignment<'_, P>> {
    build_clusters(items)
        .iter()
        .flat_map(assign_columns)
        .collect()
}

/// Lays out items for several days, keyed by date.
pub fn layout_week<P>(items: &[LayoutItem<P>]) -> BTreeMap<NaiveDate, Vec<ColumnAssignment<'_, P>>> {
    let mut by_day: BTreeMap<NaiveDate, Vec<ColumnAssignment<'_, P>>> = BTreeMap::new();
    for assignment in layout_day(items) {
        by_day
            .entry(assignment.item.range.day())
            .or_default()
            .push(assignment);
    }
    by_day
}

/// What a weekly grid block was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEntry<'a> {
    /// A recurring template, shown on its weekday.
    Template(&'a ShiftTemplate),
    /// A one-off event, shown on its date.
    Event(&'a Event),
}

/// Projects templates and events onto the 7 days starting at `week_start`.
///
/// Each template lands on the date in the window matching its weekday.
/// Events outside the window are dropped. Templates with an invalid weekday
/// and records whose end is not after their start are skipped.
pub fn week_items<'a>(
    week_start: NaiveDate,
    templates: &'a [ShiftTemplate],
    events: &'a [Event],
) -> Vec<LayoutItem<GridEntry<'a>>> {
    let week_end = week_start + Duration::days(6);
    let mut items = Vec::with_capacity(templates.len() + events.len());

    for template in templates {
        let Some(date) = week_start
            .iter_days()
            .take(7)
            .find(|d| weekday_index(*d) == template.day_of_week)
        else {
            debug!(
                template_id = template.id,
                day_of_week = template.day_of_week,
                "template has no weekday in range"
            );
            continue;
        };
        match template.range_on(date) {
            Ok(range) => items.push(LayoutItem::new(
                SourceId::Template(template.id),
                range,
                GridEntry::Template(template),
            )),
            Err(err) => debug!(template_id = template.id, %err, "skipping template"),
        }
    }

    for event in events {
        if event.event_date < week_start || event.event_date > week_end {
            continue;
        }
        match event.range() {
            Ok(range) => items.push(LayoutItem::new(
                SourceId::Event(event.id),
                range,
                GridEntry::Event(event),
            )),
            Err(err) => debug!(event_id = event.id, %err, "skipping event"),
        }
    }

    items
}
