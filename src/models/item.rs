//! Items placed on the time-grid.

use serde::{Deserialize, Serialize};

use super::range::TimeRange;

/// Identity of the record behind a layout item.
///
/// Templates and events live in separate tables, so their numeric ids may
/// collide; the variant keeps them apart. Ordering is used as the final
/// tie-breaker in layout, which makes column placement deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum SourceId {
    /// A recurring shift template.
    Template(i64),
    /// A one-off event.
    Event(i64),
}

/// A time-ranged item to lay out on one day of the grid.
///
/// `P` is the payload handed back to the renderer untouched (a template,
/// an event, or a reference to either).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutItem<P> {
    /// Record identity.
    pub source_id: SourceId,
    /// When the item occupies the grid.
    pub range: TimeRange,
    /// Opaque renderer payload.
    pub payload: P,
}

impl<P> LayoutItem<P> {
    /// Creates a layout item.
    pub fn new(source_id: SourceId, range: TimeRange, payload: P) -> Self {
        Self {
            source_id,
            range,
            payload,
        }
    }
}
