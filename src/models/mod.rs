//! Scheduling domain models.
//!
//! Value types shared by the layout and materialization engines.
//! Everything here is plain data: validation happens at construction,
//! behavior lives in [`crate::layout`] and [`crate::materialize`].
//!
//! # Domain Mappings
//!
//! | shift-grid | Grid view | Schedule view |
//! |------------|-----------|---------------|
//! | ShiftTemplate | Recurring block | Source of shifts |
//! | Event | One-off block | - |
//! | TimeRange | Block position | - |
//! | Schedule | - | Published period |
//! | ScheduledShift | Dated block | Staffed row |

mod item;
mod range;
mod shift;
mod template;
mod time;

pub use item::{LayoutItem, SourceId};
pub use range::TimeRange;
pub use shift::{MaterializationKey, Schedule, ScheduledShift};
pub use template::{Event, ShiftTemplate};
pub use time::{format_date, parse_date, weekday_index, TimeOfDay, MINUTES_PER_DAY};
