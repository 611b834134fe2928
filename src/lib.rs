//! Shift scheduling core for restaurant staff planning.
//!
//! Two pieces of algorithmic work sit behind the weekly schedule screen and
//! schedule publishing:
//!
//! - **Overlap layout** (`layout`): partitions a day's shift templates and
//!   events into non-colliding lanes and maps them to render geometry.
//! - **Template materialization** (`materialize`): expands weekly-recurring
//!   templates over a schedule's dates into concrete shifts, idempotently.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TimeRange`, `LayoutItem`, `ShiftTemplate`,
//!   `Event`, `Schedule`, `ScheduledShift`, `MaterializationKey`
//! - **`layout`**: Clustering, column assignment, geometry
//! - **`materialize`**: Dedup index and materialization engine
//! - **`store`**: Persistence collaborator traits and an in-memory store
//! - **`validation`**: Save-time checks for templates, events, schedules
//!
//! # Architecture
//!
//! Everything except `store` is pure and synchronous. Persistence,
//! transport and authorization belong to the surrounding application; the
//! only I/O seam is the `store` traits.
//!
//! # References
//!
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.1 (Activity Selection)

pub mod error;
pub mod layout;
pub mod materialize;
pub mod models;
pub mod store;
pub mod validation;

pub use error::{GridError, StoreError};
pub use layout::{geometry_for, layout_day, ColumnAssignment, Geometry, GridConfig};
pub use materialize::{materialize, Materialization};
