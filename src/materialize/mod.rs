//! Template materialization.
//!
//! Expands weekly-recurring [`ShiftTemplate`](crate::models::ShiftTemplate)s
//! over a [`Schedule`](crate::models::Schedule) into concrete, unassigned
//! shifts, deduplicated against what is already persisted.
//!
//! The engine is pure. Uniqueness under concurrent calls is the store's job:
//! two calls reading the same snapshot can both emit the same key, and the
//! writer must reject the second insert (see [`crate::store`]).

mod engine;
mod index;

pub use engine::{materialize, Materialization};
pub use index::ExistingInstanceIndex;
