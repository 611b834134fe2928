//! Error types.
//!
//! Two families:
//! - [`GridError`]: malformed values (times, dates, ranges, grid config).
//!   Returned at construction so the layout engine only ever sees valid input.
//! - [`StoreError`]: failures reported by the persistence collaborators.
//!   Passed through to the caller unchanged.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::MaterializationKey;

/// Invalid value supplied to the scheduling core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// A time range whose end is not after its start.
    #[error("invalid range on {day}: end minute {end} must be after start minute {start}")]
    InvalidRange {
        /// Day the range belongs to.
        day: NaiveDate,
        /// Start minute of day.
        start: u32,
        /// End minute of day.
        end: u32,
    },

    /// A minute-of-day value outside `[0, 1440]`.
    #[error("minute {0} is outside the day (0..=1440)")]
    MinuteOutOfDay(u32),

    /// A time-of-day string that is not `HH:MM`.
    #[error("invalid time of day '{0}', expected HH:MM")]
    InvalidTime(String),

    /// A date string that is not `YYYY-MM-DD`.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// A schedule that ends before it starts.
    #[error("schedule ends on {end} before it starts on {start}")]
    InvalidSchedule {
        /// First day of the schedule.
        start: NaiveDate,
        /// Last day of the schedule.
        end: NaiveDate,
    },

    /// Grid rendering configuration out of bounds.
    #[error("invalid grid config: {0}")]
    InvalidConfig(String),
}

/// Failure reported by a persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The batch would create a second instance for an existing key.
    #[error("shift already exists for {0}")]
    Conflict(MaterializationKey),

    /// The backing store could not be reached or is in a broken state.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
