//! Day-local time ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::time::{TimeOfDay, MINUTES_PER_DAY};
use crate::error::GridError;

/// A time interval `[start, end)` within one calendar day.
///
/// Half-open: a range ending at 10:00 and another starting at 10:00
/// do not overlap.
///
/// # Invariants
/// - `start_minute < 1440`
/// - `start_minute < end_minute <= 1440`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    day: NaiveDate,
    start_minute: u32,
    end_minute: u32,
}

#[derive(Deserialize)]
struct RawTimeRange {
    day: NaiveDate,
    start_minute: u32,
    end_minute: u32,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = GridError;

    fn try_from(raw: RawTimeRange) -> Result<Self, Self::Error> {
        Self::new(raw.day, raw.start_minute, raw.end_minute)
    }
}

impl TimeRange {
    /// Creates a validated range.
    pub fn new(day: NaiveDate, start_minute: u32, end_minute: u32) -> Result<Self, GridError> {
        if start_minute >= MINUTES_PER_DAY {
            return Err(GridError::MinuteOutOfDay(start_minute));
        }
        if end_minute > MINUTES_PER_DAY {
            return Err(GridError::MinuteOutOfDay(end_minute));
        }
        if end_minute <= start_minute {
            return Err(GridError::InvalidRange {
                day,
                start: start_minute,
                end: end_minute,
            });
        }
        Ok(Self {
            day,
            start_minute,
            end_minute,
        })
    }

    /// Creates a range from two wall-clock times.
    pub fn from_times(day: NaiveDate, start: TimeOfDay, end: TimeOfDay) -> Result<Self, GridError> {
        Self::new(day, start.minutes(), end.minutes())
    }

    /// Calendar day of this range.
    #[inline]
    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// Start minute of day (inclusive).
    #[inline]
    pub fn start_minute(&self) -> u32 {
        self.start_minute
    }

    /// End minute of day (exclusive).
    #[inline]
    pub fn end_minute(&self) -> u32 {
        self.end_minute
    }

    /// Length in minutes. Always positive.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.end_minute - self.start_minute
    }

    /// Whether two ranges overlap. Touching endpoints do not overlap,
    /// and ranges on different days never do.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day
            && self.start_minute < other.end_minute
            && other.start_minute < self.end_minute
    }
}
