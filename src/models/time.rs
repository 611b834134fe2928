//! Time-of-day and calendar date helpers.
//!
//! # Boundary Formats
//! Times of day cross the API as 24-hour `HH:MM` strings and dates as
//! `YYYY-MM-DD` strings. Internally a time of day is a minute count in
//! `[0, 1440]`; `24:00` (1440) is accepted so a shift can end at midnight.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A wall-clock time of day, stored as minutes since midnight.
///
/// Serialized as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Midnight at the start of the day.
    pub const MIDNIGHT: Self = Self(0);
    /// Midnight at the end of the day (`24:00`).
    pub const END_OF_DAY: Self = Self(MINUTES_PER_DAY);

    /// Creates a time from a minute-of-day count.
    pub fn from_minutes(minute: u32) -> Result<Self, GridError> {
        if minute > MINUTES_PER_DAY {
            return Err(GridError::MinuteOutOfDay(minute));
        }
        Ok(Self(minute))
    }

    /// Creates a time from hour and minute components.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, GridError> {
        let total = hour.checked_mul(60).and_then(|m| m.checked_add(minute));
        match total {
            Some(total) if minute < 60 => Self::from_minutes(total),
            _ => Err(GridError::InvalidTime(format!("{hour:02}:{minute:02}"))),
        }
    }

    /// Parses a 24-hour `HH:MM` string.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        if !has_shape(s, 5, &[2], b':') {
            return Err(GridError::InvalidTime(s.to_string()));
        }
        if s == "24:00" {
            return Ok(Self::END_OF_DAY);
        }
        let t = NaiveTime::parse_from_str(s, "%H:%M")
            .map_err(|_| GridError::InvalidTime(s.to_string()))?;
        Ok(Self(t.hour() * 60 + t.minute()))
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for TimeOfDay {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, GridError> {
    let trimmed = s.trim();
    if !has_shape(trimmed, 10, &[4, 7], b'-') {
        return Err(GridError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| GridError::InvalidDate(s.to_string()))
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// chrono accepts single-digit fields; the boundary formats are zero-padded.
fn has_shape(s: &str, len: usize, separators: &[usize], sep: u8) -> bool {
    s.len() == len
        && s.bytes().enumerate().all(|(i, b)| {
            if separators.contains(&i) {
                b == sep
            } else {
                b.is_ascii_digit()
            }
        })
}

/// Weekday index of a date, 0 = Sunday .. 6 = Saturday.
#[inline]
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}
