//! Schedules and concrete shift instances.
//!
//! A [`Schedule`] is an inclusive date range for one restaurant. Shifts
//! inside it are either materialized from a template or created by hand;
//! the [`MaterializationKey`] identifies the template-derived ones.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::time::{format_date, TimeOfDay};
use crate::error::GridError;

/// A dated scheduling period, `[start_date, end_date]` inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSchedule")]
pub struct Schedule {
    /// Schedule identifier.
    pub id: i64,
    /// Owning restaurant.
    pub restaurant_id: i64,
    /// First day (inclusive).
    pub start_date: NaiveDate,
    /// Last day (inclusive).
    pub end_date: NaiveDate,
}

#[derive(Deserialize)]
struct RawSchedule {
    id: i64,
    restaurant_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<RawSchedule> for Schedule {
    type Error = GridError;

    fn try_from(raw: RawSchedule) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.restaurant_id, raw.start_date, raw.end_date)
    }
}

impl Schedule {
    /// Creates a schedule, rejecting `end_date < start_date`.
    pub fn new(
        id: i64,
        restaurant_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, GridError> {
        let schedule = Self {
            id,
            restaurant_id,
            start_date,
            end_date,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Checks the date range.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.end_date < self.start_date {
            return Err(GridError::InvalidSchedule {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Every calendar date in the schedule, ascending.
    ///
    /// Empty when the range is inverted.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(move |d| *d <= self.end_date)
    }

    /// Number of days covered.
    pub fn day_count(&self) -> usize {
        if self.end_date < self.start_date {
            0
        } else {
            (self.end_date - self.start_date).num_days() as usize + 1
        }
    }

    /// Whether `date` falls inside the schedule.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// A concrete, dated shift.
///
/// `template_id` is set for template-derived shifts and `None` for ad-hoc
/// ones. `employee_id` stays `None` until someone is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledShift {
    /// Owning schedule.
    pub schedule_id: i64,
    /// Owning restaurant.
    pub restaurant_id: i64,
    /// Source template, if any.
    pub template_id: Option<i64>,
    /// Staffed role.
    pub role_id: i64,
    /// Assigned employee, if any.
    pub employee_id: Option<i64>,
    /// Date worked.
    pub shift_date: NaiveDate,
    /// Shift start.
    pub start_time: TimeOfDay,
    /// Shift end.
    pub end_time: TimeOfDay,
}

impl ScheduledShift {
    /// Creates an unassigned, ad-hoc shift.
    pub fn ad_hoc(
        schedule: &Schedule,
        role_id: i64,
        shift_date: NaiveDate,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
    ) -> Self {
        Self {
            schedule_id: schedule.id,
            restaurant_id: schedule.restaurant_id,
            template_id: None,
            role_id,
            employee_id: None,
            shift_date,
            start_time,
            end_time,
        }
    }

    /// Marks the shift as derived from a template.
    pub fn with_template(mut self, template_id: i64) -> Self {
        self.template_id = Some(template_id);
        self
    }

    /// Assigns an employee.
    pub fn with_employee(mut self, employee_id: i64) -> Self {
        self.employee_id = Some(employee_id);
        self
    }

    /// Dedup key, or `None` for ad-hoc shifts.
    pub fn materialization_key(&self) -> Option<MaterializationKey> {
        self.template_id
            .map(|template_id| MaterializationKey::new(self.shift_date, template_id, self.role_id))
    }
}

/// Identity of one potential template-derived shift:
/// `(shift_date, template_id, role_id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MaterializationKey {
    /// Date worked.
    pub shift_date: NaiveDate,
    /// Source template.
    pub template_id: i64,
    /// Staffed role.
    pub role_id: i64,
}

impl MaterializationKey {
    /// Creates a key.
    pub fn new(shift_date: NaiveDate, template_id: i64, role_id: i64) -> Self {
        Self {
            shift_date,
            template_id,
            role_id,
        }
    }
}

impl fmt::Display for MaterializationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "date={} template={} role={}",
            format_date(self.shift_date),
            self.template_id,
            self.role_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_schedule_days() {
        let s = Schedule::new(1, 1, date(2025, 1, 20), date(2025, 1, 26)).unwrap();
        let days: Vec<_> = s.days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(s.day_count(), 7);
        assert_eq!(days[0], date(2025, 1, 20));
        assert_eq!(days[6], date(2025, 1, 26));
        assert!(s.contains(date(2025, 1, 23)));
        assert!(!s.contains(date(2025, 1, 27)));
    }

    #[test]
    fn test_single_day_schedule() {
        let s = Schedule::new(1, 1, date(2025, 3, 1), date(2025, 3, 1)).unwrap();
        assert_eq!(s.days().count(), 1);
    }

    #[test]
    fn test_schedule_across_month_end() {
        let s = Schedule::new(1, 1, date(2024, 2, 27), date(2024, 3, 2)).unwrap();
        // 2024 is a leap year: 27, 28, 29 Feb + 1, 2 Mar
        assert_eq!(s.day_count(), 5);
    }

    #[test]
    fn test_inverted_schedule() {
        assert!(Schedule::new(1, 1, date(2025, 1, 26), date(2025, 1, 20)).is_err());

        let raw = Schedule {
            id: 1,
            restaurant_id: 1,
            start_date: date(2025, 1, 26),
            end_date: date(2025, 1, 20),
        };
        assert_eq!(raw.days().count(), 0);
        assert_eq!(raw.day_count(), 0);

        let json = r#"{"id":1,"restaurant_id":1,"start_date":"2025-01-26","end_date":"2025-01-20"}"#;
        assert!(serde_json::from_str::<Schedule>(json).is_err());
    }

    #[test]
    fn test_materialization_key() {
        let s = Schedule::new(3, 1, date(2025, 1, 20), date(2025, 1, 26)).unwrap();
        let nine = TimeOfDay::parse("09:00").unwrap();
        let five = TimeOfDay::parse("17:00").unwrap();

        let ad_hoc = ScheduledShift::ad_hoc(&s, 2, date(2025, 1, 21), nine, five);
        assert_eq!(ad_hoc.materialization_key(), None);
        assert_eq!(ad_hoc.schedule_id, 3);

        let derived = ad_hoc.with_template(10).with_employee(44);
        let key = derived.materialization_key().unwrap();
        assert_eq!(key, MaterializationKey::new(date(2025, 1, 21), 10, 2));
        assert_eq!(key.to_string(), "date=2025-01-21 template=10 role=2");
        assert_eq!(derived.employee_id, Some(44));
    }
}
