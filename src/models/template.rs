//! Recurring shift templates and one-off events.
//!
//! Both render on the weekly grid. Templates recur on one weekday and are
//! the source for materialized shifts; events occur once on a given date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::range::TimeRange;
use super::time::{weekday_index, TimeOfDay};
use crate::error::GridError;

/// A weekly-recurring shift definition.
///
/// One template may carry several roles; each role yields an independent
/// shift per occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    /// Template identifier.
    pub id: i64,
    /// Owning restaurant.
    pub restaurant_id: i64,
    /// Weekday the template recurs on, 0 = Sunday .. 6 = Saturday.
    /// Values outside that range never match a date.
    pub day_of_week: u8,
    /// Shift start.
    pub start_time: TimeOfDay,
    /// Shift end.
    pub end_time: TimeOfDay,
    /// Roles staffed by this template, in declaration order.
    pub role_ids: Vec<i64>,
}

impl ShiftTemplate {
    /// Creates a template with no roles.
    pub fn new(
        id: i64,
        restaurant_id: i64,
        day_of_week: u8,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
    ) -> Self {
        Self {
            id,
            restaurant_id,
            day_of_week,
            start_time,
            end_time,
            role_ids: Vec::new(),
        }
    }

    /// Adds a role.
    pub fn with_role(mut self, role_id: i64) -> Self {
        self.role_ids.push(role_id);
        self
    }

    /// Replaces the role list.
    pub fn with_roles(mut self, role_ids: impl IntoIterator<Item = i64>) -> Self {
        self.role_ids = role_ids.into_iter().collect();
        self
    }

    /// Whether the template recurs on the given date.
    #[inline]
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.day_of_week == weekday_index(date)
    }

    /// The template's occurrence on `date` as a grid range.
    pub fn range_on(&self, date: NaiveDate) -> Result<TimeRange, GridError> {
        TimeRange::from_times(date, self.start_time, self.end_time)
    }
}

/// A one-off dated event shown on the grid (private party, inventory, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event identifier.
    pub id: i64,
    /// Owning restaurant.
    pub restaurant_id: i64,
    /// Display title.
    pub title: String,
    /// Date of the event.
    pub event_date: NaiveDate,
    /// Event start.
    pub start_time: TimeOfDay,
    /// Event end.
    pub end_time: TimeOfDay,
}

impl Event {
    /// Creates an event.
    pub fn new(
        id: i64,
        restaurant_id: i64,
        title: impl Into<String>,
        event_date: NaiveDate,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
    ) -> Self {
        Self {
            id,
            restaurant_id,
            title: title.into(),
            event_date,
            start_time,
            end_time,
        }
    }

    /// The event as a grid range.
    pub fn range(&self) -> Result<TimeRange, GridError> {
        TimeRange::from_times(self.event_date, self.start_time, self.end_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    #[test]
    fn test_template_builder() {
        let tpl = ShiftTemplate::new(7, 1, 1, t("09:00"), t("17:00"))
            .with_role(2)
            .with_role(3);
        assert_eq!(tpl.role_ids, vec![2, 3]);

        let tpl = tpl.with_roles([5]);
        assert_eq!(tpl.role_ids, vec![5]);
    }

    #[test]
    fn test_template_occurs_on() {
        let tpl = ShiftTemplate::new(1, 1, 1, t("09:00"), t("17:00"));
        let monday = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2025, 1, 21).unwrap();
        assert!(tpl.occurs_on(monday));
        assert!(!tpl.occurs_on(tuesday));

        let never = ShiftTemplate::new(2, 1, 9, t("09:00"), t("17:00"));
        for offset in 0..7 {
            assert!(!never.occurs_on(monday + chrono::Duration::days(offset)));
        }
    }

    #[test]
    fn test_template_range_on() {
        let monday = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let tpl = ShiftTemplate::new(1, 1, 1, t("09:00"), t("17:00"));
        let r = tpl.range_on(monday).unwrap();
        assert_eq!(r.start_minute(), 540);
        assert_eq!(r.end_minute(), 1020);

        let inverted = ShiftTemplate::new(2, 1, 1, t("17:00"), t("09:00"));
        assert!(inverted.range_on(monday).is_err());
    }

    #[test]
    fn test_template_serde() {
        let json = r#"{
            "id": 4,
            "restaurant_id": 1,
            "day_of_week": 5,
            "start_time": "16:00",
            "end_time": "23:30",
            "role_ids": [2, 3]
        }"#;
        let tpl: ShiftTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(tpl.start_time.minutes(), 960);
        assert_eq!(tpl.end_time.to_string(), "23:30");
        assert_eq!(tpl.role_ids, vec![2, 3]);
    }

    #[test]
    fn test_event_range() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 22).unwrap();
        let ev = Event::new(1, 1, "Inventory", date, t("07:00"), t("08:30"));
        let r = ev.range().unwrap();
        assert_eq!(r.day(), date);
        assert_eq!(r.duration_minutes(), 90);
    }
}
