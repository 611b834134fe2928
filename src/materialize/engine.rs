//! Template materialization.
//!
//! # Algorithm
//! 1. Index the keys of persisted template-derived shifts.
//! 2. Walk every date of the schedule, ascending.
//! 3. For each template recurring on that weekday, and each of its roles,
//!    emit an unassigned shift unless the `(date, template, role)` key is
//!    already indexed. Emitted keys join the index, so a role repeated
//!    within one template is emitted once.
//!
//! Templates without roles emit nothing. Templates with a weekday outside
//! 0..=6 never match a date.
//!
//! # Complexity
//! O(d * t * r) where d = days, t = templates, r = roles per template.

use serde::Serialize;
use tracing::debug;

use super::index::ExistingInstanceIndex;
use crate::models::{MaterializationKey, Schedule, ScheduledShift, ShiftTemplate};

/// New shifts produced by one materialization call. Not yet persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Materialization {
    /// Shifts to create, ordered by date, template order, role order.
    pub created: Vec<ScheduledShift>,
    /// `created.len()`.
    pub created_count: usize,
    /// Persisted keys the call would otherwise have emitted, each counted
    /// once. Repeats of a key within the same call are not counted.
    pub skipped_existing: usize,
}

impl Materialization {
    /// Whether there is nothing to write.
    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }
}

/// Expands weekly templates over `schedule`, skipping shifts that exist.
///
/// Pure: the caller persists `created` (see [`crate::store::materialize_schedule`]).
/// Running it again after persisting yields nothing new.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use shift_grid::materialize::materialize;
/// use shift_grid::models::{Schedule, ShiftTemplate, TimeOfDay};
///
/// let schedule = Schedule::new(
///     1,
///     1,
///     NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 26).unwrap(),
/// )
/// .unwrap();
/// let lunch = ShiftTemplate::new(
///     10,
///     1,
///     1,
///     TimeOfDay::parse("11:00").unwrap(),
///     TimeOfDay::parse("15:00").unwrap(),
/// )
/// .with_roles([2, 3]);
///
/// let result = materialize(&schedule, &[lunch], &[]);
/// assert_eq!(result.created_count, 2);
/// ```
pub fn materialize(
    schedule: &Schedule,
    templates: &[ShiftTemplate],
    existing: &[ScheduledShift],
) -> Materialization {
    let mut index = ExistingInstanceIndex::from_shifts(existing);
    let mut unclaimed = index.clone();
    let mut created = Vec::new();
    let mut skipped_existing = 0;

    for template in templates.iter().filter(|t| t.role_ids.is_empty()) {
        debug!(template_id = template.id, "template has no roles, skipping");
    }

    for date in schedule.days() {
        for template in templates
            .iter()
            .filter(|t| !t.role_ids.is_empty() && t.occurs_on(date))
        {
            for &role_id in &template.role_ids {
                let key = MaterializationKey::new(date, template.id, role_id);
                if !index.insert(key) {
                    if unclaimed.remove(&key) {
                        skipped_existing += 1;
                    }
                    continue;
                }
                created.push(ScheduledShift {
                    schedule_id: schedule.id,
                    restaurant_id: schedule.restaurant_id,
                    template_id: Some(template.id),
                    role_id,
                    employee_id: None,
                    shift_date: date,
                    start_time: template.start_time,
                    end_time: template.end_time,
                });
            }
        }
    }

    debug!(
        schedule_id = schedule.id,
        created = created.len(),
        skipped_existing,
        "materialized templates"
    );

    Materialization {
        created_count: created.len(),
        created,
        skipped_existing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeOfDay;
    use chrono::{Duration, NaiveDate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    fn week() -> Schedule {
        Schedule::new(5, 1, date(2025, 1, 20), date(2025, 1, 26)).unwrap()
    }

    fn template(id: i64, dow: u8, roles: &[i64]) -> ShiftTemplate {
        ShiftTemplate::new(id, 1, dow, t("09:00"), t("17:00")).with_roles(roles.iter().copied())
    }

    #[test]
    fn test_monday_template_two_roles() {
        let result = materialize(&week(), &[template(10, 1, &[2, 3])], &[]);

        assert_eq!(result.created_count, 2);
        assert_eq!(result.skipped_existing, 0);
        for (shift, role) in result.created.iter().zip([2, 3]) {
            assert_eq!(shift.shift_date, date(2025, 1, 20));
            assert_eq!(shift.role_id, role);
            assert_eq!(shift.template_id, Some(10));
            assert_eq!(shift.employee_id, None);
            assert_eq!(shift.schedule_id, 5);
            assert_eq!(shift.restaurant_id, 1);
            assert_eq!(shift.start_time.to_string(), "09:00");
            assert_eq!(shift.end_time.to_string(), "17:00");
        }
    }

    #[test]
    fn test_second_run_is_idempotent() {
        let templates = vec![template(10, 1, &[2, 3]), template(11, 5, &[4])];
        let first = materialize(&week(), &templates, &[]);
        assert_eq!(first.created_count, 3);

        let second = materialize(&week(), &templates, &first.created);
        assert_eq!(second.created_count, 0);
        assert!(second.is_empty());
        assert_eq!(second.skipped_existing, 3);
    }

    #[test]
    fn test_partial_existing_fills_gaps() {
        let templates = vec![template(10, 1, &[2, 3])];
        let first = materialize(&week(), &templates, &[]);

        // role 2 persisted and later assigned; role 3 was deleted
        let kept = vec![first.created[0].clone().with_employee(99)];
        let second = materialize(&week(), &templates, &kept);
        assert_eq!(second.created_count, 1);
        assert_eq!(second.created[0].role_id, 3);
    }

    #[test]
    fn test_ad_hoc_shifts_do_not_block() {
        let schedule = week();
        let ad_hoc =
            ScheduledShift::ad_hoc(&schedule, 2, date(2025, 1, 20), t("09:00"), t("17:00"));
        let result = materialize(&schedule, &[template(10, 1, &[2])], &[ad_hoc]);
        assert_eq!(result.created_count, 1);
    }

    #[test]
    fn test_roleless_and_invalid_weekday_skipped() {
        let templates = vec![template(10, 1, &[]), template(11, 7, &[2]), template(12, 200, &[2])];
        let result = materialize(&week(), &templates, &[]);
        assert_eq!(result.created_count, 0);
    }

    #[test]
    fn test_duplicate_role_emitted_once() {
        let result = materialize(&week(), &[template(10, 1, &[2, 2])], &[]);
        assert_eq!(result.created_count, 1);
        // the repeat was never persisted, so it is not an existing skip
        assert_eq!(result.skipped_existing, 0);

        let again = materialize(&week(), &[template(10, 1, &[2, 2])], &result.created);
        assert_eq!(again.created_count, 0);
        assert_eq!(again.skipped_existing, 1);
    }

    #[test]
    fn test_ordering_date_then_template_then_role() {
        let templates = vec![
            template(20, 3, &[1]),    // Wednesday
            template(10, 1, &[5, 4]), // Monday, roles out of numeric order
            template(30, 1, &[1]),    // Monday
        ];
        let result = materialize(&week(), &templates, &[]);
        let seen: Vec<(NaiveDate, Option<i64>, i64)> = result
            .created
            .iter()
            .map(|s| (s.shift_date, s.template_id, s.role_id))
            .collect();
        assert_eq!(
            seen,
            vec![
                (date(2025, 1, 20), Some(10), 5),
                (date(2025, 1, 20), Some(10), 4),
                (date(2025, 1, 20), Some(30), 1),
                (date(2025, 1, 22), Some(20), 1),
            ]
        );
    }

    #[test]
    fn test_every_weekday_over_two_weeks() {
        let schedule = Schedule::new(1, 1, date(2025, 1, 20), date(2025, 2, 2)).unwrap();
        let templates: Vec<ShiftTemplate> = (0..7).map(|dow| template(dow as i64, dow, &[1])).collect();
        let result = materialize(&schedule, &templates, &[]);

        assert_eq!(result.created_count, 14);
        for shift in &result.created {
            assert_eq!(
                crate::models::weekday_index(shift.shift_date) as i64,
                shift.template_id.unwrap()
            );
        }
        // dates are non-decreasing
        assert!(result
            .created
            .windows(2)
            .all(|w| w[0].shift_date <= w[1].shift_date));
    }

    #[test]
    fn test_single_day_schedule() {
        let monday = date(2025, 1, 20);
        let schedule = Schedule::new(1, 1, monday, monday).unwrap();
        let templates = vec![template(10, 1, &[2]), template(11, 2, &[2])];
        let result = materialize(&schedule, &templates, &[]);
        assert_eq!(result.created_count, 1);
        assert_eq!(result.created[0].shift_date, monday);

        let tuesday_only = Schedule::new(1, 1, monday + Duration::days(1), monday + Duration::days(1)).unwrap();
        let result = materialize(&tuesday_only, &templates, &[]);
        assert_eq!(result.created[0].template_id, Some(11));
    }
}
