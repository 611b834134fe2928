//! Input validation for templates, events and schedules.
//!
//! These are the checks run when records are saved. The engines themselves
//! stay permissive (a template with a bad weekday simply never matches), so
//! callers use this module to reject bad data before it is stored.
//!
//! Detects:
//! - Duplicate IDs
//! - Weekdays outside 0..=6
//! - Time spans whose end is not after their start
//! - Templates without roles, or with a role listed twice
//! - Schedules that end before they start

use crate::models::{Event, Schedule, ShiftTemplate};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records share the same ID.
    DuplicateId,
    /// A template's weekday is not in 0..=6.
    InvalidDayOfWeek,
    /// End time is not after start time.
    InvalidTimeRange,
    /// A template has no roles.
    EmptyRoles,
    /// A template lists the same role more than once.
    DuplicateRole,
    /// A schedule ends before it starts.
    InvalidDateRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates shift templates.
///
/// Checks:
/// 1. No duplicate template IDs
/// 2. Weekday in 0..=6
/// 3. End time after start time
/// 4. At least one role
/// 5. No role listed twice
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_templates(templates: &[ShiftTemplate]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for tpl in templates {
        if !ids.insert(tpl.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate template ID: {}", tpl.id),
            ));
        }

        if tpl.day_of_week > 6 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDayOfWeek,
                format!(
                    "Template {} has day_of_week {}, expected 0 (Sunday) to 6 (Saturday)",
                    tpl.id, tpl.day_of_week
                ),
            ));
        }

        if tpl.end_time <= tpl.start_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeRange,
                format!(
                    "Template {} ends at {} which is not after its start {}",
                    tpl.id, tpl.end_time, tpl.start_time
                ),
            ));
        }

        if tpl.role_ids.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyRoles,
                format!("Template {} has no roles", tpl.id),
            ));
        }

        let mut roles = HashSet::new();
        for role in &tpl.role_ids {
            if !roles.insert(role) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateRole,
                    format!("Template {} lists role {} more than once", tpl.id, role),
                ));
            }
        }
    }

    into_result(errors)
}

/// Validates one-off events: unique IDs and end after start.
pub fn validate_events(events: &[Event]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for ev in events {
        if !ids.insert(ev.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate event ID: {}", ev.id),
            ));
        }
        if ev.end_time <= ev.start_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeRange,
                format!(
                    "Event '{}' ends at {} which is not after its start {}",
                    ev.title, ev.end_time, ev.start_time
                ),
            ));
        }
    }

    into_result(errors)
}

/// Validates a schedule's date range.
pub fn validate_schedule(schedule: &Schedule) -> ValidationResult {
    match schedule.validate() {
        Ok(()) => Ok(()),
        Err(err) => Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidDateRange,
            err.to_string(),
        )]),
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeOfDay;
    use chrono::NaiveDate;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    fn sample_templates() -> Vec<ShiftTemplate> {
        vec![
            ShiftTemplate::new(1, 1, 1, t("09:00"), t("17:00")).with_roles([2, 3]),
            ShiftTemplate::new(2, 1, 5, t("17:00"), t("24:00")).with_role(4),
        ]
    }

    #[test]
    fn test_valid_templates() {
        assert!(validate_templates(&sample_templates()).is_ok());
    }

    #[test]
    fn test_duplicate_template_id() {
        let mut templates = sample_templates();
        templates.push(ShiftTemplate::new(1, 1, 2, t("09:00"), t("12:00")).with_role(2));

        let errors = validate_templates(&templates).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_invalid_day_of_week() {
        let templates = vec![ShiftTemplate::new(1, 1, 7, t("09:00"), t("17:00")).with_role(2)];

        let errors = validate_templates(&templates).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidDayOfWeek);
    }

    #[test]
    fn test_inverted_template_times() {
        let templates = vec![ShiftTemplate::new(1, 1, 1, t("17:00"), t("17:00")).with_role(2)];

        let errors = validate_templates(&templates).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTimeRange));
    }

    #[test]
    fn test_empty_and_duplicate_roles() {
        let templates = vec![
            ShiftTemplate::new(1, 1, 1, t("09:00"), t("17:00")),
            ShiftTemplate::new(2, 1, 1, t("09:00"), t("17:00")).with_roles([4, 4]),
        ];

        let errors = validate_templates(&templates).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyRoles));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateRole && e.message.contains("role 4")));
    }

    #[test]
    fn test_events() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 22).unwrap();
        let ok = vec![Event::new(1, 1, "Delivery", day, t("06:00"), t("07:00"))];
        assert!(validate_events(&ok).is_ok());

        let bad = vec![
            Event::new(1, 1, "Delivery", day, t("06:00"), t("07:00")),
            Event::new(1, 1, "Backwards", day, t("08:00"), t("07:00")),
        ];
        let errors = validate_events(&bad).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_schedule_range() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 26).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let schedule = Schedule {
            id: 1,
            restaurant_id: 1,
            start_date: start,
            end_date: end,
        };
        let errors = validate_schedule(&schedule).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidDateRange);

        let fine = Schedule::new(1, 1, end, start).unwrap();
        assert!(validate_schedule(&fine).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        // bad weekday + no roles + inverted times, all on one template
        let templates = vec![ShiftTemplate::new(1, 1, 9, t("12:00"), t("08:00"))];

        let errors = validate_templates(&templates).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
