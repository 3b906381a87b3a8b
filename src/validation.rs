//! Input validation for fixture generation.
//!
//! The generators accept degenerate input and return empty output. These
//! checks are for callers that want to reject such input up front with a
//! user-facing message. Detects:
//! - Too few competitors / participants
//! - Duplicate or empty IDs
//! - Recurrence rules that can never (or will never again) produce a date
//! - Zero review targets

use crate::models::{RecurrencePattern, RecurrenceSpec, StopCondition};
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
    /// Fewer than two competitors or participants.
    TooFewParticipants,
    /// Two entries share the same ID.
    DuplicateId,
    /// An ID is empty or whitespace.
    EmptyId,
    /// A weekly rule with an empty weekday filter.
    EmptyWeekdayFilter,
    /// A weekday filter on a pattern that ignores it.
    IgnoredWeekdayFilter,
    /// End date earlier than start date.
    EndBeforeStart,
    /// Occurrence count of zero.
    ZeroOccurrences,
    /// Zero review targets per evaluator.
    ZeroTargets,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a competitor list before round-robin generation.
///
/// Checks:
/// 1. At least two competitors
/// 2. No empty IDs
/// 3. No duplicate IDs
pub fn validate_competitors<S: AsRef<str>>(competitors: &[S]) -> ValidationResult {
    let mut errors = Vec::new();

    if competitors.len() < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooFewParticipants,
            format!(
                "At least two teams are required, got {}",
                competitors.len()
            ),
        ));
    }
    check_ids(competitors, "team", &mut errors);

    finish(errors)
}

/// Validates a review pool before assignment generation.
///
/// Checks:
/// 1. At least two participants
/// 2. No empty or duplicate IDs
/// 3. At least one target per evaluator
pub fn validate_pool<S: AsRef<str>>(pool: &[S], targets_per_evaluator: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if pool.len() < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooFewParticipants,
            format!("At least two participants are required, got {}", pool.len()),
        ));
    }
    if targets_per_evaluator == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroTargets,
            "Targets per evaluator must be at least 1",
        ));
    }
    check_ids(pool, "participant", &mut errors);

    finish(errors)
}

/// Validates a recurrence rule.
///
/// Checks:
/// 1. Weekly rules do not carry an empty weekday filter
/// 2. Non-weekly rules do not carry a weekday filter at all
/// 3. End date is not before the start date
/// 4. Occurrence count is not zero
pub fn validate_recurrence(spec: &RecurrenceSpec) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(days) = &spec.days_of_week {
        if spec.pattern != RecurrencePattern::Weekly {
            errors.push(ValidationError::new(
                ValidationErrorKind::IgnoredWeekdayFilter,
                format!(
                    "Weekday filter is only used by WEEKLY rules, not {:?}",
                    spec.pattern
                ),
            ));
        } else if days.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyWeekdayFilter,
                "Weekly rule has an empty weekday filter and would never match",
            ));
        }
    }

    match spec.stop {
        Some(StopCondition::EndDate(end)) if end < spec.start_date => {
            errors.push(ValidationError::new(
                ValidationErrorKind::EndBeforeStart,
                format!("End date {end} is before start date {}", spec.start_date),
            ));
        }
        Some(StopCondition::Occurrences(0)) => {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroOccurrences,
                "Occurrence count must be at least 1",
            ));
        }
        _ => {}
    }

    finish(errors)
}

fn check_ids<S: AsRef<str>>(ids: &[S], label: &str, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for id in ids {
        let id = id.as_ref();
        if id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Empty {label} ID"),
            ));
        } else if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {label} ID: {id}"),
            ));
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DaysOfWeek;
    use chrono::NaiveDate;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 2).unwrap()
    }

    #[test]
    fn test_valid_competitors() {
        assert!(validate_competitors(&["A", "B", "C"]).is_ok());
    }

    #[test]
    fn test_too_few_competitors() {
        let errors = validate_competitors(&["A"]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TooFewParticipants));
    }

    #[test]
    fn test_duplicate_and_empty_ids() {
        let errors = validate_competitors(&["A", "B", "A", " "]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("team")));
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyId));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_pool_checks() {
        assert!(validate_pool(&["a", "b"], 1).is_ok());

        let errors = validate_pool(&["a"], 0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TooFewParticipants));
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::ZeroTargets));
    }

    #[test]
    fn test_valid_recurrence() {
        let spec = RecurrenceSpec::weekly(start())
            .on_days(DaysOfWeek::from_indices(&[1]).unwrap())
            .occurrences(10);
        assert!(validate_recurrence(&spec).is_ok());
        assert!(validate_recurrence(&RecurrenceSpec::monthly(start())).is_ok());
    }

    #[test]
    fn test_empty_weekday_filter() {
        let spec = RecurrenceSpec::weekly(start()).on_days(DaysOfWeek::empty());
        let errors = validate_recurrence(&spec).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyWeekdayFilter);
    }

    #[test]
    fn test_ignored_weekday_filter() {
        let spec = RecurrenceSpec::monthly(start()).on_days(DaysOfWeek::from_indices(&[2]).unwrap());
        let errors = validate_recurrence(&spec).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::IgnoredWeekdayFilter);
    }

    #[test]
    fn test_stop_condition_checks() {
        let spec = RecurrenceSpec::daily(start()).until(NaiveDate::from_ymd_opt(2025, 11, 1).unwrap());
        let errors = validate_recurrence(&spec).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EndBeforeStart);

        let spec = RecurrenceSpec::daily(start()).occurrences(0);
        let errors = validate_recurrence(&spec).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::ZeroOccurrences);
    }

    #[test]
    fn test_multiple_errors() {
        let spec = RecurrenceSpec::weekly(start())
            .on_days(DaysOfWeek::empty())
            .occurrences(0);
        let errors = validate_recurrence(&spec).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
