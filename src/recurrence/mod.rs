//! Recurring fixture date expansion.
//!
//! Expands a [`RecurrenceSpec`] into concrete wall-clock timestamps by
//! scanning calendar days forward from the start date and keeping the days
//! that satisfy the pattern predicate.
//!
//! # Predicates
//!
//! | Pattern | A scanned day qualifies iff |
//! |---------|-----------------------------|
//! | Daily | always |
//! | Weekly | weekday ∈ `days_of_week`, or weekday = start weekday when no filter is set |
//! | Biweekly | weekday = start weekday and whole weeks since start is even |
//! | Monthly | day-of-month = start day-of-month (months without that day are skipped) |
//!
//! Monthly rules are not clamped to month end: a rule starting on the 31st
//! produces nothing in 30-day months or February.
//!
//! # Termination
//! The scan stops when the occurrence count is reached, when the scanned
//! day passes the end date, or after `max_scan_days` days, whichever comes
//! first. Hitting the scan bound is not an error; whatever was collected
//! is returned.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{RecurrencePattern, RecurrenceSpec, StopCondition};

/// Occurrence cap used when a rule has no stop condition.
pub const DEFAULT_OCCURRENCES: usize = 52;

/// Hard bound on scanned calendar days.
pub const MAX_SCAN_DAYS: usize = 1000;

/// Expansion bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecurrenceLimits {
    /// Occurrence cap applied when the rule has no stop condition.
    pub default_occurrences: usize,
    /// Maximum number of calendar days scanned, starting with the start date.
    pub max_scan_days: usize,
}

impl Default for RecurrenceLimits {
    fn default() -> Self {
        Self {
            default_occurrences: DEFAULT_OCCURRENCES,
            max_scan_days: MAX_SCAN_DAYS,
        }
    }
}

impl RecurrenceLimits {
    /// Sets the default occurrence cap.
    pub fn with_default_occurrences(mut self, n: usize) -> Self {
        self.default_occurrences = n;
        self
    }

    /// Sets the scan bound.
    pub fn with_max_scan_days(mut self, days: usize) -> Self {
        self.max_scan_days = days;
        self
    }
}

/// Expands a rule with the default limits.
///
/// Output is strictly increasing and every timestamp carries the rule's
/// time of day. Identical rules always produce identical output.
///
/// # Example
///
/// ```
/// use chrono::{Datelike, NaiveDate, Weekday};
/// use u_fixture::models::{DaysOfWeek, RecurrenceSpec};
/// use u_fixture::recurrence;
///
/// let spec = RecurrenceSpec::weekly(NaiveDate::from_ymd_opt(2025, 12, 2).unwrap())
///     .on_days(DaysOfWeek::from_indices(&[1]).unwrap())
///     .at(19, 0)
///     .unwrap()
///     .occurrences(10);
///
/// let dates = recurrence::expand(&spec);
/// assert_eq!(dates.len(), 10);
/// assert!(dates.iter().all(|d| d.weekday() == Weekday::Mon));
/// ```
pub fn expand(spec: &RecurrenceSpec) -> Vec<NaiveDateTime> {
    expand_with_limits(spec, &RecurrenceLimits::default())
}

/// Expands a rule with explicit limits.
pub fn expand_with_limits(spec: &RecurrenceSpec, limits: &RecurrenceLimits) -> Vec<NaiveDateTime> {
    let (cap, end_date) = match spec.stop {
        Some(StopCondition::Occurrences(n)) => (n, None),
        Some(StopCondition::EndDate(end)) => (usize::MAX, Some(end)),
        None => (limits.default_occurrences, None),
    };

    let mut dates = Vec::new();
    let mut day = spec.start_date;

    for _ in 0..limits.max_scan_days {
        if dates.len() >= cap {
            debug!(pattern = ?spec.pattern, count = dates.len(), "occurrence cap reached");
            return dates;
        }
        if end_date.is_some_and(|end| day > end) {
            debug!(pattern = ?spec.pattern, count = dates.len(), "end date reached");
            return dates;
        }
        if qualifies(spec, day) {
            dates.push(day.and_time(spec.time_of_day));
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    if dates.len() < cap {
        warn!(
            pattern = ?spec.pattern,
            start = %spec.start_date,
            count = dates.len(),
            max_scan_days = limits.max_scan_days,
            "recurrence scan bound reached"
        );
    }
    dates
}

/// Whether `day` satisfies the rule's pattern predicate.
pub fn qualifies(spec: &RecurrenceSpec, day: NaiveDate) -> bool {
    let start = spec.start_date;
    match spec.pattern {
        RecurrencePattern::Daily => true,
        RecurrencePattern::Weekly => match &spec.days_of_week {
            Some(days) => days.contains(day.weekday()),
            None => day.weekday() == start.weekday(),
        },
        RecurrencePattern::Biweekly => {
            day.weekday() == start.weekday() && weeks_between(start, day) % 2 == 0
        }
        RecurrencePattern::Monthly => day.day() == start.day(),
    }
}

/// Whole weeks from `start` to `day` (negative before `start`).
fn weeks_between(start: NaiveDate, day: NaiveDate) -> i64 {
    (day - start).num_days().div_euclid(7)
}
