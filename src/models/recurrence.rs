//! Recurrence rule model.
//!
//! Describes how a single fixture repeats: a start date, a repetition
//! pattern, an optional weekday filter, a wall-clock time of day and a
//! stop condition. There is no timezone handling; all values are naive
//! calendar/clock values.
//!
//! # Weekday Indices
//! Weekdays are indexed 0 = Sunday through 6 = Saturday, matching the
//! convention used by league front-ends.

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{FixtureError, Result};

/// Sunday-first weekday table.
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// How a fixture repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecurrencePattern {
    /// Every day.
    Daily,
    /// Every week, on the start weekday or on a weekday filter.
    Weekly,
    /// Every other week, on the start weekday.
    Biweekly,
    /// Every month, on the start day-of-month.
    Monthly,
}

/// A set of weekdays.
///
/// Serialized as a sorted list of Sunday-based indices (`[1, 3]` = Monday
/// and Wednesday).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct DaysOfWeek {
    bits: u8,
}

impl DaysOfWeek {
    /// The empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from Sunday-based indices.
    ///
    /// # Errors
    /// [`FixtureError::InvalidWeekday`] for any index above 6.
    pub fn from_indices(indices: &[u8]) -> Result<Self> {
        let mut set = Self::empty();
        for &i in indices {
            if i > 6 {
                return Err(FixtureError::InvalidWeekday(i));
            }
            set.bits |= 1 << i;
        }
        Ok(set)
    }

    /// Builds a set from chrono weekdays.
    pub fn from_weekdays(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut set = Self::empty();
        for d in days {
            set.insert(d);
        }
        set
    }

    /// Adds a weekday.
    pub fn insert(&mut self, day: Weekday) {
        self.bits |= 1 << day.num_days_from_sunday();
    }

    /// Adds a weekday (builder form).
    pub fn with(mut self, day: Weekday) -> Self {
        self.insert(day);
        self
    }

    /// Whether `day` is in the set.
    #[inline]
    pub fn contains(&self, day: Weekday) -> bool {
        self.bits & (1 << day.num_days_from_sunday()) != 0
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of weekdays in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Sunday-based indices in ascending order.
    pub fn indices(&self) -> Vec<u8> {
        (0u8..7).filter(|i| self.bits & (1 << i) != 0).collect()
    }

    /// Weekdays in Sunday-first order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEKDAYS.iter().copied().filter(move |d| self.contains(*d))
    }
}

impl TryFrom<Vec<u8>> for DaysOfWeek {
    type Error = FixtureError;

    fn try_from(indices: Vec<u8>) -> Result<Self> {
        Self::from_indices(&indices)
    }
}

impl From<DaysOfWeek> for Vec<u8> {
    fn from(days: DaysOfWeek) -> Self {
        days.indices()
    }
}

/// When to stop emitting occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopCondition {
    /// Stop after this many occurrences.
    Occurrences(usize),
    /// Stop after this date (inclusive).
    EndDate(NaiveDate),
}

/// A recurring fixture rule.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_fixture::models::{DaysOfWeek, RecurrenceSpec};
///
/// let start = NaiveDate::from_ymd_opt(2025, 12, 2).unwrap();
/// let spec = RecurrenceSpec::weekly(start)
///     .on_days(DaysOfWeek::from_indices(&[1]).unwrap())
///     .at(19, 0)
///     .unwrap()
///     .occurrences(10);
/// assert_eq!(spec.days_of_week.unwrap().indices(), vec![1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceSpec {
    /// First calendar day considered.
    pub start_date: NaiveDate,
    /// Repetition pattern.
    pub pattern: RecurrencePattern,
    /// Weekday filter. Only consulted by [`RecurrencePattern::Weekly`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<DaysOfWeek>,
    /// Wall-clock time applied to every emitted date.
    pub time_of_day: NaiveTime,
    /// Stop condition. `None` falls back to the default occurrence cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<StopCondition>,
}

impl RecurrenceSpec {
    /// Creates a rule at midnight with no stop condition.
    pub fn new(start_date: NaiveDate, pattern: RecurrencePattern) -> Self {
        Self {
            start_date,
            pattern,
            days_of_week: None,
            time_of_day: NaiveTime::MIN,
            stop: None,
        }
    }

    /// Daily rule.
    pub fn daily(start_date: NaiveDate) -> Self {
        Self::new(start_date, RecurrencePattern::Daily)
    }

    /// Weekly rule.
    pub fn weekly(start_date: NaiveDate) -> Self {
        Self::new(start_date, RecurrencePattern::Weekly)
    }

    /// Biweekly rule.
    pub fn biweekly(start_date: NaiveDate) -> Self {
        Self::new(start_date, RecurrencePattern::Biweekly)
    }

    /// Monthly rule.
    pub fn monthly(start_date: NaiveDate) -> Self {
        Self::new(start_date, RecurrencePattern::Monthly)
    }

    /// Sets the weekday filter.
    pub fn on_days(mut self, days: DaysOfWeek) -> Self {
        self.days_of_week = Some(days);
        self
    }

    /// Sets the time of day from an hour/minute pair.
    ///
    /// # Errors
    /// [`FixtureError::InvalidTimeOfDay`] outside `00:00..=23:59`.
    pub fn at(mut self, hour: u32, minute: u32) -> Result<Self> {
        self.time_of_day = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or(FixtureError::InvalidTimeOfDay { hour, minute })?;
        Ok(self)
    }

    /// Sets the time of day.
    pub fn at_time(mut self, time: NaiveTime) -> Self {
        self.time_of_day = time;
        self
    }

    /// Stops after `count` occurrences.
    pub fn occurrences(mut self, count: usize) -> Self {
        self.stop = Some(StopCondition::Occurrences(count));
        self
    }

    /// Stops after `end_date` (inclusive).
    pub fn until(mut self, end_date: NaiveDate) -> Self {
        self.stop = Some(StopCondition::EndDate(end_date));
        self
    }
}

/// Parses an `HH:MM` wall-clock time.
///
/// # Errors
/// [`FixtureError::UnparseableTimeOfDay`] when the string is not `HH:MM`.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| FixtureError::UnparseableTimeOfDay(s.to_string()))
}

/// Weekday for a Sunday-based index.
pub fn weekday_from_index(index: u8) -> Result<Weekday> {
    WEEKDAYS
        .get(index as usize)
        .copied()
        .ok_or(FixtureError::InvalidWeekday(index))
}
