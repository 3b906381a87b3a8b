//! Fixture domain models.
//!
//! Provides the value types produced by the generators and consumed by
//! the persistence layer. All types are plain data: generators build them
//! once per call and hand ownership to the caller.
//!
//! # Domain Mappings
//!
//! | u-fixture | League | Tournament | Classroom |
//! |-----------|--------|------------|-----------|
//! | Pairing | Fixture | Board pairing | Debate pairing |
//! | Round | Matchday | Round | Session |
//! | RecurrenceSpec | Weekly game night | Recurring event | Timetable slot |
//! | Assignment | Player rating | Peer review | Peer grading |

mod assignment;
mod fixture;
mod pairing;
mod recurrence;

pub use assignment::{Assignment, HistoryWindow};
pub use fixture::MatchDraft;
pub use pairing::{Pairing, Round, RoundRobinSchedule};
pub use recurrence::{
    parse_time_of_day, weekday_from_index, DaysOfWeek, RecurrencePattern, RecurrenceSpec,
    StopCondition,
};
