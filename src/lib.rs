//! Fixture and assignment generation for league management.
//!
//! Provides the generators behind a league backend's scheduling features.
//! Persistence, notifications and the HTTP layer live elsewhere; this crate
//! produces values and hands them to injected collaborators.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Pairing`, `Round`, `RoundRobinSchedule`,
//!   `RecurrenceSpec`, `DaysOfWeek`, `Assignment`, `MatchDraft`
//! - **`round_robin`**: Circle-method round-robin pairing (with byes)
//! - **`recurrence`**: Recurring date expansion (daily/weekly/biweekly/monthly)
//! - **`assignment`**: Constrained random peer-review assignment
//! - **`fixtures`**: Turns generator output into dated match drafts
//! - **`config`**: Serde-loadable generator settings
//! - **`validation`**: Caller-side input checks
//!
//! # Purity
//!
//! `round_robin` and `recurrence` are pure functions over immutable input
//! and safe to call from any thread. `assignment` reads history through
//! [`assignment::HistoryLookup`] and takes its randomness as a parameter.
//!
//! # References
//!
//! - Kirkman (1847), "On a problem in combinations"
//! - Durstenfeld (1964), "Algorithm 235: Random permutation"

pub mod assignment;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod recurrence;
pub mod round_robin;
pub mod validation;


pub use error::{FixtureError, Result};
