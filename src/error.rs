//! Error types for fixture generation and its collaborators.
//!
//! The generators themselves tolerate degenerate input (fewer than two
//! competitors, empty pools, recurrence rules that never match) and return
//! empty output instead of failing. Errors are reserved for malformed
//! values at construction time and for failures reported by injected
//! collaborators (history lookups, persistence sinks).

use std::fmt;
use thiserror::Error;

/// Result type for fixture operations.
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Fixture error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    /// Hour/minute pair outside a 24h clock.
    #[error("Invalid time of day: {hour:02}:{minute:02}")]
    InvalidTimeOfDay { hour: u32, minute: u32 },

    /// Time string not in `HH:MM` form.
    #[error("Unparseable time of day: {0:?}")]
    UnparseableTimeOfDay(String),

    /// Weekday index outside 0 (Sunday) ..= 6 (Saturday).
    #[error("Invalid weekday index: {0} (expected 0-6, Sunday = 0)")]
    InvalidWeekday(u8),

    /// Negative review-target count at a signed boundary.
    #[error("Invalid target count: {0} (must be non-negative)")]
    InvalidTargetCount(i64),

    /// The assignment history collaborator failed.
    #[error("History lookup failed: {0}")]
    History(String),

    /// A persistence sink rejected a batch.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl FixtureError {
    /// Create a history lookup error
    pub fn history<E: fmt::Display>(err: E) -> Self {
        Self::History(err.to_string())
    }

    /// Create a persistence error
    pub fn persistence<E: fmt::Display>(err: E) -> Self {
        Self::Persistence(err.to_string())
    }

    /// Whether the error came from an injected collaborator rather than
    /// from malformed input.
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(self, Self::History(_) | Self::Persistence(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = FixtureError::InvalidTimeOfDay { hour: 25, minute: 7 };
        assert_eq!(e.to_string(), "Invalid time of day: 25:07");

        let e = FixtureError::InvalidWeekday(9);
        assert!(e.to_string().contains("Sunday = 0"));
    }

    #[test]
    fn test_collaborator_classification() {
        assert!(FixtureError::history("db down").is_collaborator_failure());
        assert!(FixtureError::persistence("constraint").is_collaborator_failure());
        assert!(!FixtureError::InvalidTargetCount(-1).is_collaborator_failure());
    }
}
