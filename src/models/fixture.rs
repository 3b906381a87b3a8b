//! Match drafts handed to the persistence layer.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A match ready to be created.
///
/// `round` is set for league fixtures and `None` for one-off recurring
/// series between two fixed teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDraft<T> {
    /// Zero-based round number, if the match belongs to a league round.
    pub round: Option<usize>,
    /// Scheduled kickoff (wall-clock).
    pub kickoff: NaiveDateTime,
    /// Hosting team.
    pub home: T,
    /// Visiting team.
    pub away: T,
}

impl<T> MatchDraft<T> {
    /// Creates a draft outside any league round.
    pub fn new(kickoff: NaiveDateTime, home: T, away: T) -> Self {
        Self {
            round: None,
            kickoff,
            home,
            away,
        }
    }

    /// Tags the draft with a round number.
    pub fn in_round(mut self, round: usize) -> Self {
        self.round = Some(round);
        self
    }
}
