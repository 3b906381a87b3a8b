//! Peer-review assignment model.
//!
//! An assignment asks one participant (the evaluator) to rate another
//! participant (the target) for a given match.

use serde::{Deserialize, Serialize};

/// An evaluator-target-match assignment.
///
/// # Invariants
/// - `evaluator_id != target_id`
/// - For a fixed `(evaluator_id, match_id)`, target ids are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    /// Participant giving the rating.
    pub evaluator_id: String,
    /// Participant being rated.
    pub target_id: String,
    /// Match the rating belongs to.
    pub match_id: String,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(
        evaluator_id: impl Into<String>,
        target_id: impl Into<String>,
        match_id: impl Into<String>,
    ) -> Self {
        Self {
            evaluator_id: evaluator_id.into(),
            target_id: target_id.into(),
            match_id: match_id.into(),
        }
    }
}

/// How far back a history lookup should look for previous targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryWindow {
    /// The most recent `n` assignment rows across all evaluators, newest
    /// first, then filtered to the requested evaluator.
    Rows(usize),
    /// Every assignment the evaluator has ever received.
    Unbounded,
}

impl HistoryWindow {
    /// Row limit, if bounded.
    pub fn row_limit(&self) -> Option<usize> {
        match self {
            Self::Rows(n) => Some(*n),
            Self::Unbounded => None,
        }
    }
}
