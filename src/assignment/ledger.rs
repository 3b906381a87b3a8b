//! In-memory assignment store.
//!
//! Keeps assignment rows in creation order and serves both sides of the
//! generator's collaborators: history lookups and batch inserts. Batches
//! are checked in full before any row is appended, so a rejected batch
//! leaves the ledger untouched.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use super::{AssignmentGenerator, AssignmentSink, HistoryLookup};
use crate::error::{FixtureError, Result};
use crate::models::{Assignment, HistoryWindow};

/// Creation-ordered assignment rows.
#[derive(Debug, Clone, Default)]
pub struct AssignmentLedger {
    rows: Vec<Assignment>,
}

impl AssignmentLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger preloaded with rows, oldest first.
    pub fn with_rows(rows: Vec<Assignment>) -> Self {
        Self { rows }
    }

    /// All rows, oldest first.
    pub fn rows(&self) -> &[Assignment] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows belonging to a match.
    pub fn for_match(&self, match_id: &str) -> Vec<&Assignment> {
        self.rows.iter().filter(|a| a.match_id == match_id).collect()
    }

    /// Generates assignments for a match against this ledger's history and
    /// appends them as one batch.
    pub fn assign<R: Rng + ?Sized>(
        &mut self,
        generator: &AssignmentGenerator,
        match_id: &str,
        pool: &[String],
        rng: &mut R,
    ) -> Result<Vec<Assignment>> {
        let batch = generator.generate(match_id, pool, &*self, rng)?;
        if !batch.is_empty() {
            self.create_assignments(&batch)?;
        }
        Ok(batch)
    }
}

impl HistoryLookup for AssignmentLedger {
    fn recent_targets_for(
        &self,
        evaluator_id: &str,
        window: HistoryWindow,
    ) -> Result<HashSet<String>> {
        let limit = window.row_limit().unwrap_or(self.rows.len());
        Ok(self
            .rows
            .iter()
            .rev()
            .take(limit)
            .filter(|a| a.evaluator_id == evaluator_id)
            .map(|a| a.target_id.clone())
            .collect())
    }
}

impl AssignmentSink for AssignmentLedger {
    fn create_assignments(&mut self, batch: &[Assignment]) -> Result<()> {
        let mut keys: HashSet<(&str, &str, &str)> = self
            .rows
            .iter()
            .map(|a| (a.match_id.as_str(), a.evaluator_id.as_str(), a.target_id.as_str()))
            .collect();

        for a in batch {
            if a.evaluator_id == a.target_id {
                return Err(FixtureError::persistence(format!(
                    "self-assignment for '{}' in match '{}'",
                    a.evaluator_id, a.match_id
                )));
            }
            if !keys.insert((a.match_id.as_str(), a.evaluator_id.as_str(), a.target_id.as_str())) {
                return Err(FixtureError::persistence(format!(
                    "duplicate assignment {} -> {} in match '{}'",
                    a.evaluator_id, a.target_id, a.match_id
                )));
            }
        }

        self.rows.extend_from_slice(batch);
        debug!(rows = batch.len(), total = self.rows.len(), "stored assignment batch");
        Ok(())
    }
}
