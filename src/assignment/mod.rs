//! Constrained random peer-review assignment.
//!
//! After a match ends, every participant in the pool is asked to rate up
//! to `k` other participants. Targets are drawn uniformly at random from
//! the pool, excluding the evaluator and anyone the evaluator was recently
//! asked to rate.
//!
//! # Algorithm
//!
//! For each evaluator in the pool:
//! 1. Exclusion set = `{evaluator}` ∪ recent targets from [`HistoryLookup`].
//! 2. Candidates = pool − exclusion set.
//! 3. Shuffle candidates (Fisher-Yates, injected RNG).
//! 4. Keep the first `min(k, |candidates|)`.
//!
//! Evaluators are sampled independently: no attempt is made to balance how
//! often each participant is rated.
//!
//! # Persistence
//! [`assign_and_persist`] generates the whole invocation in memory and
//! hands it to an [`AssignmentSink`] as a single batch, so a failure can
//! never leave some evaluators assigned and others not. Callers must still
//! ensure at most one invocation per match; nothing here deduplicates
//! across invocations.
//!
//! # Reference
//! Durstenfeld (1964), "Algorithm 235: Random permutation"

pub mod ledger;

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{FixtureError, Result};
use crate::models::{Assignment, HistoryWindow};

pub use ledger::AssignmentLedger;

/// Source of previously assigned targets.
///
/// Backed by the persistence layer in production.
pub trait HistoryLookup {
    /// Targets recently assigned to `evaluator_id` within `window`.
    fn recent_targets_for(
        &self,
        evaluator_id: &str,
        window: HistoryWindow,
    ) -> Result<HashSet<String>>;
}

/// Destination for generated assignments.
///
/// Implementations must be all-or-nothing per call: either every row in
/// the batch is stored or none is.
pub trait AssignmentSink {
    /// Stores one invocation's assignments.
    fn create_assignments(&mut self, batch: &[Assignment]) -> Result<()>;
}

/// A lookup with no history. Only the evaluator is excluded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl HistoryLookup for NoHistory {
    fn recent_targets_for(
        &self,
        _evaluator_id: &str,
        _window: HistoryWindow,
    ) -> Result<HashSet<String>> {
        Ok(HashSet::new())
    }
}

/// How much history to consult when excluding repeat targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryPolicy {
    /// The most recent `pool size × k` rows system-wide.
    ///
    /// An evaluator may be re-paired with a target assigned before that
    /// window.
    #[default]
    RecentRows,
    /// Every previous assignment of the evaluator.
    Unbounded,
    /// No history; only self-assignment is excluded.
    Disabled,
}

impl HistoryPolicy {
    /// Window to request for a pool of `pool_size` with `k` targets each.
    pub fn window(&self, pool_size: usize, k: usize) -> Option<HistoryWindow> {
        match self {
            Self::RecentRows => Some(HistoryWindow::Rows(pool_size.saturating_mul(k))),
            Self::Unbounded => Some(HistoryWindow::Unbounded),
            Self::Disabled => None,
        }
    }
}

/// Default number of targets per evaluator.
pub const DEFAULT_TARGETS_PER_EVALUATOR: usize = 3;

/// Assignment generator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentConfig {
    /// Targets per evaluator (`k`).
    pub targets_per_evaluator: usize,
    /// History exclusion policy.
    pub history: HistoryPolicy,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            targets_per_evaluator: DEFAULT_TARGETS_PER_EVALUATOR,
            history: HistoryPolicy::RecentRows,
        }
    }
}

/// Converts a signed target count, rejecting negatives.
///
/// # Errors
/// [`FixtureError::InvalidTargetCount`] when `k < 0`.
pub fn checked_target_count(k: i64) -> Result<usize> {
    usize::try_from(k).map_err(|_| FixtureError::InvalidTargetCount(k))
}

/// Constrained random assignment generator.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_fixture::assignment::{AssignmentGenerator, NoHistory};
///
/// let pool: Vec<String> = ["ann", "bob", "cid", "dee"].iter().map(|s| s.to_string()).collect();
/// let mut rng = SmallRng::seed_from_u64(7);
///
/// let batch = AssignmentGenerator::new()
///     .with_targets_per_evaluator(2)
///     .generate("match-1", &pool, &NoHistory, &mut rng)
///     .unwrap();
/// assert_eq!(batch.len(), 8);
/// assert!(batch.iter().all(|a| a.evaluator_id != a.target_id));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssignmentGenerator {
    config: AssignmentConfig,
}

impl AssignmentGenerator {
    /// Creates a generator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator from settings.
    pub fn from_config(config: AssignmentConfig) -> Self {
        Self { config }
    }

    /// Sets `k`.
    pub fn with_targets_per_evaluator(mut self, k: usize) -> Self {
        self.config.targets_per_evaluator = k;
        self
    }

    /// Sets the history policy.
    pub fn with_history_policy(mut self, policy: HistoryPolicy) -> Self {
        self.config.history = policy;
        self
    }

    /// Current settings.
    pub fn config(&self) -> &AssignmentConfig {
        &self.config
    }

    /// Generates assignments for one match.
    ///
    /// Duplicate pool entries are collapsed (first occurrence wins). A pool
    /// with fewer than two distinct participants yields no assignments.
    /// Output is grouped by evaluator in pool order.
    ///
    /// # Errors
    /// Propagates history lookup failures. Nothing is emitted in that case.
    pub fn generate<H, R>(
        &self,
        match_id: &str,
        pool: &[String],
        history: &H,
        rng: &mut R,
    ) -> Result<Vec<Assignment>>
    where
        H: HistoryLookup + ?Sized,
        R: Rng + ?Sized,
    {
        let pool = distinct(pool);
        let k = self.config.targets_per_evaluator;
        if pool.len() < 2 || k == 0 {
            debug!(match_id, pool = pool.len(), k, "nothing to assign");
            return Ok(Vec::new());
        }

        let window = self.config.history.window(pool.len(), k);
        let mut batch = Vec::with_capacity(pool.len() * k.min(pool.len() - 1));

        for &evaluator in &pool {
            let mut excluded = match window {
                Some(w) => history.recent_targets_for(evaluator, w)?,
                None => HashSet::new(),
            };
            excluded.insert(evaluator.to_string());

            let mut candidates: Vec<&str> = pool
                .iter()
                .copied()
                .filter(|id| !excluded.contains(*id))
                .collect();
            candidates.shuffle(rng);
            candidates.truncate(k);

            trace!(
                match_id,
                evaluator,
                excluded = excluded.len() - 1,
                drawn = candidates.len(),
                "drew review targets"
            );
            batch.extend(
                candidates
                    .into_iter()
                    .map(|target| Assignment::new(evaluator, target, match_id)),
            );
        }

        debug!(
            match_id,
            pool = pool.len(),
            k,
            assignments = batch.len(),
            "generated review assignments"
        );
        Ok(batch)
    }
}

/// Generates assignments with the recent-rows history heuristic.
pub fn generate<H, R>(
    match_id: &str,
    pool: &[String],
    k: usize,
    history: &H,
    rng: &mut R,
) -> Result<Vec<Assignment>>
where
    H: HistoryLookup + ?Sized,
    R: Rng + ?Sized,
{
    AssignmentGenerator::new()
        .with_targets_per_evaluator(k)
        .generate(match_id, pool, history, rng)
}

/// Generates assignments for a match and stores them as one batch.
///
/// The sink is not called when there is nothing to assign.
///
/// # Errors
/// History or sink failures. On a sink failure nothing is stored,
/// provided the sink honours the [`AssignmentSink`] contract.
pub fn assign_and_persist<H, S, R>(
    generator: &AssignmentGenerator,
    match_id: &str,
    pool: &[String],
    history: &H,
    sink: &mut S,
    rng: &mut R,
) -> Result<Vec<Assignment>>
where
    H: HistoryLookup + ?Sized,
    S: AssignmentSink + ?Sized,
    R: Rng + ?Sized,
{
    let batch = generator.generate(match_id, pool, history, rng)?;
    if !batch.is_empty() {
        sink.create_assignments(&batch)?;
    }
    Ok(batch)
}

/// Pool entries in first-seen order without repeats.
fn distinct(pool: &[String]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(pool.len());
    pool.iter()
        .map(String::as_str)
        .filter(|id| seen.insert(*id))
        .collect()
}
