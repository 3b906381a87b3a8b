//! Generator configuration.
//!
//! Collects the tunables of all three generators in one serde-friendly
//! struct so the orchestration layer can load them from its own config
//! source. Every field has a default; an empty document is valid.

use serde::{Deserialize, Serialize};

use crate::assignment::{AssignmentConfig, AssignmentGenerator, HistoryPolicy};
use crate::fixtures::RoundCalendar;
use crate::recurrence::RecurrenceLimits;

/// Settings for the fixture generators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Recurrence expansion bounds.
    pub recurrence: RecurrenceLimits,
    /// Peer-review assignment settings.
    pub assignment: AssignmentConfig,
    /// League round calendar. `None` leaves round dating to the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<RoundCalendar>,
}

impl GeneratorConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets recurrence bounds.
    pub fn with_recurrence(mut self, limits: RecurrenceLimits) -> Self {
        self.recurrence = limits;
        self
    }

    /// Sets the number of review targets per evaluator.
    pub fn with_targets_per_evaluator(mut self, k: usize) -> Self {
        self.assignment.targets_per_evaluator = k;
        self
    }

    /// Sets the review history policy.
    pub fn with_history_policy(mut self, policy: HistoryPolicy) -> Self {
        self.assignment.history = policy;
        self
    }

    /// Sets the league round calendar.
    pub fn with_calendar(mut self, calendar: RoundCalendar) -> Self {
        self.calendar = Some(calendar);
        self
    }

    /// Builds an assignment generator from these settings.
    pub fn assignment_generator(&self) -> AssignmentGenerator {
        AssignmentGenerator::from_config(self.assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recurrence::{DEFAULT_OCCURRENCES, MAX_SCAN_DAYS};

    #[test]
    fn test_defaults() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.recurrence.default_occurrences, DEFAULT_OCCURRENCES);
        assert_eq!(cfg.recurrence.max_scan_days, MAX_SCAN_DAYS);
        assert_eq!(cfg.assignment.targets_per_evaluator, 3);
        assert_eq!(cfg.assignment.history, HistoryPolicy::RecentRows);
        assert!(cfg.calendar.is_none());
    }

    #[test]
    fn test_empty_document() {
        let cfg: GeneratorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, GeneratorConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let cfg: GeneratorConfig = serde_json::from_str(
            r#"{
                "recurrence": { "max_scan_days": 400 },
                "assignment": { "history": "unbounded" },
                "calendar": { "first_round": "2026-03-07T15:00:00" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.recurrence.max_scan_days, 400);
        assert_eq!(cfg.recurrence.default_occurrences, DEFAULT_OCCURRENCES);
        assert_eq!(cfg.assignment.history, HistoryPolicy::Unbounded);
        assert_eq!(cfg.assignment.targets_per_evaluator, 3);
        assert_eq!(cfg.calendar.unwrap().interval_days, 7);
    }

    #[test]
    fn test_builder_feeds_generator() {
        let cfg = GeneratorConfig::new()
            .with_targets_per_evaluator(5)
            .with_history_policy(HistoryPolicy::Disabled);
        let generator = cfg.assignment_generator();
        assert_eq!(generator.config().targets_per_evaluator, 5);
        assert_eq!(generator.config().history, HistoryPolicy::Disabled);
    }
}
