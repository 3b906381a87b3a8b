//! Round-robin schedule model.
//!
//! A schedule is an ordered list of rounds; a round is an ordered list of
//! pairings in which no competitor appears twice. Competitor identifiers
//! are opaque labels: nothing here inspects their structure.
//!
//! # Reference
//! Kirkman (1847), "On a problem in combinations" (circle method)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// A single fixture: `home` hosts `away`.
///
/// Home/away is positional only. Generators make no attempt to balance
/// home counts per competitor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pairing<T> {
    /// Hosting competitor.
    pub home: T,
    /// Visiting competitor.
    pub away: T,
}

impl<T> Pairing<T> {
    /// Creates a new pairing.
    pub fn new(home: T, away: T) -> Self {
        Self { home, away }
    }

    /// The same fixture with sides swapped.
    pub fn reversed(self) -> Self {
        Self {
            home: self.away,
            away: self.home,
        }
    }
}

impl<T: PartialEq> Pairing<T> {
    /// Whether `id` plays in this pairing.
    #[inline]
    pub fn involves(&self, id: &T) -> bool {
        self.home == *id || self.away == *id
    }

    /// The opponent of `id`, if `id` plays in this pairing.
    pub fn opponent_of(&self, id: &T) -> Option<&T> {
        if self.home == *id {
            Some(&self.away)
        } else if self.away == *id {
            Some(&self.home)
        } else {
            None
        }
    }
}

/// One round of simultaneous fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round<T> {
    /// Zero-based round number within the schedule.
    pub index: usize,
    /// Fixtures played in this round.
    pub pairings: Vec<Pairing<T>>,
}

impl<T> Round<T> {
    /// Creates an empty round.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            pairings: Vec::new(),
        }
    }

    /// Number of fixtures in this round.
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    /// Whether this round has no fixtures.
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }
}

impl<T: PartialEq> Round<T> {
    /// Whether `id` plays in this round.
    pub fn involves(&self, id: &T) -> bool {
        self.pairings.iter().any(|p| p.involves(id))
    }
}

/// A complete round-robin schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRobinSchedule<T> {
    /// Rounds in play order.
    pub rounds: Vec<Round<T>>,
}

impl<T> Default for RoundRobinSchedule<T> {
    fn default() -> Self {
        Self { rounds: Vec::new() }
    }
}

impl<T> RoundRobinSchedule<T> {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rounds.
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Total number of fixtures across all rounds.
    pub fn pairing_count(&self) -> usize {
        self.rounds.iter().map(Round::len).sum()
    }

    /// Whether the schedule has no rounds.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Iterates every fixture with its round number.
    pub fn pairings(&self) -> impl Iterator<Item = (usize, &Pairing<T>)> {
        self.rounds
            .iter()
            .flat_map(|r| r.pairings.iter().map(move |p| (r.index, p)))
    }
}

impl<T: PartialEq> RoundRobinSchedule<T> {
    /// Round numbers in which `id` plays.
    pub fn rounds_for(&self, id: &T) -> Vec<usize> {
        self.rounds
            .iter()
            .filter(|r| r.involves(id))
            .map(|r| r.index)
            .collect()
    }

    /// Round numbers in which `id` sits out.
    ///
    /// For an odd competitor count each competitor has exactly one.
    pub fn bye_rounds_for(&self, id: &T) -> Vec<usize> {
        self.rounds
            .iter()
            .filter(|r| !r.involves(id))
            .map(|r| r.index)
            .collect()
    }
}

impl<T: Clone + Eq + Hash> RoundRobinSchedule<T> {
    /// Home fixture count per competitor.
    ///
    /// Reporting only. Callers wanting balanced home/away runs must
    /// post-process the schedule themselves.
    pub fn home_counts(&self) -> HashMap<T, usize> {
        let mut counts: HashMap<T, usize> = HashMap::new();
        for (_, p) in self.pairings() {
            *counts.entry(p.home.clone()).or_insert(0) += 1;
            counts.entry(p.away.clone()).or_insert(0);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> RoundRobinSchedule<&'static str> {
        RoundRobinSchedule {
            rounds: vec![
                Round {
                    index: 0,
                    pairings: vec![Pairing::new("A", "B")],
                },
                Round {
                    index: 1,
                    pairings: vec![Pairing::new("C", "A")],
                },
                Round {
                    index: 2,
                    pairings: vec![Pairing::new("B", "C")],
                },
            ],
        }
    }

    #[test]
    fn test_pairing_opponent() {
        let p = Pairing::new("A", "B");
        assert_eq!(p.opponent_of(&"A"), Some(&"B"));
        assert_eq!(p.opponent_of(&"B"), Some(&"A"));
        assert_eq!(p.opponent_of(&"C"), None);
        assert_eq!(p.reversed(), Pairing::new("B", "A"));
    }

    #[test]
    fn test_schedule_counts() {
        let s = sample_schedule();
        assert_eq!(s.round_count(), 3);
        assert_eq!(s.pairing_count(), 3);
        assert!(!s.is_empty());
        assert!(RoundRobinSchedule::<String>::new().is_empty());
    }

    #[test]
    fn test_rounds_and_byes() {
        let s = sample_schedule();
        assert_eq!(s.rounds_for(&"A"), vec![0, 1]);
        assert_eq!(s.bye_rounds_for(&"A"), vec![2]);
        assert_eq!(s.bye_rounds_for(&"C"), vec![0]);
    }

    #[test]
    fn test_home_counts() {
        let s = sample_schedule();
        let counts = s.home_counts();
        assert_eq!(counts[&"A"], 1);
        assert_eq!(counts[&"B"], 1);
        assert_eq!(counts[&"C"], 1);
    }

    #[test]
    fn test_pairings_iterator_carries_round() {
        let s = sample_schedule();
        let rounds: Vec<usize> = s.pairings().map(|(r, _)| r).collect();
        assert_eq!(rounds, vec![0, 1, 2]);
    }
}
