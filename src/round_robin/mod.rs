//! Round-robin pairing generation (circle method).
//!
//! # Algorithm
//!
//! 1. If the competitor count is odd, pad the working list with a bye
//!    placeholder so its length `m` is even.
//! 2. Play `m - 1` rounds. In each round, slot `i` meets slot `m - 1 - i`
//!    for `i < m / 2`. Pairings against the placeholder are dropped; the
//!    real competitor in that slot has a bye.
//! 3. Between rounds, move the last slot to index 1. Slot 0 (the anchor)
//!    never moves.
//!
//! Every non-anchor position visits every non-anchor slot exactly once, so
//! every unordered pair meets exactly once and, for odd counts, every
//! competitor meets the placeholder (sits out) exactly once.
//!
//! # Complexity
//! O(n²) time and output size.
//!
//! # Reference
//! Kirkman (1847); Berger (1899), "Berger tables" for tournament rounds

use tracing::debug;

use crate::models::{Pairing, Round, RoundRobinSchedule};

/// Generates a single round-robin schedule.
///
/// Fewer than two competitors yield an empty schedule. Identifiers are
/// treated as opaque labels and are not deduplicated; see
/// [`validate_competitors`](crate::validation::validate_competitors) for
/// the caller-side checks.
///
/// # Example
///
/// ```
/// use u_fixture::round_robin;
///
/// let schedule = round_robin::generate(&["A", "B", "C", "D"]);
/// assert_eq!(schedule.round_count(), 3);
/// assert_eq!(schedule.pairing_count(), 6);
/// ```
pub fn generate<T: Clone>(competitors: &[T]) -> RoundRobinSchedule<T> {
    if competitors.len() < 2 {
        debug!(
            competitors = competitors.len(),
            "fewer than two competitors, empty schedule"
        );
        return RoundRobinSchedule::new();
    }

    // `None` is the bye placeholder, so it can never collide with a real id.
    let mut slots: Vec<Option<T>> = competitors.iter().cloned().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let m = slots.len();

    let mut rounds = Vec::with_capacity(m - 1);
    for index in 0..m - 1 {
        let mut round = Round::new(index);
        for i in 0..m / 2 {
            if let (Some(home), Some(away)) = (&slots[i], &slots[m - 1 - i]) {
                round.pairings.push(Pairing::new(home.clone(), away.clone()));
            }
        }
        rounds.push(round);
        rotate(&mut slots);
    }

    debug!(
        competitors = competitors.len(),
        rounds = rounds.len(),
        "generated round-robin schedule"
    );
    RoundRobinSchedule { rounds }
}

/// Generates a double round-robin schedule.
///
/// The first half is [`generate`]; the second half repeats it with home
/// and away swapped, so every ordered pair meets exactly once.
pub fn generate_double<T: Clone>(competitors: &[T]) -> RoundRobinSchedule<T> {
    let mut schedule = generate(competitors);
    let offset = schedule.round_count();
    let mirrored: Vec<Round<T>> = schedule
        .rounds
        .iter()
        .map(|r| Round {
            index: r.index + offset,
            pairings: r.pairings.iter().cloned().map(Pairing::reversed).collect(),
        })
        .collect();
    schedule.rounds.extend(mirrored);
    schedule
}

/// Moves the last slot to index 1, keeping the anchor at index 0.
fn rotate<T>(slots: &mut Vec<Option<T>>) {
    if slots.len() > 2 {
        if let Some(last) = slots.pop() {
            slots.insert(1, last);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn unordered<T: Ord + Clone>(p: &Pairing<T>) -> (T, T) {
        if p.home <= p.away {
            (p.home.clone(), p.away.clone())
        } else {
            (p.away.clone(), p.home.clone())
        }
    }

    #[test]
    fn test_four_teams() {
        let s = generate(&["A", "B", "C", "D"]);
        assert_eq!(s.round_count(), 3);
        assert_eq!(s.pairing_count(), 6);

        let pairs: HashSet<(&str, &str)> = s.pairings().map(|(_, p)| unordered(p)).collect();
        let expected: HashSet<(&str, &str)> = [
            ("A", "B"),
            ("A", "C"),
            ("A", "D"),
            ("B", "C"),
            ("B", "D"),
            ("C", "D"),
        ]
        .into_iter()
        .collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_first_round_layout() {
        // Round 0 pairs slot i with slot m-1-i.
        let s = generate(&["A", "B", "C", "D"]);
        assert_eq!(
            s.rounds[0].pairings,
            vec![Pairing::new("A", "D"), Pairing::new("B", "C")]
        );
        // After rotation: [A, D, B, C]
        assert_eq!(
            s.rounds[1].pairings,
            vec![Pairing::new("A", "C"), Pairing::new("D", "B")]
        );
    }

    #[test]
    fn test_three_teams_byes() {
        let s = generate(&["A", "B", "C"]);
        assert_eq!(s.round_count(), 3);
        assert_eq!(s.pairing_count(), 3);
        for id in ["A", "B", "C"] {
            assert_eq!(s.bye_rounds_for(&id).len(), 1, "{id} should sit out once");
        }
        for r in &s.rounds {
            assert_eq!(r.len(), 1);
        }
    }

    #[test]
    fn test_two_teams() {
        let s = generate(&["A", "B"]);
        assert_eq!(s.round_count(), 1);
        assert_eq!(s.rounds[0].pairings, vec![Pairing::new("A", "B")]);
    }

    #[test]
    fn test_degenerate_input() {
        assert!(generate::<&str>(&[]).is_empty());
        assert!(generate(&["solo"]).is_empty());
    }

    #[test]
    fn test_no_competitor_twice_per_round() {
        let teams: Vec<String> = (0..9).map(|i| format!("T{i}")).collect();
        let s = generate(&teams);
        for r in &s.rounds {
            let mut seen = HashSet::new();
            for p in &r.pairings {
                assert!(seen.insert(&p.home));
                assert!(seen.insert(&p.away));
            }
        }
    }

    #[test]
    fn test_round_indices_sequential() {
        let s = generate(&[1, 2, 3, 4, 5, 6]);
        let indices: Vec<usize> = s.rounds.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_double_round_robin() {
        let s = generate_double(&["A", "B", "C", "D"]);
        assert_eq!(s.round_count(), 6);
        assert_eq!(s.pairing_count(), 12);

        let ordered: HashSet<(&str, &str)> = s.pairings().map(|(_, p)| (p.home, p.away)).collect();
        assert_eq!(ordered.len(), 12);

        let homes: HashMap<&str, usize> = s.home_counts();
        assert!(homes.values().all(|&h| h == 3));
        assert_eq!(s.rounds[3].index, 3);
    }
}
