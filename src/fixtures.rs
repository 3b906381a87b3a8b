//! Match drafting from generator output.
//!
//! Wires the pure generators to match creation: a round-robin schedule
//! becomes dated league fixtures, and a recurrence rule becomes a series of
//! fixtures between two fixed teams. Round spacing is supplied by the
//! caller through [`RoundCalendar`]; nothing here reads the clock.

use chrono::{Days, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{MatchDraft, RecurrenceSpec, RoundRobinSchedule};
use crate::recurrence::{self, RecurrenceLimits};
use crate::round_robin;

/// Default spacing between league rounds.
pub const DEFAULT_ROUND_INTERVAL_DAYS: u32 = 7;

/// When league rounds are played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundCalendar {
    /// Kickoff of round 0.
    pub first_round: NaiveDateTime,
    /// Days between consecutive rounds.
    #[serde(default = "default_interval")]
    pub interval_days: u32,
}

fn default_interval() -> u32 {
    DEFAULT_ROUND_INTERVAL_DAYS
}

impl RoundCalendar {
    /// Weekly rounds starting at `first_round`.
    pub fn weekly(first_round: NaiveDateTime) -> Self {
        Self {
            first_round,
            interval_days: DEFAULT_ROUND_INTERVAL_DAYS,
        }
    }

    /// Sets the spacing between rounds.
    pub fn with_interval_days(mut self, days: u32) -> Self {
        self.interval_days = days;
        self
    }

    /// Kickoff of round `round`, or `None` past the representable range.
    pub fn kickoff(&self, round: usize) -> Option<NaiveDateTime> {
        let offset = (round as u64).checked_mul(u64::from(self.interval_days))?;
        self.first_round.checked_add_days(Days::new(offset))
    }
}

/// Persistence layer for match drafts.
pub trait MatchSink<T> {
    /// Stored match type returned by the sink.
    type Match;

    /// Creates all drafts as one batch.
    fn create_matches(&mut self, drafts: Vec<MatchDraft<T>>) -> Result<Vec<Self::Match>>;
}

/// Dates every fixture of a schedule by its round.
pub fn schedule_drafts<T: Clone>(
    schedule: &RoundRobinSchedule<T>,
    calendar: &RoundCalendar,
) -> Vec<MatchDraft<T>> {
    let mut drafts = Vec::with_capacity(schedule.pairing_count());
    for round in &schedule.rounds {
        let Some(kickoff) = calendar.kickoff(round.index) else {
            warn!(round = round.index, "round kickoff out of range, skipping");
            continue;
        };
        drafts.extend(round.pairings.iter().map(|p| {
            MatchDraft::new(kickoff, p.home.clone(), p.away.clone()).in_round(round.index)
        }));
    }
    drafts
}

/// Single round-robin league fixtures.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_fixture::fixtures::{league_fixtures, RoundCalendar};
///
/// let first = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap().and_hms_opt(15, 0, 0).unwrap();
/// let drafts = league_fixtures(&["A", "B", "C", "D"], &RoundCalendar::weekly(first));
/// assert_eq!(drafts.len(), 6);
/// assert_eq!(drafts[5].round, Some(2));
/// ```
pub fn league_fixtures<T: Clone>(competitors: &[T], calendar: &RoundCalendar) -> Vec<MatchDraft<T>> {
    schedule_drafts(&round_robin::generate(competitors), calendar)
}

/// Fixtures between two fixed teams, one per expanded timestamp.
pub fn recurring_series<T: Clone>(
    home: &T,
    away: &T,
    spec: &RecurrenceSpec,
    limits: &RecurrenceLimits,
) -> Vec<MatchDraft<T>> {
    recurrence::expand_with_limits(spec, limits)
        .into_iter()
        .map(|kickoff| MatchDraft::new(kickoff, home.clone(), away.clone()))
        .collect()
}

/// Drafts league fixtures and hands them to the sink in one call.
pub fn publish_league<T, S>(
    competitors: &[T],
    calendar: &RoundCalendar,
    sink: &mut S,
) -> Result<Vec<S::Match>>
where
    T: Clone,
    S: MatchSink<T> + ?Sized,
{
    let drafts = league_fixtures(competitors, calendar);
    debug!(
        competitors = competitors.len(),
        matches = drafts.len(),
        "publishing league fixtures"
    );
    sink.create_matches(drafts)
}

/// Drafts a recurring series and hands it to the sink in one call.
pub fn publish_series<T, S>(
    home: &T,
    away: &T,
    spec: &RecurrenceSpec,
    limits: &RecurrenceLimits,
    sink: &mut S,
) -> Result<Vec<S::Match>>
where
    T: Clone,
    S: MatchSink<T> + ?Sized,
{
    let drafts = recurring_series(home, away, spec, limits);
    debug!(pattern = ?spec.pattern, matches = drafts.len(), "publishing recurring series");
    sink.create_matches(drafts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixtureError;
    use chrono::NaiveDate;

    fn kickoff(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[derive(Default)]
    struct VecSink {
        stored: Vec<MatchDraft<String>>,
        reject: bool,
    }

    impl MatchSink<String> for VecSink {
        type Match = usize;

        fn create_matches(&mut self, drafts: Vec<MatchDraft<String>>) -> Result<Vec<usize>> {
            if self.reject {
                return Err(FixtureError::persistence("read-only"));
            }
            let start = self.stored.len();
            self.stored.extend(drafts);
            Ok((start..self.stored.len()).collect())
        }
    }

    #[test]
    fn test_round_calendar_spacing() {
        let cal = RoundCalendar::weekly(kickoff(2026, 3, 7, 15));
        assert_eq!(cal.kickoff(0), Some(kickoff(2026, 3, 7, 15)));
        assert_eq!(cal.kickoff(2), Some(kickoff(2026, 3, 21, 15)));

        let cal = cal.with_interval_days(3);
        assert_eq!(cal.kickoff(1), Some(kickoff(2026, 3, 10, 15)));
    }

    #[test]
    fn test_league_fixtures_dated_by_round() {
        let cal = RoundCalendar::weekly(kickoff(2026, 3, 7, 15));
        let drafts = league_fixtures(&["A", "B", "C", "D"], &cal);
        assert_eq!(drafts.len(), 6);
        for d in &drafts {
            let round = d.round.unwrap();
            assert_eq!(Some(d.kickoff), cal.kickoff(round));
        }
    }

    #[test]
    fn test_league_fixtures_degenerate() {
        let cal = RoundCalendar::weekly(kickoff(2026, 3, 7, 15));
        assert!(league_fixtures(&["A"], &cal).is_empty());
    }

    #[test]
    fn test_recurring_series_fixed_teams() {
        let spec = RecurrenceSpec::biweekly(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap())
            .at(20, 0)
            .unwrap()
            .occurrences(3);
        let drafts = recurring_series(&"home", &"away", &spec, &RecurrenceLimits::default());
        assert_eq!(drafts.len(), 3);
        assert!(drafts.iter().all(|d| d.home == "home" && d.away == "away"));
        assert!(drafts.iter().all(|d| d.round.is_none()));
        assert_eq!(drafts[1].kickoff, kickoff(2025, 12, 15, 20));
    }

    #[test]
    fn test_publish_league_single_call() {
        let teams: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        let mut sink = VecSink::default();
        let ids = publish_league(&teams, &RoundCalendar::weekly(kickoff(2026, 1, 1, 18)), &mut sink)
            .unwrap();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(sink.stored.len(), 3);
    }

    #[test]
    fn test_publish_series_propagates_sink_error() {
        let spec = RecurrenceSpec::daily(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()).occurrences(2);
        let mut sink = VecSink {
            reject: true,
            ..Default::default()
        };
        let err = publish_series(
            &"A".to_string(),
            &"B".to_string(),
            &spec,
            &RecurrenceLimits::default(),
            &mut sink,
        )
        .unwrap_err();
        assert!(matches!(err, FixtureError::Persistence(_)));
    }
}
