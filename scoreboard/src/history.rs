use std::fmt;

use time::{Date, OffsetDateTime};
use tracing::info;

use crate::clock::MatchClock;
use crate::score::Score;

/// Identifies a finished match.
///
/// Derived from the Unix time in milliseconds when the record was made,
/// bumped forward if that would collide with the previous record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchId(u64);

impl MatchId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of a match taken when a new one was started. Never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    id: MatchId,
    home_team: String,
    away_team: String,
    home_score: u32,
    away_score: u32,
    duration_minutes: u64,
    date: Date,
}

impl MatchRecord {
    pub fn id(&self) -> MatchId {
        self.id
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    /// Minutes actually played, rounded down.
    pub fn duration_minutes(&self) -> u64 {
        self.duration_minutes
    }

    pub fn date(&self) -> Date {
        self.date
    }

    /// `dd/mm/yyyy`
    pub fn date_label(&self) -> String {
        format!(
            "{:02}/{:02}/{:04}",
            self.date.day(),
            self.date.month() as u8,
            self.date.year()
        )
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_score, self.away_team
        )
    }
}

/// Finished matches, most recent first.
#[derive(Debug, Clone, Default)]
pub struct MatchHistory {
    records: Vec<MatchRecord>,
    last_id: Option<MatchId>,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the current match.
    ///
    /// A match with at least one goal is prepended to the history; a goalless
    /// one is dropped. Either way the score and the clock are reset.
    pub fn record_and_reset(
        &mut self,
        home_team: &str,
        away_team: &str,
        score: &mut Score,
        clock: &mut MatchClock,
        today: Date,
    ) -> Option<&MatchRecord> {
        let recorded = if score.is_goalless() {
            false
        } else {
            let record = MatchRecord {
                id: self.next_id(),
                home_team: home_team.to_string(),
                away_team: away_team.to_string(),
                home_score: score.home(),
                away_score: score.away(),
                duration_minutes: clock.elapsed_seconds() / 60,
                date: today,
            };
            info!(id = %record.id, "recorded match {}", record);
            self.records.insert(0, record);
            true
        };

        score.reset();
        clock.reset();

        if recorded {
            self.records.first()
        } else {
            None
        }
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn latest(&self) -> Option<&MatchRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn next_id(&mut self) -> MatchId {
        let now_ms = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000).max(0) as u64;
        let id = match self.last_id {
            Some(last) if last.as_u64() >= now_ms => MatchId(last.as_u64() + 1),
            _ => MatchId(now_ms),
        };
        self.last_id = Some(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MatchDuration;
    use crate::score::Side;
    use time::macros::date;

    fn played_clock(seconds: u64) -> MatchClock {
        let mut clock = MatchClock::new(MatchDuration::new(90).unwrap());
        clock.start();
        for _ in 0..seconds {
            clock.tick();
        }
        clock
    }

    #[test]
    fn goalless_match_is_not_recorded_but_state_resets() {
        let mut history = MatchHistory::new();
        let mut score = Score::default();
        let mut clock = played_clock(300);
        clock.add_extra_time(120);

        let record = history.record_and_reset("A", "B", &mut score, &mut clock, date!(2024 - 05 - 01));

        assert!(record.is_none());
        assert!(history.is_empty());
        assert_eq!(clock.elapsed_seconds(), 0);
        assert_eq!(clock.extra_seconds(), 0);
        assert!(!clock.is_running());
    }

    #[test]
    fn scored_match_is_prepended_with_current_values() {
        let mut history = MatchHistory::new();
        let mut score = Score::new(2, 1);
        let mut clock = played_clock(125);

        let record = history
            .record_and_reset("A", "B", &mut score, &mut clock, date!(2024 - 05 - 01))
            .cloned()
            .unwrap();

        assert_eq!(record.home_team(), "A");
        assert_eq!(record.away_team(), "B");
        assert_eq!(record.home_score(), 2);
        assert_eq!(record.away_score(), 1);
        assert_eq!(record.duration_minutes(), 2);
        assert_eq!(record.date_label(), "01/05/2024");
        assert_eq!(record.to_string(), "A 2 - 1 B");
        assert_eq!(history.latest(), Some(&record));
        assert!(score.is_goalless());
        assert_eq!(clock.elapsed_seconds(), 0);
        assert!(!clock.is_running());
    }

    #[test]
    fn newest_match_comes_first() {
        let mut history = MatchHistory::new();
        let mut clock = played_clock(0);

        let mut score = Score::default();
        score.add_goal(Side::Home);
        history.record_and_reset("First", "X", &mut score, &mut clock, date!(2024 - 05 - 01));

        score.add_goal(Side::Away);
        history.record_and_reset("Second", "Y", &mut score, &mut clock, date!(2024 - 05 - 02));

        let names: Vec<&str> = history.records().iter().map(|r| r.home_team()).collect();
        assert_eq!(names, ["Second", "First"]);
    }

    #[test]
    fn ids_are_unique_even_within_one_millisecond() {
        let mut history = MatchHistory::new();
        let mut clock = MatchClock::default();

        for _ in 0..50 {
            let mut score = Score::new(1, 0);
            history.record_and_reset("A", "B", &mut score, &mut clock, date!(2024 - 05 - 01));
        }

        let mut ids: Vec<MatchId> = history.records().iter().map(|r| r.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
        // Newest first means ids descend.
        assert!(history.records()[0].id() > history.records()[49].id());
    }

    #[test]
    fn records_from_the_same_snapshot_do_not_alias() {
        let mut history = MatchHistory::new();
        let mut clock = MatchClock::default();
        let mut score = Score::new(0, 3);
        history.record_and_reset("A", "B", &mut score, &mut clock, date!(2024 - 05 - 01));

        score.add_goal(Side::Home);
        assert_eq!(history.records()[0].home_score(), 0);
        assert_eq!(history.records()[0].away_score(), 3);
    }
}
