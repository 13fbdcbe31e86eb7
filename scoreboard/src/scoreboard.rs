use time::{Date, OffsetDateTime, UtcOffset};
use tracing::debug;

use crate::clock::{format_clock, ClockEvent, MatchClock, MatchDuration};
use crate::history::{MatchHistory, MatchRecord};
use crate::score::{Score, Side};

pub const DEFAULT_HOME_TEAM: &str = "Time A";
pub const DEFAULT_AWAY_TEAM: &str = "Time B";

/// Everything a presentation layer can ask the scoreboard to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddGoal(Side),
    RemoveGoal(Side),
    ToggleClock,
    /// Signed seconds; negative values remove extra time.
    AdjustExtraTime(i64),
    SetTeamName(Side, String),
    SetDuration(MatchDuration),
    /// Archive the current match (if anyone scored) and reset score and clock.
    StartNewMatch,
    Tick,
}

impl Command {
    /// Whether a one-second tick source must be restarted after this command.
    pub fn reconfigures_clock(&self) -> bool {
        matches!(
            self,
            Command::ToggleClock
                | Command::AdjustExtraTime(_)
                | Command::SetDuration(_)
                | Command::StartNewMatch
        )
    }
}

/// Single owner of the whole match state.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    home_team: String,
    away_team: String,
    score: Score,
    clock: MatchClock,
    history: MatchHistory,
    utc_offset: UtcOffset,
}

impl Scoreboard {
    pub fn new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        duration: MatchDuration,
    ) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
            score: Score::default(),
            clock: MatchClock::new(duration),
            history: MatchHistory::new(),
            utc_offset: local_utc_offset(),
        }
    }

    /// Date match records with `offset` instead of the offset found at construction.
    pub fn with_utc_offset(mut self, offset: UtcOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    pub fn apply(&mut self, command: Command) -> Option<ClockEvent> {
        match command {
            Command::Tick => return self.clock.tick(),
            Command::AddGoal(side) => self.score.add_goal(side),
            Command::RemoveGoal(side) => self.score.remove_goal(side),
            Command::ToggleClock => {
                self.clock.toggle_running();
                debug!(state = ?self.clock.state(), "clock toggled");
            }
            Command::AdjustExtraTime(delta) => {
                self.clock.add_extra_time(delta);
                debug!(extra = self.clock.extra_seconds(), "extra time adjusted");
            }
            Command::SetTeamName(side, name) => self.set_team_name(side, name),
            Command::SetDuration(duration) => self.clock.set_duration(duration),
            Command::StartNewMatch => {
                self.start_new_match_on(self.today());
            }
        }
        None
    }

    /// Same as [`Command::StartNewMatch`] with an explicit date for the record.
    pub fn start_new_match_on(&mut self, today: Date) -> Option<&MatchRecord> {
        self.history.record_and_reset(
            &self.home_team,
            &self.away_team,
            &mut self.score,
            &mut self.clock,
            today,
        )
    }

    pub fn team_name(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn clock(&self) -> &MatchClock {
        &self.clock
    }

    pub fn history(&self) -> &MatchHistory {
        &self.history
    }

    pub fn snapshot(&self) -> ScoreboardView<'_> {
        let clock = &self.clock;
        ScoreboardView {
            home_team: &self.home_team,
            away_team: &self.away_team,
            home_score: self.score.home(),
            away_score: self.score.away(),
            elapsed: format_clock(clock.elapsed_seconds()),
            remaining: format_clock(clock.remaining_seconds()),
            extra: format_clock(clock.extra_seconds()),
            duration_minutes: clock.duration().minutes(),
            overtime_minutes: clock.is_overtime().then(|| clock.overtime_minutes()),
            expired: clock.is_expired(),
            running: clock.is_running(),
            history: self.history.records(),
        }
    }

    fn today(&self) -> Date {
        OffsetDateTime::now_utc().to_offset(self.utc_offset).date()
    }

    fn set_team_name(&mut self, side: Side, name: String) {
        match side {
            Side::Home => self.home_team = name,
            Side::Away => self.away_team = name,
        }
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(
            DEFAULT_HOME_TEAM,
            DEFAULT_AWAY_TEAM,
            MatchDuration::default(),
        )
    }
}

/// Read-only projection of the scoreboard for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreboardView<'a> {
    pub home_team: &'a str,
    pub away_team: &'a str,
    pub home_score: u32,
    pub away_score: u32,
    /// `mm:ss` since kick-off.
    pub elapsed: String,
    /// `mm:ss` until the total (duration plus extra time), never negative.
    pub remaining: String,
    /// `mm:ss` of extra time currently added.
    pub extra: String,
    pub duration_minutes: u32,
    /// Whole minutes past regulation time, `None` while still in regulation.
    pub overtime_minutes: Option<u64>,
    pub expired: bool,
    pub running: bool,
    pub history: &'a [MatchRecord],
}

/// The local UTC offset, or UTC when it cannot be determined.
///
/// On Unix the lookup fails once other threads exist, so a multi-threaded
/// program should call this before starting them and hand the result to
/// [`Scoreboard::with_utc_offset`].
pub fn local_utc_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}
