use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ScoreboardError;

pub const DEFAULT_DURATION_MINUTES: u32 = 10;

/// Regulation length of a match in whole minutes. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MatchDuration(u32);

impl MatchDuration {
    pub fn new(minutes: u32) -> Result<Self, ScoreboardError> {
        if minutes == 0 {
            return Err(ScoreboardError::InvalidDuration(minutes.to_string()));
        }
        Ok(Self(minutes))
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }

    pub fn as_seconds(&self) -> u64 {
        u64::from(self.0) * 60
    }
}

impl Default for MatchDuration {
    fn default() -> Self {
        Self(DEFAULT_DURATION_MINUTES)
    }
}

impl fmt::Display for MatchDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MatchDuration {
    type Err = ScoreboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let minutes = s
            .trim()
            .parse::<u32>()
            .map_err(|_| ScoreboardError::InvalidDuration(s.to_string()))?;
        Self::new(minutes)
    }
}

impl TryFrom<u32> for MatchDuration {
    type Error = ScoreboardError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl From<MatchDuration> for u32 {
    fn from(duration: MatchDuration) -> Self {
        duration.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Stopped,
    Running,
}

/// Notifications raised by the clock itself rather than by a user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    /// Elapsed time reached the configured total. Raised once between resets.
    Alarm,
}

/// Counts up from zero towards `duration + extra time`.
///
/// The clock never schedules anything on its own; whoever owns it calls
/// [`MatchClock::tick`] once per second while it is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchClock {
    elapsed_seconds: u64,
    duration: MatchDuration,
    extra_seconds: u64,
    state: TimerState,
    alarm_fired: bool,
}

impl MatchClock {
    pub fn new(duration: MatchDuration) -> Self {
        Self {
            elapsed_seconds: 0,
            duration,
            extra_seconds: 0,
            state: TimerState::Stopped,
            alarm_fired: false,
        }
    }

    /// Advance one second. A stopped clock ignores ticks.
    ///
    /// The first tick that reaches the total stops the clock and returns
    /// [`ClockEvent::Alarm`]. Later crossings stay silent until [`reset`].
    ///
    /// [`reset`]: MatchClock::reset
    pub fn tick(&mut self) -> Option<ClockEvent> {
        if self.state == TimerState::Stopped {
            return None;
        }

        self.elapsed_seconds += 1;

        if self.alarm_fired || self.elapsed_seconds < self.total_seconds() {
            return None;
        }

        self.state = TimerState::Stopped;
        self.alarm_fired = true;
        info!(
            elapsed = self.elapsed_seconds,
            total = self.total_seconds(),
            "match time expired"
        );
        Some(ClockEvent::Alarm)
    }

    pub fn toggle_running(&mut self) {
        self.state = match self.state {
            TimerState::Stopped => TimerState::Running,
            TimerState::Running => TimerState::Stopped,
        };
    }

    pub fn start(&mut self) {
        self.state = TimerState::Running;
    }

    pub fn pause(&mut self) {
        self.state = TimerState::Stopped;
    }

    /// Add (or with a negative delta, remove) extra time. Saturates at zero.
    pub fn add_extra_time(&mut self, delta_seconds: i64) {
        let magnitude = delta_seconds.unsigned_abs();
        self.extra_seconds = if delta_seconds >= 0 {
            self.extra_seconds.saturating_add(magnitude)
        } else {
            self.extra_seconds.saturating_sub(magnitude)
        };
    }

    pub fn set_duration(&mut self, duration: MatchDuration) {
        self.duration = duration;
    }

    /// Back to 00:00, no extra time, stopped. The duration is kept.
    pub fn reset(&mut self) {
        self.elapsed_seconds = 0;
        self.extra_seconds = 0;
        self.state = TimerState::Stopped;
        self.alarm_fired = false;
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn duration(&self) -> MatchDuration {
        self.duration
    }

    pub fn extra_seconds(&self) -> u64 {
        self.extra_seconds
    }

    pub fn total_seconds(&self) -> u64 {
        self.duration.as_seconds().saturating_add(self.extra_seconds)
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.total_seconds().saturating_sub(self.elapsed_seconds)
    }

    /// True once play has gone past regulation time, with or without extra time.
    pub fn is_overtime(&self) -> bool {
        self.elapsed_seconds > self.duration.as_seconds()
    }

    /// Whole minutes played past regulation time.
    pub fn overtime_minutes(&self) -> u64 {
        self.elapsed_seconds.saturating_sub(self.duration.as_seconds()) / 60
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed_seconds >= self.total_seconds()
    }

    pub fn alarm_fired(&self) -> bool {
        self.alarm_fired
    }
}

impl Default for MatchClock {
    fn default() -> Self {
        Self::new(MatchDuration::default())
    }
}

/// Format seconds as `mm:ss`. Minutes are not wrapped into hours.
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
