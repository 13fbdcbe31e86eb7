//! Match state for a football scoreboard: the match clock, the score and the
//! log of finished matches, tied together by [`Scoreboard`].
//!
//! Nothing in here does I/O or owns a timer. A presentation layer drives the
//! clock by sending [`Command::Tick`] once per second while
//! [`MatchClock::is_running`] holds, and reacts to [`ClockEvent::Alarm`].

mod clock;
mod error;
mod history;
mod score;
mod scoreboard;

pub use clock::*;
pub use error::*;
pub use history::*;
pub use score::*;
pub use scoreboard::*;
pub use time::UtcOffset;
