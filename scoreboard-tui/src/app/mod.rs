use crate::config::ScoreboardConfig;
use scoreboard::{Command, Scoreboard, UtcOffset};

mod settings;
mod state;
pub use state::{SettingsField, SettingsForm, TextInput, TimerSize, View};

pub struct App {
    pub running: bool,
    pub scoreboard: Scoreboard,
    pub current_view: View,
    pub timer_size: TimerSize,
    pub status_message: Option<String>,

    // Settings dialog draft, present only while the dialog is open
    pub settings_form: Option<SettingsForm>,

    // History dialog
    pub history_scroll: usize,
    pub history_view_height: usize, // Last-rendered inner height (updated by renderer each frame)
}

impl App {
    pub fn new(cfg: &ScoreboardConfig) -> Self {
        Self {
            running: true,
            scoreboard: Scoreboard::new(
                cfg.home_team.clone(),
                cfg.away_team.clone(),
                cfg.duration_minutes,
            ),
            current_view: View::Scoreboard,
            timer_size: TimerSize::Normal,
            status_message: None,
            settings_form: None,
            history_scroll: 0,
            history_view_height: 0,
        }
    }

    pub fn with_utc_offset(mut self, offset: UtcOffset) -> Self {
        self.scoreboard = self.scoreboard.with_utc_offset(offset);
        self
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn toggle_timer_size(&mut self) {
        self.timer_size = match self.timer_size {
            TimerSize::Normal => TimerSize::Large,
            TimerSize::Large => TimerSize::Normal,
        };
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Navigate to a different view
    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;

        match view {
            View::Settings => {
                let board = &self.scoreboard;
                self.settings_form = Some(SettingsForm::new(
                    board.team_name(scoreboard::Side::Home),
                    board.team_name(scoreboard::Side::Away),
                    board.clock().duration(),
                ));
            }
            View::History => {
                self.history_scroll = 0;
            }
            View::Scoreboard => {
                self.settings_form = None;
            }
        }
    }

    pub fn history_scroll_down(&mut self) {
        let len = self.scoreboard.history().len();
        let visible = self.history_view_height.max(1);
        if self.history_scroll + visible < len {
            self.history_scroll += 1;
        }
    }

    pub fn history_scroll_up(&mut self) {
        self.history_scroll = self.history_scroll.saturating_sub(1);
    }

    /// Status line to show after `command` has been applied, if any.
    pub fn status_for(&self, command: &Command) -> Option<String> {
        let board = &self.scoreboard;
        let clock = board.clock();
        match command {
            Command::AddGoal(side) => Some(format!("Goal for {}!", board.team_name(*side))),
            Command::RemoveGoal(side) => Some(format!(
                "Goal removed from {}",
                board.team_name(*side)
            )),
            Command::ToggleClock if clock.is_running() => Some("Clock started".to_string()),
            Command::ToggleClock => Some("Clock paused".to_string()),
            Command::AdjustExtraTime(_) => Some(format!(
                "Extra time: {}",
                scoreboard::format_clock(clock.extra_seconds())
            )),
            Command::StartNewMatch => Some("New match started".to_string()),
            Command::SetTeamName(..) | Command::SetDuration(_) | Command::Tick => None,
        }
    }

    /// Contextual hint when no explicit status message is set.
    pub fn get_contextual_status(&self) -> String {
        let clock = self.scoreboard.clock();
        if clock.is_expired() {
            "Time's up! Press N to start a new match".to_string()
        } else if clock.is_running() {
            "Match in progress".to_string()
        } else if clock.elapsed_seconds() == 0 {
            "Press Space to kick off".to_string()
        } else {
            "Clock paused".to_string()
        }
    }
}
