use crate::app::App;
use scoreboard::{ClockEvent, Command};
use tracing::debug;

use super::action_queue::Action;
use super::alarm::{AlarmNotifier, Bell};
use super::ticker::TickSource;

pub(super) fn run_action<B: Bell + Clone>(
    action: Action,
    app: &mut App,
    ticker: &mut TickSource,
    alarm: &mut AlarmNotifier<B>,
) {
    match action {
        Action::Tick { generation } => {
            if !ticker.is_current(generation) {
                debug!(generation, "dropping stale tick");
                return;
            }
            apply_command(Command::Tick, app, ticker, alarm);
        }
        Action::Dispatch(command) => apply_command(command, app, ticker, alarm),
    }
}

fn apply_command<B: Bell + Clone>(
    command: Command,
    app: &mut App,
    ticker: &mut TickSource,
    alarm: &mut AlarmNotifier<B>,
) {
    let reschedule = command.reconfigures_clock();
    if command == Command::StartNewMatch {
        alarm.silence();
    }

    let event = app.scoreboard.apply(command.clone());
    let status = match event {
        Some(ClockEvent::Alarm) => {
            alarm.ring();
            Some("Time's up! The match has ended".to_string())
        }
        None => app.status_for(&command),
    };

    if reschedule || event.is_some() {
        ticker.sync(app.scoreboard.clock().is_running());
    }
    if let Some(status) = status {
        app.set_status(status);
    }
}
