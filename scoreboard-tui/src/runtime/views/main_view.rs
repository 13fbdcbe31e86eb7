use crate::app::{self, App};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use scoreboard::{Command, Side};

use super::super::action_queue::ActionTx;
use super::dispatch;

const ONE_MINUTE: i64 = 60;
const FIVE_MINUTES: i64 = 5 * 60;

pub(super) fn handle_main_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        // Ctrl+C also quits
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char(' ') => dispatch(action_tx, Command::ToggleClock),
        // Goals: a/z for the home side, k/m for the away side
        KeyCode::Char('a') | KeyCode::Char('A') => {
            dispatch(action_tx, Command::AddGoal(Side::Home))
        }
        KeyCode::Char('z') | KeyCode::Char('Z') => {
            dispatch(action_tx, Command::RemoveGoal(Side::Home))
        }
        KeyCode::Char('k') | KeyCode::Char('K') => {
            dispatch(action_tx, Command::AddGoal(Side::Away))
        }
        KeyCode::Char('m') | KeyCode::Char('M') => {
            dispatch(action_tx, Command::RemoveGoal(Side::Away))
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            dispatch(action_tx, Command::AdjustExtraTime(ONE_MINUTE))
        }
        KeyCode::Char(']') => dispatch(action_tx, Command::AdjustExtraTime(FIVE_MINUTES)),
        KeyCode::Char('-') => dispatch(action_tx, Command::AdjustExtraTime(-ONE_MINUTE)),
        KeyCode::Char('n') | KeyCode::Char('N') => dispatch(action_tx, Command::StartNewMatch),
        KeyCode::Char('s') | KeyCode::Char('S') => app.navigate_to(app::View::Settings),
        KeyCode::Char('h') | KeyCode::Char('H') => app.navigate_to(app::View::History),
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_timer_size(),
        KeyCode::Esc => app.clear_status(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{TimerSize, View};
    use crate::config::ScoreboardConfig;

    use super::super::super::action_queue::{channel, Action};

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn press(app: &mut App, key: KeyEvent) -> Vec<Action> {
        let (tx, mut rx) = channel();
        handle_main_view_key(key, app, &tx);
        let mut actions = Vec::new();
        while let Ok(action) = rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    fn test_app() -> App {
        App::new(&ScoreboardConfig::default())
    }

    #[test]
    fn score_keys_queue_goal_commands() {
        let mut app = test_app();
        assert_eq!(
            press(&mut app, key('a')),
            vec![Action::Dispatch(Command::AddGoal(Side::Home))]
        );
        assert_eq!(
            press(&mut app, key('z')),
            vec![Action::Dispatch(Command::RemoveGoal(Side::Home))]
        );
        assert_eq!(
            press(&mut app, key('k')),
            vec![Action::Dispatch(Command::AddGoal(Side::Away))]
        );
        assert_eq!(
            press(&mut app, key('m')),
            vec![Action::Dispatch(Command::RemoveGoal(Side::Away))]
        );
    }

    #[test]
    fn extra_time_keys_use_signed_minutes() {
        let mut app = test_app();
        assert_eq!(
            press(&mut app, key('+')),
            vec![Action::Dispatch(Command::AdjustExtraTime(60))]
        );
        assert_eq!(
            press(&mut app, key(']')),
            vec![Action::Dispatch(Command::AdjustExtraTime(300))]
        );
        assert_eq!(
            press(&mut app, key('-')),
            vec![Action::Dispatch(Command::AdjustExtraTime(-60))]
        );
    }

    #[test]
    fn space_toggles_and_n_starts_new_match() {
        let mut app = test_app();
        assert_eq!(
            press(&mut app, key(' ')),
            vec![Action::Dispatch(Command::ToggleClock)]
        );
        assert_eq!(
            press(&mut app, key('n')),
            vec![Action::Dispatch(Command::StartNewMatch)]
        );
    }

    #[test]
    fn view_keys_change_view_without_commands() {
        let mut app = test_app();
        assert!(press(&mut app, key('s')).is_empty());
        assert_eq!(app.current_view, View::Settings);

        app.navigate_to(View::Scoreboard);
        assert!(press(&mut app, key('h')).is_empty());
        assert_eq!(app.current_view, View::History);

        app.navigate_to(View::Scoreboard);
        press(&mut app, key('t'));
        assert_eq!(app.timer_size, TimerSize::Large);
    }

    #[test]
    fn quit_keys() {
        let mut app = test_app();
        press(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);

        let mut app = test_app();
        press(&mut app, key('q'));
        assert!(!app.running);
    }
}
