use crate::app::{self, App};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::ActionTx;
use super::dispatch;

pub(super) fn handle_settings_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Tab | KeyCode::Down => app.settings_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.settings_prev_field(),
        KeyCode::Left => app.settings_cursor_left(),
        KeyCode::Right => app.settings_cursor_right(),
        KeyCode::Backspace => app.settings_backspace(),
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.settings_clear_field();
        }
        KeyCode::Enter => {
            if let Some(commands) = app.settings_submit() {
                for command in commands {
                    dispatch(action_tx, command);
                }
            }
        }
        KeyCode::Esc => {
            app.navigate_to(app::View::Scoreboard);
            app.set_status("Settings unchanged".to_string());
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.settings_input_char(c);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::View;
    use crate::config::ScoreboardConfig;
    use scoreboard::{Command, MatchDuration, Side};

    use super::super::super::action_queue::{channel, Action};

    fn code(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn settings_app() -> App {
        let mut app = App::new(&ScoreboardConfig::default());
        app.navigate_to(View::Settings);
        app
    }

    fn type_str(app: &mut App, action_tx: &ActionTx, s: &str) {
        for c in s.chars() {
            handle_settings_key(code(KeyCode::Char(c)), app, action_tx);
        }
    }

    #[test]
    fn enter_dispatches_every_changed_setting() {
        let mut app = settings_app();
        let (tx, mut rx) = channel();

        // Home: "Time A" -> "Time AC"
        type_str(&mut app, &tx, "C");
        handle_settings_key(code(KeyCode::Tab), &mut app, &tx);
        handle_settings_key(code(KeyCode::Tab), &mut app, &tx);
        handle_settings_key(code(KeyCode::Backspace), &mut app, &tx);
        handle_settings_key(code(KeyCode::Backspace), &mut app, &tx);
        type_str(&mut app, &tx, "45");
        handle_settings_key(code(KeyCode::Enter), &mut app, &tx);

        let mut actions = Vec::new();
        while let Ok(action) = rx.try_recv() {
            actions.push(action);
        }
        assert_eq!(
            actions,
            vec![
                Action::Dispatch(Command::SetTeamName(Side::Home, "Time AC".to_string())),
                Action::Dispatch(Command::SetDuration(MatchDuration::new(45).unwrap())),
            ]
        );
        assert_eq!(app.current_view, View::Scoreboard);
    }

    #[test]
    fn invalid_duration_is_not_dispatched() {
        let mut app = settings_app();
        let (tx, mut rx) = channel();

        handle_settings_key(code(KeyCode::BackTab), &mut app, &tx);
        handle_settings_key(code(KeyCode::Backspace), &mut app, &tx);
        handle_settings_key(code(KeyCode::Backspace), &mut app, &tx);
        type_str(&mut app, &tx, "0");
        handle_settings_key(code(KeyCode::Enter), &mut app, &tx);

        assert!(rx.try_recv().is_err());
        assert_eq!(app.current_view, View::Settings);
        assert!(app
            .settings_form
            .as_ref()
            .is_some_and(|f| f.validation_error.is_some()));
    }

    #[test]
    fn escape_discards_the_draft() {
        let mut app = settings_app();
        let (tx, mut rx) = channel();

        type_str(&mut app, &tx, "xyz");
        handle_settings_key(code(KeyCode::Esc), &mut app, &tx);

        assert!(rx.try_recv().is_err());
        assert_eq!(app.current_view, View::Scoreboard);
        assert_eq!(app.scoreboard.team_name(Side::Home), "Time A");
    }

    #[test]
    fn ctrl_c_quits_from_the_dialog() {
        let mut app = settings_app();
        let (tx, mut rx) = channel();

        handle_settings_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
            &tx,
        );

        assert!(!app.running);
        assert!(rx.try_recv().is_err());
        let form = app.settings_form.as_ref().unwrap();
        assert_eq!(form.home_team.value, "Time A");
    }
}
