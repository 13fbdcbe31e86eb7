use crate::app::{self, App};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_history_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Down | KeyCode::Char('j') => app.history_scroll_down(),
        KeyCode::Up | KeyCode::Char('k') => app.history_scroll_up(),
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.navigate_to(app::View::Scoreboard);
        }
        _ => {}
    }
}
