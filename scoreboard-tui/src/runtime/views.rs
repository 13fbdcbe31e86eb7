use crate::app::{self, App};
use crossterm::event::KeyEvent;
use scoreboard::Command;

use super::action_queue::{Action, ActionTx};

mod history;
mod main_view;
mod settings;

fn dispatch(action_tx: &ActionTx, command: Command) {
    let _ = action_tx.send(Action::Dispatch(command));
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match &app.current_view {
        app::View::Scoreboard => main_view::handle_main_view_key(key, app, action_tx),
        app::View::Settings => settings::handle_settings_key(key, app, action_tx),
        app::View::History => history::handle_history_key(key, app),
    }
}
