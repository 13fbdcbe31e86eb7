use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

mod digits;
mod history_view;
mod main_view;
mod settings_dialog;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(frame.area());

    main_view::render_header(frame, root[0], app);

    // Dialogs draw on top of the scoreboard, which keeps updating underneath.
    let body = root[1];
    main_view::render_main_view(frame, app, body);
    match app.current_view {
        View::Scoreboard => {}
        View::Settings => settings_dialog::render_settings_dialog(frame, app),
        View::History => history_view::render_history_dialog(frame, app),
    }
}
