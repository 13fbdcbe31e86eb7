use super::*;
use scoreboard::Side;

impl App {
    pub fn settings_next_field(&mut self) {
        if let Some(form) = &mut self.settings_form {
            form.focused_field = form.focused_field.next();
        }
    }

    pub fn settings_prev_field(&mut self) {
        if let Some(form) = &mut self.settings_form {
            form.focused_field = form.focused_field.prev();
        }
    }

    pub fn settings_input_char(&mut self, c: char) {
        if let Some(form) = &mut self.settings_form {
            if form.focused_field == SettingsField::Duration && !c.is_ascii_digit() {
                return;
            }
            form.focused_input().insert(c);
            form.validation_error = None;
        }
    }

    pub fn settings_backspace(&mut self) {
        if let Some(form) = &mut self.settings_form {
            form.focused_input().backspace();
            form.validation_error = None;
        }
    }

    pub fn settings_clear_field(&mut self) {
        if let Some(form) = &mut self.settings_form {
            form.focused_input().clear();
            form.validation_error = None;
        }
    }

    pub fn settings_cursor_left(&mut self) {
        if let Some(form) = &mut self.settings_form {
            form.focused_input().move_left();
        }
    }

    pub fn settings_cursor_right(&mut self) {
        if let Some(form) = &mut self.settings_form {
            form.focused_input().move_right();
        }
    }

    /// Validate the open form.
    ///
    /// On success the dialog closes and the commands that apply it are returned.
    /// On failure the error stays on the form and nothing is returned.
    pub fn settings_submit(&mut self) -> Option<Vec<Command>> {
        let form = self.settings_form.as_mut()?;
        let update = match form.parse() {
            Ok(update) => update,
            Err(e) => {
                form.validation_error = Some(e.to_string());
                return None;
            }
        };

        let mut commands = Vec::new();
        let board = &self.scoreboard;
        if update.home_team != board.team_name(Side::Home) {
            commands.push(Command::SetTeamName(Side::Home, update.home_team));
        }
        if update.away_team != board.team_name(Side::Away) {
            commands.push(Command::SetTeamName(Side::Away, update.away_team));
        }
        if update.duration != board.clock().duration() {
            commands.push(Command::SetDuration(update.duration));
        }

        self.navigate_to(View::Scoreboard);
        self.set_status("Settings saved".to_string());
        Some(commands)
    }
}
