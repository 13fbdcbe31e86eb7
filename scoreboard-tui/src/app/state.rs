use scoreboard::{MatchDuration, ScoreboardError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Scoreboard,
    Settings,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerSize {
    Normal,
    Large,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor.
    pub fn backspace(&mut self) {
        let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() else {
            return;
        };
        self.value.drain(idx..self.cursor);
        self.cursor = idx;
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsField {
    HomeTeam,
    AwayTeam,
    Duration,
}

impl SettingsField {
    pub fn next(self) -> Self {
        match self {
            SettingsField::HomeTeam => SettingsField::AwayTeam,
            SettingsField::AwayTeam => SettingsField::Duration,
            SettingsField::Duration => SettingsField::HomeTeam,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SettingsField::HomeTeam => SettingsField::Duration,
            SettingsField::AwayTeam => SettingsField::HomeTeam,
            SettingsField::Duration => SettingsField::AwayTeam,
        }
    }
}

/// Values confirmed in the settings dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsUpdate {
    pub home_team: String,
    pub away_team: String,
    pub duration: MatchDuration,
}

/// Draft state of the settings dialog. Nothing reaches the scoreboard until submit.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsForm {
    pub home_team: TextInput,
    pub away_team: TextInput,
    pub duration: TextInput,
    pub focused_field: SettingsField,
    pub validation_error: Option<String>,
}

impl SettingsForm {
    pub fn new(home_team: &str, away_team: &str, duration: MatchDuration) -> Self {
        Self {
            home_team: TextInput::from_str(home_team),
            away_team: TextInput::from_str(away_team),
            duration: TextInput::from_str(&duration.to_string()),
            focused_field: SettingsField::HomeTeam,
            validation_error: None,
        }
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            SettingsField::HomeTeam => &mut self.home_team,
            SettingsField::AwayTeam => &mut self.away_team,
            SettingsField::Duration => &mut self.duration,
        }
    }

    pub fn parse(&self) -> Result<SettingsUpdate, ScoreboardError> {
        Ok(SettingsUpdate {
            home_team: self.home_team.value.clone(),
            away_team: self.away_team.value.clone(),
            duration: self.duration.value.parse()?,
        })
    }
}
