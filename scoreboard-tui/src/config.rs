use anyhow::{Context, Result};
use scoreboard::{MatchDuration, DEFAULT_AWAY_TEAM, DEFAULT_HOME_TEAM};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "scoreboard-tui";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreboardConfig {
    /// Team name shown on the left when the app starts
    #[serde(default = "default_home_team")]
    pub home_team: String,

    /// Team name shown on the right when the app starts
    #[serde(default = "default_away_team")]
    pub away_team: String,

    /// Regulation match length in minutes, must be greater than zero
    #[serde(default)]
    pub duration_minutes: MatchDuration,

    /// How many bell rings the end-of-match alarm plays
    #[serde(default = "default_alarm_beeps")]
    pub alarm_beeps: u32,

    /// Where tracing output goes. Defaults to the user cache directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_home_team() -> String {
    DEFAULT_HOME_TEAM.to_string()
}

fn default_away_team() -> String {
    DEFAULT_AWAY_TEAM.to_string()
}

fn default_alarm_beeps() -> u32 {
    10
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            home_team: default_home_team(),
            away_team: default_away_team(),
            duration_minutes: MatchDuration::default(),
            alarm_beeps: default_alarm_beeps(),
            log_file: None,
        }
    }
}

impl ScoreboardConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join(APP_DIR)
            .join("config.toml"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    /// Write the default config unless a file is already there.
    pub fn ensure_default_at(path: &Path) -> Result<()> {
        if path.exists() {
            return Ok(());
        }
        Self::default().save_to(path)
    }

    pub fn log_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }
        Ok(dirs::cache_dir()
            .context("Cannot determine cache directory")?
            .join(APP_DIR)
            .join("scoreboard.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScoreboardConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, ScoreboardConfig::default());
        assert_eq!(config.home_team, "Time A");
        assert_eq!(config.duration_minutes.minutes(), 10);
        assert_eq!(config.alarm_beeps, 10);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "home_team = \"Lions\"\nduration_minutes = 45\n").unwrap();

        let config = ScoreboardConfig::load_from(&path).unwrap();
        assert_eq!(config.home_team, "Lions");
        assert_eq!(config.away_team, "Time B");
        assert_eq!(config.duration_minutes.minutes(), 45);
    }

    #[test]
    fn zero_duration_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "duration_minutes = 0\n").unwrap();

        let err = ScoreboardConfig::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn ensure_default_writes_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        ScoreboardConfig::ensure_default_at(&path).unwrap();
        let written = ScoreboardConfig::load_from(&path).unwrap();
        assert_eq!(written, ScoreboardConfig::default());

        std::fs::write(&path, "away_team = \"Kept\"\n").unwrap();
        ScoreboardConfig::ensure_default_at(&path).unwrap();
        let kept = ScoreboardConfig::load_from(&path).unwrap();
        assert_eq!(kept.away_team, "Kept");
    }

    #[test]
    fn explicit_log_file_wins() {
        let config = ScoreboardConfig {
            log_file: Some(PathBuf::from("/tmp/board.log")),
            ..ScoreboardConfig::default()
        };
        assert_eq!(config.log_path().unwrap(), PathBuf::from("/tmp/board.log"));
    }
}
