use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreboardError {
    #[error("Invalid match duration {0:?}: expected a whole number of minutes greater than zero")]
    InvalidDuration(String),
}
