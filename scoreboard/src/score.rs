use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Home,
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

/// Goals for both sides. Unbounded above, floored at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    home: u32,
    away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    pub fn add_goal(&mut self, side: Side) {
        let goals = self.goals_mut(side);
        *goals = goals.saturating_add(1);
    }

    /// Take a goal back. Removing from a zero score is a no-op.
    pub fn remove_goal(&mut self, side: Side) {
        let goals = self.goals_mut(side);
        *goals = goals.saturating_sub(1);
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    pub fn home(&self) -> u32 {
        self.home
    }

    pub fn away(&self) -> u32 {
        self.away
    }

    pub fn is_goalless(&self) -> bool {
        self.home == 0 && self.away == 0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn goals_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.home, self.away)
    }
}
