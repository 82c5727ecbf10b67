//! Session-wide counters and game status

/// Status of the current level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Counters that outlive a single level
///
/// `score` carries across level advances and restarts; it returns to 0 only
/// on a reset to level 0. It may go negative: the only gate is the hint check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub level: u32,
    pub score: i64,
    pub hint_cost: i64,
}

impl Session {
    #[must_use]
    pub const fn new(level: u32, score: i64, hint_cost: i64) -> Self {
        Self {
            level,
            score,
            hint_cost,
        }
    }
}
