//! Difficulty and economy parameters

/// Tunable rules of the game
///
/// Word length is not part of the config: it is a property of the word pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Attempts at level 0; each level adds one
    pub base_attempts: usize,
    /// Hint cost at the start of every level
    pub base_hint_cost: i64,
    /// Increase in hint cost after each purchased hint
    pub hint_cost_step: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_attempts: 6,
            base_hint_cost: 5,
            hint_cost_step: 5,
        }
    }
}

impl GameConfig {
    /// Number of simultaneous boards at `level`
    #[must_use]
    pub const fn num_words(&self, level: u32) -> usize {
        level as usize + 1
    }

    /// Shared attempt budget at `level`
    #[must_use]
    pub const fn max_challenges(&self, level: u32) -> usize {
        self.base_attempts + level as usize
    }
}

/// Points for solving a board after `attempts_before` earlier guesses
///
/// 100 on the first guess, 15 fewer per earlier guess, never below 10.
#[must_use]
pub const fn solve_points(attempts_before: usize) -> i64 {
    let points = 100 - 15 * attempts_before as i64;
    if points < 10 { 10 } else { points }
}
