//! Error taxonomy for the game engine
//!
//! Every rejected action maps to one of these variants. None of them is fatal:
//! the session is left exactly as it was before the action.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The guess buffer still has empty slots at submit time.
    #[error("Not enough letters")]
    IncompleteGuess,

    /// A complete guess that is not in the validation vocabulary.
    #[error("{0} is not in the word list")]
    UnknownWord(String),

    /// A hint was requested while the score is below its cost.
    #[error("Not enough points for a hint ({score} < {cost})")]
    InsufficientScore { score: i64, cost: i64 },

    /// Every slot is either filled or already revealed.
    #[error("No empty slot left to reveal")]
    NoHintableSlot,

    /// Solution selection ran out of distinct eligible words.
    #[error("Need {requested} distinct words but only {available} are eligible")]
    PoolExhausted { requested: usize, available: usize },

    /// The remote dictionary could not be fetched or decoded.
    #[error("Dictionary fetch failed: {0}")]
    DictionaryFetchFailed(String),

    /// The action is not allowed in the current game status.
    #[error("Action not available right now")]
    NotPlaying,
}

impl GameError {
    /// Whether the front end should shake the active row for this rejection.
    #[must_use]
    pub const fn shakes(&self) -> bool {
        matches!(
            self,
            Self::IncompleteGuess | Self::UnknownWord(_) | Self::NoHintableSlot
        )
    }
}

pub type GameResult<T> = Result<T, GameError>;
