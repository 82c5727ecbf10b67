//! Decoded player input and the result of applying it

use crate::error::GameError;

/// One logical input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Letter(char),
    Enter,
    Backspace,
    ArrowLeft,
    ArrowRight,
    TileClick(usize),
    HintRequest,
    AdvanceLevel,
    RestartLevel,
    ResetToZero,
}

/// Feedback for the front end after one action
///
/// A rejected action carries its error; the session is unchanged in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub message: Option<String>,
    pub shake: bool,
    pub error: Option<GameError>,
    /// A new level was initialized; pending transient signals are stale
    pub new_level: bool,
}

impl Outcome {
    #[must_use]
    pub fn rejected(error: GameError) -> Self {
        let message = match error {
            GameError::NotPlaying => None,
            ref other => Some(other.to_string()),
        };
        Self {
            message,
            shake: error.shakes(),
            error: Some(error),
            new_level: false,
        }
    }

    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_outcome_carries_shake_and_message() {
        let outcome = Outcome::rejected(GameError::IncompleteGuess);
        assert!(outcome.shake);
        assert!(outcome.is_rejected());
        assert_eq!(outcome.message.as_deref(), Some("Not enough letters"));
    }

    #[test]
    fn not_playing_is_silent() {
        let outcome = Outcome::rejected(GameError::NotPlaying);
        assert_eq!(outcome.message, None);
        assert!(!outcome.shake);
    }
}
