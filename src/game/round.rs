//! State of one level: boards, shared guesses and the in-progress row
//!
//! Created and replaced wholesale by level initialization.

use super::GameStatus;
use super::buffer::GuessBuffer;
use super::hint::HintState;
use crate::core::{Feedback, Word};

#[derive(Debug, Clone)]
pub struct Round {
    pub(crate) solutions: Vec<Word>,
    pub(crate) solved: Vec<bool>,
    pub(crate) guesses: Vec<Word>,
    pub(crate) buffer: GuessBuffer,
    pub(crate) hint: HintState,
    pub(crate) status: GameStatus,
    pub(crate) max_challenges: usize,
}

impl Round {
    pub(crate) fn new(solutions: Vec<Word>, word_length: usize, max_challenges: usize) -> Self {
        Self {
            solved: vec![false; solutions.len()],
            solutions,
            guesses: Vec::with_capacity(max_challenges),
            buffer: GuessBuffer::new(word_length),
            hint: HintState::default(),
            status: GameStatus::Playing,
            max_challenges,
        }
    }

    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    #[must_use]
    pub fn solved(&self) -> &[bool] {
        &self.solved
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub const fn buffer(&self) -> &GuessBuffer {
        &self.buffer
    }

    #[must_use]
    pub const fn hint(&self) -> &HintState {
        &self.hint
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn max_challenges(&self) -> usize {
        self.max_challenges
    }

    /// Lowest-index board that is not solved yet
    #[must_use]
    pub fn first_unsolved(&self) -> Option<usize> {
        self.solved.iter().position(|&done| !done)
    }

    #[must_use]
    pub fn all_solved(&self) -> bool {
        self.solved.iter().all(|&done| done)
    }

    /// Index of the guess that solved `board`, if any
    #[must_use]
    pub fn solved_at(&self, board: usize) -> Option<usize> {
        if !self.solved[board] {
            return None;
        }
        let solution = &self.solutions[board];
        self.guesses.iter().position(|guess| guess == solution)
    }

    /// Feedback rows shown on `board`: every guess up to and including its solve
    #[must_use]
    pub fn board_feedback(&self, board: usize) -> Vec<(&Word, Feedback)> {
        let shown = self
            .solved_at(board)
            .map_or(self.guesses.len(), |at| at + 1);
        let solution = &self.solutions[board];

        self.guesses[..shown]
            .iter()
            .map(|guess| (guess, Feedback::calculate(guess, solution)))
            .collect()
    }
}
