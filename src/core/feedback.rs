//! Per-letter feedback for a guess against one solution
//!
//! Each slot gets one of three statuses:
//! - Absent (letter not in the solution, or all its copies already credited)
//! - Present (letter in the solution at another slot)
//! - Correct (letter in the right slot)
//!
//! Duplicate letters are credited at most once per copy in the solution.

use super::Word;
use std::fmt;

/// Status of a single letter
///
/// Ordered by strength so `max` gives the best-known status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// ASCII symbol (`G`, `Y`, `-`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterStatus>);

impl Feedback {
    /// Score `guess` against `solution`
    ///
    /// Both words must have the same length.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume those solution slots
    /// 2. Second pass: for each remaining guess slot, consume the lowest
    ///    unconsumed solution slot with the same letter, if any
    ///
    /// # Examples
    /// ```
    /// use wordle_multiboard::core::{Feedback, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let solution = Word::new("erase").unwrap();
    ///
    /// // S(present) P(absent) E(present) E(present) D(absent)
    /// assert_eq!(Feedback::calculate(&guess, &solution).to_string(), "Y-YY-");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        debug_assert_eq!(guess.len(), solution.len(), "length mismatch");

        let guess = guess.letters();
        let solution = solution.letters();
        let mut result = vec![LetterStatus::Absent; guess.len()];
        let mut consumed = vec![false; solution.len()];

        for (i, (g, s)) in guess.iter().zip(solution).enumerate() {
            if g == s {
                result[i] = LetterStatus::Correct;
                consumed[i] = true;
            }
        }

        for (i, &letter) in guess.iter().enumerate() {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            let slot = solution
                .iter()
                .enumerate()
                .position(|(j, &s)| !consumed[j] && s == letter);
            if let Some(j) = slot {
                result[i] = LetterStatus::Present;
                consumed[j] = true;
            }
        }

        Self(result)
    }

    /// Statuses in slot order
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.symbol())?;
        }
        Ok(())
    }
}
