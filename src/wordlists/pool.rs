//! Solution selection and guess validation
//!
//! A `WordPool` pairs the candidate-solution list with the (larger) guess
//! validation vocabulary. Both hold words of a single length.

use super::Vocabulary;
use crate::core::Word;
use crate::error::{GameError, GameResult};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct WordPool {
    length: usize,
    candidates: Arc<[Word]>,
    vocabulary: Vocabulary,
}

impl WordPool {
    /// Build a pool from raw solution candidates and a validation vocabulary
    ///
    /// Candidates are filtered to eligible tokens and deduplicated, and every
    /// candidate is also made a valid guess.
    #[must_use]
    pub fn new<S: AsRef<str>>(length: usize, candidates: &[S], vocabulary: Vocabulary) -> Self {
        let candidates = eligible_words(candidates, length);
        vocabulary.extend(candidates.iter().map(Word::text));

        Self {
            length,
            candidates: candidates.into(),
            vocabulary,
        }
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.length
    }

    /// Eligible, distinct solution candidates
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Shared handle to the validation vocabulary
    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Draw `num_words` distinct solutions
    ///
    /// # Errors
    /// Returns `GameError::PoolExhausted` if fewer distinct candidates exist.
    pub fn select_solutions<R: Rng + ?Sized>(
        &self,
        num_words: usize,
        rng: &mut R,
    ) -> GameResult<Vec<Word>> {
        take_random(&self.candidates, num_words, rng)
    }

    /// Check a guess against the validation vocabulary
    #[must_use]
    pub fn is_valid_guess(&self, word: &str) -> bool {
        is_valid_guess(word, &self.vocabulary)
    }
}

/// Select `num_words` distinct random tokens of exactly `length` letters
///
/// Tokens containing separators or anything other than ASCII letters are not
/// eligible. Selection is a partial Fisher-Yates shuffle over the distinct
/// eligible tokens, so it always terminates.
///
/// # Errors
/// Returns `GameError::PoolExhausted` if `num_words` exceeds the number of
/// distinct eligible tokens.
pub fn select_solutions<S, R>(
    vocabulary: &[S],
    num_words: usize,
    length: usize,
    rng: &mut R,
) -> GameResult<Vec<Word>>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    take_random(&eligible_words(vocabulary, length), num_words, rng)
}

/// Membership test against the validation vocabulary
#[must_use]
pub fn is_valid_guess(word: &str, validation: &Vocabulary) -> bool {
    word.len() == validation.word_length() && validation.contains(word)
}

fn eligible_words<S: AsRef<str>>(tokens: &[S], length: usize) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    tokens
        .iter()
        .filter_map(|token| {
            let token = token.as_ref();
            // No trimming: embedded or surrounding separators disqualify
            if token.len() == length && token.bytes().all(|b| b.is_ascii_alphabetic()) {
                Word::new(token).ok()
            } else {
                None
            }
        })
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

fn take_random<R: Rng + ?Sized>(
    candidates: &[Word],
    num_words: usize,
    rng: &mut R,
) -> GameResult<Vec<Word>> {
    if num_words > candidates.len() {
        return Err(GameError::PoolExhausted {
            requested: num_words,
            available: candidates.len(),
        });
    }

    let mut indices: Vec<usize> = (0..candidates.len()).collect();
    for i in 0..num_words {
        let j = rng.random_range(i..indices.len());
        indices.swap(i, j);
    }

    Ok(indices[..num_words]
        .iter()
        .map(|&i| candidates[i].clone())
        .collect())
}
