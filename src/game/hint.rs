//! Paid hints
//!
//! A hint reveals one letter of the first unsolved board into an empty slot of
//! the guess buffer. Revealed letters persist across turns until their board
//! is solved. Each purchase costs `hint_cost` points and makes the next one
//! more expensive.

use super::Session;
use super::round::Round;
use crate::error::{GameError, GameResult};
use rand::Rng;
use std::collections::BTreeMap;

/// Letters revealed so far and the board they come from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintState {
    revealed: BTreeMap<usize, char>,
    target: Option<usize>,
}

impl HintState {
    /// Board the current reveals are drawn from
    #[must_use]
    pub const fn target(&self) -> Option<usize> {
        self.target
    }

    /// Slot index to revealed letter
    #[must_use]
    pub const fn revealed(&self) -> &BTreeMap<usize, char> {
        &self.revealed
    }

    pub(crate) fn clear(&mut self) {
        self.revealed.clear();
        self.target = None;
    }
}

/// What a successful hint revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintReveal {
    pub board: usize,
    pub index: usize,
    pub letter: char,
    pub cost: i64,
}

/// Buy one hint
///
/// On error nothing is mutated.
///
/// # Errors
/// - `InsufficientScore` if `score < hint_cost`
/// - `NoHintableSlot` if every slot is filled or already revealed
/// - `NotPlaying` if every board is solved
pub(crate) fn request_hint<R: Rng + ?Sized>(
    session: &mut Session,
    round: &mut Round,
    cost_step: i64,
    rng: &mut R,
) -> GameResult<HintReveal> {
    if session.score < session.hint_cost {
        return Err(GameError::InsufficientScore {
            score: session.score,
            cost: session.hint_cost,
        });
    }

    let board = round.first_unsolved().ok_or(GameError::NotPlaying)?;
    let retarget = round
        .hint
        .target
        .is_none_or(|target| round.solved[target] || target != board);

    let candidates: Vec<usize> = round
        .buffer
        .empty_slots()
        .filter(|index| retarget || !round.hint.revealed.contains_key(index))
        .collect();
    if candidates.is_empty() {
        return Err(GameError::NoHintableSlot);
    }

    let index = candidates[rng.random_range(0..candidates.len())];
    let letter = round.solutions[board].letter_at(index);

    if retarget {
        round.hint.revealed.clear();
        round.hint.target = Some(board);
    }
    round.hint.revealed.insert(index, letter);
    round.buffer.fill(index, letter);

    let cost = session.hint_cost;
    session.score -= cost;
    session.hint_cost += cost_step;

    if index == round.buffer.cursor() {
        round.buffer.skip_filled();
    }

    Ok(HintReveal {
        board,
        index,
        letter,
        cost,
    })
}
