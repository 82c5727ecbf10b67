//! Best-known status per alphabet letter
//!
//! Folds the feedback of every guess against every unsolved board. Boards that
//! are already solved stop contributing evidence, so a letter that only ever
//! met solved boards stays unclassified.

use super::{Feedback, LetterStatus, Word};
use rustc_hash::FxHashMap;

/// Letter (uppercase) to its strongest observed status
pub type KeyStatuses = FxHashMap<char, LetterStatus>;

/// Aggregate keyboard statuses from the shared guess history
///
/// `solutions` and `solved` are parallel slices, one entry per board.
#[must_use]
pub fn aggregate(guesses: &[Word], solutions: &[Word], solved: &[bool]) -> KeyStatuses {
    let mut keys = KeyStatuses::default();

    let unsolved = solutions
        .iter()
        .zip(solved)
        .filter(|&(_, &done)| !done)
        .map(|(solution, _)| solution);

    for solution in unsolved {
        for guess in guesses {
            let feedback = Feedback::calculate(guess, solution);
            for (&letter, &status) in guess.letters().iter().zip(feedback.statuses()) {
                keys.entry(char::from(letter))
                    .and_modify(|best| *best = (*best).max(status))
                    .or_insert(status);
            }
        }
    }

    keys
}
