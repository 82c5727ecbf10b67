//! In-progress guess editing
//!
//! A fixed-length row of optional letters plus the cursor that direct input
//! targets. The cursor always stays within `[0, len - 1]`.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessBuffer {
    slots: Vec<Option<char>>,
    cursor: usize,
}

impl GuessBuffer {
    /// Create an empty buffer of `length` slots
    ///
    /// # Panics
    /// Panics if `length` is zero.
    #[must_use]
    pub fn new(length: usize) -> Self {
        assert!(length > 0, "guess buffer needs at least one slot");
        Self {
            slots: vec![None; length],
            cursor: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    fn last(&self) -> usize {
        self.slots.len() - 1
    }

    /// Write `letter` at the cursor and step right unless on the last slot
    pub fn type_letter(&mut self, letter: char) {
        self.slots[self.cursor] = Some(letter);
        if self.cursor < self.last() {
            self.cursor += 1;
        }
    }

    /// Clear the slot under the cursor, or step left and clear that one
    pub fn backspace(&mut self) {
        if self.slots[self.cursor].is_some() {
            self.slots[self.cursor] = None;
        } else {
            self.cursor = self.cursor.saturating_sub(1);
            self.slots[self.cursor] = None;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.last());
    }

    /// Place the cursor on `index`; out-of-range indices are ignored
    pub fn set_cursor(&mut self, index: usize) -> bool {
        if index < self.slots.len() {
            self.cursor = index;
            true
        } else {
            false
        }
    }

    /// Write `letter` at `index` without moving the cursor
    pub(crate) fn fill(&mut self, index: usize, letter: char) {
        self.slots[index] = Some(letter);
    }

    /// Move the cursor to the first empty slot at or after it, capped at the last slot
    pub(crate) fn skip_filled(&mut self) {
        self.cursor = (self.cursor..self.slots.len())
            .find(|&i| self.slots[i].is_none())
            .unwrap_or(self.last());
    }

    /// Empty every slot, re-insert `revealed` letters and home the cursor
    pub(crate) fn reset(&mut self, revealed: &BTreeMap<usize, char>) {
        self.slots.fill(None);
        for (&index, &letter) in revealed {
            if index < self.slots.len() {
                self.slots[index] = Some(letter);
            }
        }
        self.cursor = 0;
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The joined guess, if every slot is filled
    #[must_use]
    pub fn word(&self) -> Option<String> {
        self.slots.iter().copied().collect()
    }

    /// Empty slot indices
    pub fn empty_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| i)
    }
}
