//! Guess-validation vocabulary
//!
//! An append-only set of uppercase words of one fixed length. Clones share the
//! same underlying set, so a background dictionary fetch can union new words
//! in while the game keeps reading. Entries are never removed.

use super::loader::normalize_entry;
use rustc_hash::FxHashSet;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone)]
pub struct Vocabulary {
    length: usize,
    words: Arc<RwLock<FxHashSet<String>>>,
}

impl Vocabulary {
    /// Create an empty vocabulary for words of `length` letters
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            length,
            words: Arc::new(RwLock::new(FxHashSet::default())),
        }
    }

    /// Create a vocabulary seeded from raw entries
    #[must_use]
    pub fn from_words<S: AsRef<str>>(length: usize, entries: &[S]) -> Self {
        let vocabulary = Self::new(length);
        vocabulary.extend(entries.iter().map(|entry| entry.as_ref()));
        vocabulary
    }

    /// Word length every entry has
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.length
    }

    /// Union many entries in under one write lock, returning how many were new
    ///
    /// Entries that do not normalize to `length` letters are dropped.
    pub fn extend<'a, I>(&self, entries: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let normalized: Vec<String> = entries
            .into_iter()
            .filter_map(|entry| normalize_entry(entry, self.length))
            .collect();

        let mut words = self.words.write().unwrap_or_else(PoisonError::into_inner);
        normalized
            .into_iter()
            .filter(|word| words.insert(word.clone()))
            .count()
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let upper = word.trim().to_ascii_uppercase();
        self.words
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&upper)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
