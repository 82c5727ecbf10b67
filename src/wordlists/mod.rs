//! Word lists for the puzzle
//!
//! Embedded word lists compiled into the binary, the solution pool, the
//! shared validation vocabulary and its remote augmentation.

pub mod dictionary;
pub mod loader;
pub mod pool;
mod vocabulary;

pub use dictionary::DictionaryService;
pub use pool::WordPool;
pub use vocabulary::Vocabulary;

// Generated by build.rs from data/answers.txt and data/allowed.txt
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));

/// Pool of embedded answers with the embedded fallback validation list
///
/// Only meaningful for five-letter words; other lengths need a custom list.
#[must_use]
pub fn embedded_pool() -> WordPool {
    WordPool::new(5, ANSWERS, Vocabulary::from_words(5, ALLOWED))
}
