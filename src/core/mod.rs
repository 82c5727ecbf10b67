//! Core domain types for the puzzle
//!
//! Pure, deterministic building blocks shared by the game engine and the
//! front ends: words, per-guess feedback and the keyboard aggregate.

mod feedback;
pub mod keyboard;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use keyboard::{KeyStatuses, aggregate};
pub use word::{Word, WordError};
