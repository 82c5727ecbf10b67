//! Multiboard Wordle
//!
//! A word-guessing puzzle played on several boards at once: every guess is
//! scored against every hidden word, attempts are shared, and each level adds
//! one more board and one more attempt. Points earned by solving early can be
//! spent on hints that reveal a letter of the first unsolved word.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_multiboard::game::{Action, GameConfig, GameStatus, RoundController};
//! use wordle_multiboard::wordlists::embedded_pool;
//!
//! let mut game =
//!     RoundController::new(GameConfig::default(), embedded_pool(), StdRng::seed_from_u64(1))
//!         .unwrap();
//!
//! let answer = game.round().solutions()[0].to_string();
//! for letter in answer.chars() {
//!     game.apply(Action::Letter(letter));
//! }
//! let outcome = game.apply(Action::Enter);
//!
//! assert_eq!(game.status(), GameStatus::Won);
//! assert_eq!(outcome.message.as_deref(), Some("+100 points"));
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
