//! Game engine
//!
//! The session aggregate and the rules that transition it: level
//! initialization, guess editing and submission, scoring and hints.

mod action;
mod buffer;
mod config;
mod controller;
mod hint;
mod round;
mod session;
mod snapshot;

pub use action::{Action, Outcome};
pub use buffer::GuessBuffer;
pub use config::{GameConfig, solve_points};
pub use controller::RoundController;
pub use hint::{HintReveal, HintState};
pub use round::Round;
pub use session::{GameStatus, Session};
pub use snapshot::{BoardView, RowView, Snapshot, TileStatus, TileView};
