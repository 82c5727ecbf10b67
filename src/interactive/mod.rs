//! Interactive TUI interface

pub mod app;
pub mod rendering;
pub mod signals;

pub use app::{App, Command, map_key, run_tui};
pub use signals::{SignalBoard, SignalTimings};
