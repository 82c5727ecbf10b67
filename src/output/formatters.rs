//! Formatting utilities for terminal output

use crate::game::{RowView, TileStatus};
use colored::{ColoredString, Colorize};

/// Format one tile as a coloured ` A ` cell
#[must_use]
pub fn colored_tile(letter: Option<char>, status: TileStatus) -> ColoredString {
    let cell = format!(" {} ", letter.unwrap_or('·'));
    match status {
        TileStatus::Correct => cell.black().on_green().bold(),
        TileStatus::Present => cell.black().on_yellow().bold(),
        TileStatus::Absent => cell.white().on_bright_black(),
        TileStatus::Initial => cell.normal(),
    }
}

/// Format a board row; the cursor slot of the active row is underlined
#[must_use]
pub fn format_row(row: &RowView) -> String {
    row.tiles
        .iter()
        .map(|tile| {
            let cell = colored_tile(tile.letter, tile.status);
            let cell = if tile.cursor { cell.underline() } else { cell };
            cell.to_string()
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Plain-text width of a formatted row
#[must_use]
pub const fn row_width(word_length: usize) -> usize {
    word_length * 3
}

/// Emoji line for a scored row, empty for unscored rows
#[must_use]
pub fn row_to_emoji(row: &RowView) -> String {
    row.tiles
        .iter()
        .filter_map(|tile| match tile.status {
            TileStatus::Correct => Some('🟩'),
            TileStatus::Present => Some('🟨'),
            TileStatus::Absent => Some('⬜'),
            TileStatus::Initial => None,
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
