//! TUI rendering with ratatui
//!
//! Boards side by side (wrapping after four), the shared keyboard, toasts and
//! a status bar. Layout helpers are public so mouse clicks can be mapped back
//! onto the same tiles that were drawn.

use super::app::App;
use crate::game::{BoardView, GameStatus, RowView, Snapshot, TileStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::rc::Rc;

/// Columns a tile occupies (" A ")
const TILE_WIDTH: u16 = 3;
/// Tile plus the gap after it
const TILE_STRIDE: u16 = TILE_WIDTH + 1;
const BOARDS_PER_ROW: usize = 4;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<R>(f: &mut Frame, app: &App<R>) {
    let snapshot = app.controller.snapshot();
    let chunks = main_layout(f.area());

    render_header(f, &snapshot, chunks[0]);
    render_boards(f, app, &snapshot, chunks[1]);
    render_toast(f, app, chunks[2]);
    render_keyboard(f, &snapshot, chunks[3]);
    render_status(f, &snapshot, chunks[4]);
}

/// Header, boards, toast, keyboard, status bar
#[must_use]
pub fn main_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Boards
            Constraint::Length(3), // Toast
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(area)
}

/// Grid of board rectangles, at most four per row
#[must_use]
pub fn board_rects(area: Rect, boards: usize) -> Vec<Rect> {
    if boards == 0 {
        return Vec::new();
    }
    let columns = boards.min(BOARDS_PER_ROW);
    let rows = boards.div_ceil(BOARDS_PER_ROW);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    row_areas
        .iter()
        .flat_map(|&row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(row)
                .to_vec()
        })
        .take(boards)
        .collect()
}

/// Left padding that centers a row of `word_length` tiles in `width`
#[must_use]
pub fn tile_padding(width: u16, word_length: usize) -> u16 {
    let row_width = (TILE_STRIDE * word_length as u16).saturating_sub(1);
    width.saturating_sub(row_width) / 2
}

/// Slot index of the active-row tile under (`column`, `row`), if any
#[must_use]
pub fn active_tile_at(area: Rect, snapshot: &Snapshot, column: u16, row: u16) -> Option<usize> {
    let chunks = main_layout(area);
    let rects = board_rects(chunks[1], snapshot.boards.len());

    snapshot.boards.iter().zip(rects).find_map(|(board, rect)| {
        let active = board.rows.iter().position(|r| r.active)?;
        let inner = rect.inner(Margin::new(1, 1));
        if active as u16 >= inner.height || row != inner.y + active as u16 {
            return None;
        }

        let start = inner.x + tile_padding(inner.width, snapshot.word_length);
        let offset = column.checked_sub(start)?;
        let index = usize::from(offset / TILE_STRIDE);
        (index < snapshot.word_length && offset % TILE_STRIDE < TILE_WIDTH).then_some(index)
    })
}

fn status_style(status: TileStatus) -> Style {
    match status {
        TileStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        TileStatus::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        TileStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        TileStatus::Initial => Style::default().fg(Color::White),
    }
}

fn render_header(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let title = format!(
        "🎯 MULTIBOARD WORDLE - Level {} ({} words, {} attempts)",
        snapshot.level,
        snapshot.boards.len(),
        snapshot.max_challenges
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_boards<R>(f: &mut Frame, app: &App<R>, snapshot: &Snapshot, area: Rect) {
    let rects = board_rects(area, snapshot.boards.len());
    let shaking = app.signals.is_shaking();

    for (i, (board, rect)) in snapshot.boards.iter().zip(rects).enumerate() {
        render_board(f, board, i, shaking, rect);
    }
}

fn render_board(f: &mut Frame, board: &BoardView, index: usize, shaking: bool, area: Rect) {
    let inner = area.inner(Margin::new(1, 1));
    let word_length = board.rows.first().map_or(0, |r| r.tiles.len());
    let pad = " ".repeat(usize::from(tile_padding(inner.width, word_length)));

    let lines: Vec<Line> = board
        .rows
        .iter()
        .map(|row| board_row(row, &pad, shaking))
        .collect();

    let (title, color) = match (&board.solution, board.solved) {
        (Some(word), true) => (format!(" {} ✓ {word} ", index + 1), Color::Green),
        (Some(word), false) => (format!(" {} ✗ {word} ", index + 1), Color::Red),
        (None, _) => (format!(" {} ", index + 1), Color::White),
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );
    f.render_widget(paragraph, area);
}

fn board_row<'a>(row: &RowView, pad: &'a str, shaking: bool) -> Line<'a> {
    let mut spans = vec![Span::raw(pad)];

    for (i, tile) in row.tiles.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let letter = tile.letter.unwrap_or(if row.active { '_' } else { '·' });
        let mut style = status_style(tile.status);
        if row.active && shaking {
            style = style.fg(Color::Red).add_modifier(Modifier::BOLD);
        }
        if tile.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!(" {letter} "), style));
    }

    Line::from(spans)
}

fn render_toast<R>(f: &mut Frame, app: &App<R>, area: Rect) {
    let text = app.signals.toast().unwrap_or_default();
    let toast = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title(" Messages "));
    f.render_widget(toast, area);
}

fn render_keyboard(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|key| {
                    [
                        Span::styled(format!(" {key} "), status_style(snapshot.key_status(key))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(area);

    let score = Paragraph::new(format!("Score: {}", snapshot.score)).alignment(Alignment::Center);
    f.render_widget(score, chunks[0]);

    let hint = Paragraph::new(format!("Hint cost: {}", snapshot.hint_cost))
        .alignment(Alignment::Center);
    f.render_widget(hint, chunks[1]);

    let attempts = Paragraph::new(format!(
        "Attempts: {}/{}",
        snapshot.attempts_used, snapshot.max_challenges
    ))
    .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[2]);

    let (help_text, color) = match snapshot.status {
        GameStatus::Playing => (
            "Enter: Submit | ?: Hint | ←/→: Move | Ctrl-Z: Reset | Esc: Quit",
            Color::DarkGray,
        ),
        GameStatus::Won => (
            "🎉 Level complete! Enter: Next level | Ctrl-R: Replay | Esc: Quit",
            Color::Green,
        ),
        GameStatus::Lost => (
            "Out of attempts. Enter: Retry level | Ctrl-Z: Reset | Esc: Quit",
            Color::Red,
        ),
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color));
    f.render_widget(help, chunks[3]);
}
