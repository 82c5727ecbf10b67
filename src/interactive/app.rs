//! TUI application state and event loop

use super::rendering::active_tile_at;
use super::signals::{SignalBoard, SignalTimings};
use crate::game::{Action, GameStatus, Outcome, RoundController};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Upper bound on how long the loop blocks waiting for input
const IDLE_POLL: Duration = Duration::from_millis(250);

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Action),
    Quit,
}

/// Application state
pub struct App<R = StdRng> {
    pub controller: RoundController<R>,
    pub signals: SignalBoard,
    pub should_quit: bool,
    /// Terminal area of the last draw, for mouse hit-testing
    pub last_area: Rect,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(controller: RoundController<R>) -> Self {
        let signals = SignalBoard::new(SignalTimings::default(), controller.epoch());
        Self {
            controller,
            signals,
            should_quit: false,
            last_area: Rect::default(),
        }
    }

    /// Apply an action and raise the signals it produced
    pub fn dispatch(&mut self, action: Action, now: Instant) -> Outcome {
        let outcome = self.controller.apply(action);
        self.signals.record(&outcome, self.controller.epoch(), now);
        outcome
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match map_key(key, self.controller.status()) {
            Some(Command::Quit) => self.should_quit = true,
            Some(Command::Play(action)) => {
                self.dispatch(action, now);
            }
            None => {}
        }
    }

    /// Left click at terminal cell (`column`, `row`)
    pub fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        let snapshot = self.controller.snapshot();
        if let Some(index) = active_tile_at(self.last_area, &snapshot, column, row) {
            debug!(index, "tile clicked");
            self.dispatch(Action::TileClick(index), now);
        }
    }
}

/// Map a key press to a command
///
/// Enter submits while playing, advances after a win and retries after a loss.
#[must_use]
pub fn map_key(key: KeyEvent, status: GameStatus) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let action = match key.code {
        KeyCode::Esc => return Some(Command::Quit),
        KeyCode::Char('c') if ctrl => return Some(Command::Quit),
        KeyCode::Char('n') | KeyCode::F(2) if ctrl || key.code == KeyCode::F(2) => {
            Action::AdvanceLevel
        }
        KeyCode::Char('r') | KeyCode::F(5) if ctrl || key.code == KeyCode::F(5) => {
            Action::RestartLevel
        }
        KeyCode::Char('z') if ctrl => Action::ResetToZero,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char('?') | KeyCode::Tab => Action::HintRequest,
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Action::Letter(c),
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Left => Action::ArrowLeft,
        KeyCode::Right => Action::ArrowRight,
        KeyCode::Enter => match status {
            GameStatus::Playing => Action::Enter,
            GameStatus::Won => Action::AdvanceLevel,
            GameStatus::Lost => Action::RestartLevel,
        },
        _ => return None,
    };
    Some(Command::Play(action))
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        let frame = terminal.draw(|f| super::rendering::ui(f, &app))?;
        app.last_area = frame.area;

        let timeout = app
            .signals
            .next_deadline()
            .map_or(IDLE_POLL, |deadline| {
                deadline.saturating_duration_since(Instant::now())
            })
            .min(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key, Instant::now());
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    app.handle_click(mouse.column, mouse.row, Instant::now());
                }
                _ => {}
            }
        }
        app.signals.expire(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
