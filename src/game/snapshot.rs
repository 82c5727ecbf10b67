//! Read-only view handed to renderers

use super::{GameStatus, Round, Session};
use crate::core::{KeyStatuses, LetterStatus, aggregate};

/// Tile colouring, with `Initial` for tiles not yet scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileStatus {
    Initial,
    Absent,
    Present,
    Correct,
}

impl From<LetterStatus> for TileStatus {
    fn from(status: LetterStatus) -> Self {
        match status {
            LetterStatus::Absent => Self::Absent,
            LetterStatus::Present => Self::Present,
            LetterStatus::Correct => Self::Correct,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub letter: Option<char>,
    pub status: TileStatus,
    pub cursor: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub tiles: Vec<TileView>,
    /// This row is the in-progress guess
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub solved: bool,
    /// Shown once the board is solved or the level is over
    pub solution: Option<String>,
    /// Always `max_challenges` rows
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone)]
pub struct Snapshot {
    pub level: u32,
    pub score: i64,
    pub hint_cost: i64,
    pub status: GameStatus,
    pub attempts_used: usize,
    pub max_challenges: usize,
    pub word_length: usize,
    pub boards: Vec<BoardView>,
    pub keyboard: KeyStatuses,
}

impl Snapshot {
    #[must_use]
    pub fn capture(session: &Session, round: &Round) -> Self {
        let word_length = round.buffer().len();
        let boards = (0..round.solutions().len())
            .map(|board| board_view(round, board, word_length))
            .collect();

        Self {
            level: session.level,
            score: session.score,
            hint_cost: session.hint_cost,
            status: round.status(),
            attempts_used: round.guesses().len(),
            max_challenges: round.max_challenges(),
            word_length,
            boards,
            keyboard: aggregate(round.guesses(), round.solutions(), round.solved()),
        }
    }

    /// Keyboard status of `letter`, `Initial` if never classified
    #[must_use]
    pub fn key_status(&self, letter: char) -> TileStatus {
        self.keyboard
            .get(&letter.to_ascii_uppercase())
            .map_or(TileStatus::Initial, |&status| status.into())
    }
}

fn board_view(round: &Round, board: usize, word_length: usize) -> BoardView {
    let solved = round.solved()[board];
    let mut rows: Vec<RowView> = round
        .board_feedback(board)
        .into_iter()
        .map(|(guess, feedback)| RowView {
            tiles: guess
                .letters()
                .iter()
                .zip(feedback.statuses())
                .map(|(&letter, &status)| TileView {
                    letter: Some(char::from(letter)),
                    status: status.into(),
                    cursor: false,
                })
                .collect(),
            active: false,
        })
        .collect();

    if !solved && round.status() == GameStatus::Playing {
        let buffer = round.buffer();
        rows.push(RowView {
            tiles: buffer
                .slots()
                .iter()
                .enumerate()
                .map(|(i, &letter)| TileView {
                    letter,
                    status: TileStatus::Initial,
                    cursor: i == buffer.cursor(),
                })
                .collect(),
            active: true,
        });
    }

    let blank = RowView {
        tiles: vec![
            TileView {
                letter: None,
                status: TileStatus::Initial,
                cursor: false,
            };
            word_length
        ],
        active: false,
    };
    rows.resize(round.max_challenges().max(rows.len()), blank);

    BoardView {
        solved,
        solution: (solved || round.status().is_over())
            .then(|| round.solutions()[board].to_string()),
        rows,
    }
}
