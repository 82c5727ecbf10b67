//! Round controller: the Playing / Won / Lost state machine
//!
//! All session state lives here and only changes through [`RoundController::apply`],
//! one action at a time. A rejected action leaves every field untouched.

use super::action::{Action, Outcome};
use super::config::{GameConfig, solve_points};
use super::hint::{self, HintReveal};
use super::round::Round;
use super::snapshot::Snapshot;
use super::{GameStatus, Session};
use crate::core::Word;
use crate::error::{GameError, GameResult};
use crate::wordlists::WordPool;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info};

pub struct RoundController<R = StdRng> {
    config: GameConfig,
    pool: WordPool,
    rng: R,
    session: Session,
    round: Round,
    epoch: u64,
}

impl<R: Rng> RoundController<R> {
    /// Start a fresh session at level 0 with score 0
    ///
    /// # Errors
    /// Returns `GameError::PoolExhausted` if the pool cannot supply one word.
    pub fn new(config: GameConfig, pool: WordPool, rng: R) -> GameResult<Self> {
        Self::resume(config, pool, rng, 0, 0)
    }

    /// Start a session at `level` with an existing `score`
    ///
    /// # Errors
    /// Returns `GameError::PoolExhausted` if the pool cannot supply
    /// `level + 1` distinct words.
    pub fn resume(
        config: GameConfig,
        pool: WordPool,
        mut rng: R,
        level: u32,
        score: i64,
    ) -> GameResult<Self> {
        let round = new_round(&config, &pool, &mut rng, level)?;
        let session = Session::new(level, score, config.base_hint_cost);
        info!(level, boards = round.solutions().len(), "session started");

        Ok(Self {
            config,
            pool,
            rng,
            session,
            round,
            epoch: 0,
        })
    }

    /// Apply one input event
    pub fn apply(&mut self, action: Action) -> Outcome {
        let epoch = self.epoch;
        let result = match action {
            Action::Letter(letter) => self.type_letter(letter),
            Action::Backspace => self.when_playing(|round| round.buffer.backspace()),
            Action::ArrowLeft => {
                self.round.buffer.move_left();
                Ok(None)
            }
            Action::ArrowRight => {
                self.round.buffer.move_right();
                Ok(None)
            }
            Action::TileClick(index) => self.when_playing(|round| {
                round.buffer.set_cursor(index);
            }),
            Action::Enter => self.submit(),
            Action::HintRequest => self.request_hint().map(|reveal| {
                Some(format!(
                    "Hint: {} in slot {} (-{} points)",
                    reveal.letter,
                    reveal.index + 1,
                    reveal.cost
                ))
            }),
            Action::AdvanceLevel => self.advance_level(),
            Action::RestartLevel => self.restart_level(),
            Action::ResetToZero => self.reset_to_zero(),
        };

        match result {
            Ok(message) => Outcome {
                message,
                new_level: self.epoch != epoch,
                ..Outcome::default()
            },
            Err(err) => {
                debug!(?action, error = %err, "action rejected");
                Outcome::rejected(err)
            }
        }
    }

    fn ensure_playing(&self) -> GameResult<()> {
        if self.round.status == GameStatus::Playing {
            Ok(())
        } else {
            Err(GameError::NotPlaying)
        }
    }

    fn when_playing(&mut self, edit: impl FnOnce(&mut Round)) -> GameResult<Option<String>> {
        self.ensure_playing()?;
        edit(&mut self.round);
        Ok(None)
    }

    fn type_letter(&mut self, letter: char) -> GameResult<Option<String>> {
        self.ensure_playing()?;
        if letter.is_ascii_alphabetic() {
            self.round.buffer.type_letter(letter.to_ascii_uppercase());
        }
        Ok(None)
    }

    /// Submit the guess buffer
    ///
    /// # Errors
    /// `IncompleteGuess`, `UnknownWord` or `NotPlaying`; nothing changes then.
    pub fn submit(&mut self) -> GameResult<Option<String>> {
        self.ensure_playing()?;

        let text = self
            .round
            .buffer
            .word()
            .ok_or(GameError::IncompleteGuess)?;
        if text.len() != self.round.buffer.len() {
            return Err(GameError::IncompleteGuess);
        }
        if !self.pool.is_valid_guess(&text) {
            return Err(GameError::UnknownWord(text));
        }
        let word = Word::new(&text).map_err(|_| GameError::UnknownWord(text))?;

        let attempts_before = self.round.guesses.len();
        self.round.guesses.push(word.clone());

        let mut turn_points = 0;
        for (board, solution) in self.round.solutions.iter().enumerate() {
            if !self.round.solved[board] && *solution == word {
                self.round.solved[board] = true;
                let points = solve_points(attempts_before);
                turn_points += points;
                info!(board, %word, points, attempts_before, "board solved");
            }
        }
        self.session.score += turn_points;

        let target_solved = self
            .round
            .hint
            .target()
            .is_some_and(|target| self.round.solved[target]);
        if target_solved {
            self.round.hint.clear();
        }
        self.round.buffer.reset(self.round.hint.revealed());

        self.round.status = if self.round.all_solved() {
            GameStatus::Won
        } else if self.round.guesses.len() >= self.round.max_challenges {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };

        let (level, score) = (self.session.level, self.session.score);
        match self.round.status {
            GameStatus::Won => info!(level, score, "level won"),
            GameStatus::Lost => info!(level, score, "level lost"),
            GameStatus::Playing => debug!(%word, turn_points, "guess accepted"),
        }

        let message = if turn_points > 0 {
            Some(format!("+{turn_points} points"))
        } else {
            match self.round.status {
                GameStatus::Won => Some("Level complete!".to_string()),
                GameStatus::Lost => Some("Out of attempts!".to_string()),
                GameStatus::Playing => None,
            }
        };
        Ok(message)
    }

    /// Buy a hint for the first unsolved board
    ///
    /// # Errors
    /// `InsufficientScore`, `NoHintableSlot` or `NotPlaying`; nothing changes then.
    pub fn request_hint(&mut self) -> GameResult<HintReveal> {
        self.ensure_playing()?;
        let reveal = hint::request_hint(
            &mut self.session,
            &mut self.round,
            self.config.hint_cost_step,
            &mut self.rng,
        )?;
        info!(
            board = reveal.board,
            slot = reveal.index,
            cost = reveal.cost,
            score = self.session.score,
            "hint purchased"
        );
        Ok(reveal)
    }

    /// Move to the next level after a win, keeping the score
    ///
    /// # Errors
    /// `NotPlaying` unless the level is won; `PoolExhausted` if the next level
    /// needs more words than the pool has (the won level stays in place).
    pub fn advance_level(&mut self) -> GameResult<Option<String>> {
        if self.round.status != GameStatus::Won {
            return Err(GameError::NotPlaying);
        }
        let level = self.session.level + 1;
        self.start_level(level)?;
        Ok(Some(format!("Level {level}")))
    }

    /// Replay the current level with new words after it ended
    ///
    /// # Errors
    /// `NotPlaying` while the level is still in progress.
    pub fn restart_level(&mut self) -> GameResult<Option<String>> {
        if self.round.status == GameStatus::Playing {
            return Err(GameError::NotPlaying);
        }
        self.start_level(self.session.level)?;
        Ok(Some(format!("Level {} restarted", self.session.level)))
    }

    /// Go back to level 0 with score 0
    ///
    /// # Errors
    /// `PoolExhausted` if the pool is empty.
    pub fn reset_to_zero(&mut self) -> GameResult<Option<String>> {
        self.start_level(0)?;
        self.session.score = 0;
        Ok(Some("Back to level 0".to_string()))
    }

    fn start_level(&mut self, level: u32) -> GameResult<()> {
        self.round = new_round(&self.config, &self.pool, &mut self.rng, level)?;
        self.session.level = level;
        self.session.hint_cost = self.config.base_hint_cost;
        self.epoch += 1;
        info!(level, boards = self.round.solutions().len(), "level started");
        Ok(())
    }
}

impl<R> RoundController<R> {
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.session, &self.round)
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.round.status
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn pool(&self) -> &WordPool {
        &self.pool
    }

    /// Incremented by every level initialization
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }
}

fn new_round<R: Rng + ?Sized>(
    config: &GameConfig,
    pool: &WordPool,
    rng: &mut R,
    level: u32,
) -> GameResult<Round> {
    let solutions = pool.select_solutions(config.num_words(level), rng)?;
    Ok(Round::new(
        solutions,
        pool.word_length(),
        config.max_challenges(level),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::TileStatus;
    use crate::wordlists::{Vocabulary, embedded_pool};
    use rand::SeedableRng;

    fn controller(level: u32, score: i64) -> RoundController {
        RoundController::resume(
            GameConfig::default(),
            embedded_pool(),
            StdRng::seed_from_u64(2024),
            level,
            score,
        )
        .unwrap()
    }

    fn type_word(game: &mut RoundController, word: &str) {
        for c in word.chars() {
            game.apply(Action::Letter(c));
        }
    }

    fn guess(game: &mut RoundController, word: &str) -> Outcome {
        type_word(game, word);
        game.apply(Action::Enter)
    }

    /// A valid word that is none of the current solutions
    fn wrong_word(game: &RoundController) -> String {
        ["CRANE", "SLATE", "PIANO", "MOUSE", "GHOST", "BRICK", "QUEEN"]
            .into_iter()
            .find(|w| game.round().solutions().iter().all(|s| s.text() != *w))
            .unwrap()
            .to_string()
    }

    fn solution(game: &RoundController, board: usize) -> String {
        game.round().solutions()[board].to_string()
    }

    #[test]
    fn win_on_first_guess_awards_hundred() {
        let mut game = controller(0, 0);
        let answer = solution(&game, 0);

        let outcome = guess(&mut game, &answer);

        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.session().score, 100);
        assert_eq!(game.round().solved(), &[true]);
        assert_eq!(outcome.message.as_deref(), Some("+100 points"));
    }

    #[test]
    fn six_wrong_guesses_lose_level_zero() {
        let mut game = controller(0, 0);
        let wrong = wrong_word(&game);

        for i in 0..6 {
            assert_eq!(game.status(), GameStatus::Playing, "guess {i}");
            guess(&mut game, &wrong);
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.round().solved(), &[false]);
        assert_eq!(game.round().guesses().len(), 6);
        assert_eq!(game.session().score, 0);
    }

    #[test]
    fn loss_message_is_out_of_attempts() {
        let mut game = controller(0, 0);
        let wrong = wrong_word(&game);
        let mut last = Outcome::default();
        for _ in 0..6 {
            last = guess(&mut game, &wrong);
        }
        assert_eq!(last.message.as_deref(), Some("Out of attempts!"));
        assert!(game.snapshot().boards[0].solution.is_some());
    }

    #[test]
    fn later_solves_score_less() {
        let mut game = controller(1, 0);
        let wrong = wrong_word(&game);
        let first = solution(&game, 0);
        let second = solution(&game, 1);

        guess(&mut game, &wrong);
        guess(&mut game, &first);
        assert_eq!(game.session().score, 85);
        assert_eq!(game.status(), GameStatus::Playing);

        guess(&mut game, &second);
        assert_eq!(game.session().score, 85 + 70);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn seventh_guess_solve_awards_ten() {
        // Level 1 allows 7 attempts
        let mut game = controller(1, 0);
        let wrong = wrong_word(&game);
        let first = solution(&game, 0);

        for _ in 0..6 {
            guess(&mut game, &wrong);
        }
        assert_eq!(game.status(), GameStatus::Playing);
        let outcome = guess(&mut game, &first);

        assert_eq!(game.session().score, 10);
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.round().solved(), &[true, false]);
        // Points take priority over the loss notice
        assert_eq!(outcome.message.as_deref(), Some("+10 points"));
    }

    #[test]
    fn solving_last_board_on_final_attempt_wins() {
        let mut game = controller(0, 0);
        let wrong = wrong_word(&game);
        let answer = solution(&game, 0);

        for _ in 0..5 {
            guess(&mut game, &wrong);
        }
        let outcome = guess(&mut game, &answer);

        assert_eq!(game.round().guesses().len(), game.round().max_challenges());
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.session().score, 25);
        assert_eq!(outcome.message.as_deref(), Some("+25 points"));
    }

    #[test]
    fn final_attempt_win_across_two_boards() {
        let mut game = controller(1, 0);
        let wrong = wrong_word(&game);
        let first = solution(&game, 0);
        let second = solution(&game, 1);

        guess(&mut game, &first);
        for _ in 0..5 {
            guess(&mut game, &wrong);
        }
        assert_eq!(game.status(), GameStatus::Playing);
        let outcome = guess(&mut game, &second);

        assert_eq!(game.round().guesses().len(), 7);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.session().score, 100 + 10);
        assert_eq!(outcome.message.as_deref(), Some("+10 points"));
        assert!(!game.apply(Action::RestartLevel).is_rejected());
    }

    #[test]
    fn incomplete_guess_is_rejected_with_shake() {
        let mut game = controller(0, 0);
        type_word(&mut game, "CRA");

        let outcome = game.apply(Action::Enter);

        assert_eq!(outcome.error, Some(GameError::IncompleteGuess));
        assert!(outcome.shake);
        assert!(game.round().guesses().is_empty());
        assert_eq!(game.round().buffer().cursor(), 3);
    }

    #[test]
    fn unknown_word_is_rejected_without_state_change() {
        let mut game = controller(0, 0);
        type_word(&mut game, "XQZJV");
        let before = game.round().buffer().clone();

        let outcome = game.apply(Action::Enter);

        assert_eq!(outcome.error, Some(GameError::UnknownWord("XQZJV".into())));
        assert!(outcome.shake);
        assert!(game.round().guesses().is_empty());
        assert_eq!(game.round().buffer(), &before);
    }

    #[test]
    fn accepted_guess_resets_buffer_and_cursor() {
        let mut game = controller(0, 0);
        let wrong = wrong_word(&game);
        guess(&mut game, &wrong);

        assert_eq!(game.round().guesses().len(), 1);
        assert!(game.round().buffer().is_blank());
        assert_eq!(game.round().buffer().cursor(), 0);
    }

    #[test]
    fn backspace_at_zero_is_noop() {
        let mut game = controller(0, 0);
        game.apply(Action::Backspace);
        assert_eq!(game.round().buffer().cursor(), 0);
        assert!(game.round().buffer().is_blank());
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut game = controller(0, 0);
        game.apply(Action::Letter('1'));
        game.apply(Action::Letter('é'));
        assert!(game.round().buffer().is_blank());
        game.apply(Action::Letter('q'));
        assert_eq!(game.round().buffer().slots()[0], Some('Q'));
    }

    #[test]
    fn tile_click_moves_cursor_only_while_playing() {
        let mut game = controller(0, 0);
        game.apply(Action::TileClick(3));
        assert_eq!(game.round().buffer().cursor(), 3);
        game.apply(Action::TileClick(9));
        assert_eq!(game.round().buffer().cursor(), 3);

        let answer = solution(&game, 0);
        game.apply(Action::TileClick(0));
        guess(&mut game, &answer);
        let outcome = game.apply(Action::TileClick(2));
        assert_eq!(outcome.error, Some(GameError::NotPlaying));
        assert_eq!(game.round().buffer().cursor(), 0);

        // Arrows stay harmless after the level ends
        game.apply(Action::ArrowRight);
        assert_eq!(game.round().buffer().cursor(), 1);
    }

    #[test]
    fn input_ignored_once_won() {
        let mut game = controller(0, 0);
        let answer = solution(&game, 0);
        guess(&mut game, &answer);

        let outcome = game.apply(Action::Letter('A'));
        assert_eq!(outcome.error, Some(GameError::NotPlaying));
        assert!(game.round().buffer().is_blank());
        assert_eq!(
            game.apply(Action::HintRequest).error,
            Some(GameError::NotPlaying)
        );
    }

    #[test]
    fn hint_economy() {
        let mut game = controller(0, 9);

        let outcome = game.apply(Action::HintRequest);
        assert!(!outcome.is_rejected());
        assert_eq!(game.session().score, 4);
        assert_eq!(game.session().hint_cost, 10);

        let buffer = game.round().buffer().clone();
        let hint = game.round().hint().clone();
        let outcome = game.apply(Action::HintRequest);

        assert_eq!(
            outcome.error,
            Some(GameError::InsufficientScore { score: 4, cost: 10 })
        );
        assert!(!outcome.shake);
        assert_eq!(game.session().score, 4);
        assert_eq!(game.session().hint_cost, 10);
        assert_eq!(game.round().buffer(), &buffer);
        assert_eq!(game.round().hint(), &hint);
    }

    #[test]
    fn hint_persists_until_target_solved() {
        let mut game = controller(0, 5);
        let answer = solution(&game, 0);
        let wrong = wrong_word(&game);

        let reveal = game.request_hint().unwrap();
        let letter = answer.as_bytes()[reveal.index] as char;
        assert_eq!(reveal.letter, letter);

        // Overwrite every slot with a wrong word and submit it
        game.apply(Action::TileClick(0));
        type_word(&mut game, &wrong);
        game.apply(Action::Enter);
        assert_eq!(game.round().guesses().len(), 1);
        assert_eq!(game.status(), GameStatus::Playing);

        // Survives the incorrect submission
        assert_eq!(game.round().buffer().slots()[reveal.index], Some(letter));
        assert_eq!(game.round().hint().target(), Some(0));
        assert_eq!(game.round().buffer().cursor(), 0);

        // Cleared the instant the board is solved
        game.apply(Action::TileClick(0));
        type_word(&mut game, &answer);
        game.apply(Action::Enter);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.round().hint().target(), None);
        assert!(game.round().hint().revealed().is_empty());
        assert!(game.round().buffer().is_blank());
    }

    #[test]
    fn hint_targets_first_unsolved_board() {
        let mut game = controller(2, 1000);
        let first = solution(&game, 0);
        guess(&mut game, &first);

        let reveal = game.request_hint().unwrap();
        assert_eq!(reveal.board, 1);
        assert_eq!(game.round().hint().target(), Some(1));
    }

    #[test]
    fn advance_level_carries_score_and_resets_round() {
        let mut game = controller(0, 0);
        assert_eq!(
            game.apply(Action::AdvanceLevel).error,
            Some(GameError::NotPlaying)
        );

        let answer = solution(&game, 0);
        guess(&mut game, &answer);
        let epoch = game.epoch();

        let outcome = game.apply(Action::AdvanceLevel);

        assert!(outcome.new_level);
        assert_eq!(game.epoch(), epoch + 1);
        assert_eq!(game.session().level, 1);
        assert_eq!(game.session().score, 100);
        assert_eq!(game.session().hint_cost, 5);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.round().solutions().len(), 2);
        assert_eq!(game.round().solved(), &[false, false]);
        assert_eq!(game.round().max_challenges(), 7);
        assert!(game.round().guesses().is_empty());
    }

    #[test]
    fn restart_only_after_level_ends() {
        let mut game = controller(1, 40);
        assert_eq!(
            game.apply(Action::RestartLevel).error,
            Some(GameError::NotPlaying)
        );

        let wrong = wrong_word(&game);
        for _ in 0..7 {
            guess(&mut game, &wrong);
        }
        assert_eq!(game.status(), GameStatus::Lost);

        let outcome = game.apply(Action::RestartLevel);
        assert!(outcome.new_level);
        assert_eq!(game.session().level, 1);
        assert_eq!(game.session().score, 40);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.round().solutions().len(), 2);
    }

    #[test]
    fn reset_to_zero_clears_score() {
        let mut game = controller(3, 250);
        game.request_hint().unwrap();

        let outcome = game.apply(Action::ResetToZero);

        assert!(outcome.new_level);
        assert_eq!(game.session().level, 0);
        assert_eq!(game.session().score, 0);
        assert_eq!(game.session().hint_cost, 5);
        assert_eq!(game.round().solutions().len(), 1);
        assert!(game.round().hint().target().is_none());
    }

    #[test]
    fn exhausted_pool_fails_construction() {
        let pool = WordPool::new(5, &["crane", "slate"], Vocabulary::new(5));
        let result = RoundController::resume(
            GameConfig::default(),
            pool,
            StdRng::seed_from_u64(1),
            2,
            0,
        );
        assert!(matches!(
            result,
            Err(GameError::PoolExhausted {
                requested: 3,
                available: 2
            })
        ));
    }

    #[test]
    fn exhausted_pool_keeps_won_level() {
        let pool = WordPool::new(5, &["crane"], Vocabulary::new(5));
        let mut game =
            RoundController::new(GameConfig::default(), pool, StdRng::seed_from_u64(1)).unwrap();
        guess(&mut game, "CRANE");

        let outcome = game.apply(Action::AdvanceLevel);

        assert!(matches!(
            outcome.error,
            Some(GameError::PoolExhausted { .. })
        ));
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.session().level, 0);
        assert_eq!(game.session().score, 100);
    }

    #[test]
    fn solved_boards_leave_the_keyboard() {
        let pool = WordPool::new(5, &["quick", "slate"], Vocabulary::new(5));
        let mut game =
            RoundController::resume(GameConfig::default(), pool, StdRng::seed_from_u64(1), 1, 0)
                .unwrap();
        guess(&mut game, "QUICK");

        // QUICK solved its own board, so only SLATE informs the keyboard
        let snapshot = game.snapshot();
        assert_eq!(snapshot.key_status('Q'), TileStatus::Absent);
        assert_eq!(snapshot.key_status('Z'), TileStatus::Initial);
    }

    #[test]
    fn snapshot_shows_active_row_and_cursor() {
        let mut game = controller(1, 0);
        let wrong = wrong_word(&game);
        guess(&mut game, &wrong);
        type_word(&mut game, "AB");

        let snapshot = game.snapshot();
        assert_eq!(snapshot.boards.len(), 2);
        assert_eq!(snapshot.attempts_used, 1);
        for board in &snapshot.boards {
            assert_eq!(board.rows.len(), 7);
            assert!(!board.rows[0].active);
            assert!(board.rows[1].active);
            assert_eq!(board.rows[1].tiles[0].letter, Some('A'));
            assert!(board.rows[1].tiles[2].cursor);
            assert!(board.solution.is_none());
        }
    }
}
