//! Benchmark command
//!
//! Self-play: a bot plays many seeded games at one level and the results are
//! aggregated. The bot always works on the first unsolved board and guesses a
//! candidate consistent with every feedback row that board has shown so far.

use crate::core::{Feedback, Word};
use crate::error::GameResult;
use crate::game::{Action, GameConfig, GameStatus, Round, RoundController};
use crate::wordlists::WordPool;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Mixed into the game seed so the bot's choices are independent of the
/// solution draw
const BOT_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkOptions {
    pub games: usize,
    pub level: u32,
    /// Game `i` is seeded with `seed + i`, wrapping at `u64::MAX`
    pub seed: u64,
    pub progress: bool,
}

impl Default for BenchmarkOptions {
    fn default() -> Self {
        Self {
            games: 100,
            level: 0,
            seed: 0,
            progress: true,
        }
    }
}

/// Result of one self-played game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub seed: u64,
    pub won: bool,
    pub score: i64,
    pub attempts: usize,
    pub boards_solved: usize,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub level: u32,
    pub total_games: usize,
    pub wins: usize,
    pub total_score: i64,
    pub average_score: f64,
    pub average_attempts: f64,
    /// Attempts used, for won games only
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.wins as f64 / self.total_games as f64
    }
}

/// Play `options.games` seeded games in parallel
///
/// # Errors
/// Returns `GameError::PoolExhausted` if the pool cannot fill the level.
pub fn run_benchmark(
    pool: &WordPool,
    config: &GameConfig,
    options: &BenchmarkOptions,
) -> GameResult<BenchmarkResult> {
    let start = Instant::now();

    let pb = if options.progress {
        ProgressBar::new(options.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("level {}", options.level));

    let records = (0..options.games)
        .into_par_iter()
        .map(|i| {
            let seed = options.seed.wrapping_add(i as u64);
            let record = play_game(pool, config, options.level, seed);
            pb.inc(1);
            record
        })
        .collect::<GameResult<Vec<_>>>()?;

    pb.finish_with_message("Complete!");

    Ok(summarize(options.level, &records, start.elapsed()))
}

/// Self-play one game with the consistency bot
///
/// # Errors
/// Returns `GameError::PoolExhausted` if the pool cannot fill the level.
pub fn play_game(
    pool: &WordPool,
    config: &GameConfig,
    level: u32,
    seed: u64,
) -> GameResult<GameRecord> {
    let mut game = RoundController::resume(
        config.clone(),
        pool.clone(),
        StdRng::seed_from_u64(seed),
        level,
        0,
    )?;
    let mut bot_rng = StdRng::seed_from_u64(seed ^ BOT_SEED_SALT);

    while game.status() == GameStatus::Playing {
        let Some(guess) = choose_guess(game.round(), pool.candidates(), &mut bot_rng) else {
            break;
        };
        for letter in guess.text().chars() {
            game.apply(Action::Letter(letter));
        }
        let outcome = game.apply(Action::Enter);
        if outcome.is_rejected() {
            debug!(%guess, error = ?outcome.error, "bot guess rejected");
            break;
        }
    }

    let round = game.round();
    Ok(GameRecord {
        seed,
        won: game.status() == GameStatus::Won,
        score: game.session().score,
        attempts: round.guesses().len(),
        boards_solved: round.solved().iter().filter(|&&s| s).count(),
    })
}

/// Pick a random candidate consistent with the first unsolved board
fn choose_guess<'a, R: Rng>(
    round: &Round,
    candidates: &'a [Word],
    rng: &mut R,
) -> Option<&'a Word> {
    let board = round.first_unsolved()?;
    let rows = round.board_feedback(board);

    let consistent: Vec<&Word> = candidates
        .iter()
        .filter(|candidate| {
            rows.iter()
                .all(|(guess, feedback)| Feedback::calculate(guess, candidate) == *feedback)
        })
        .collect();

    if consistent.is_empty() {
        None
    } else {
        Some(consistent[rng.random_range(0..consistent.len())])
    }
}

fn summarize(level: u32, records: &[GameRecord], duration: Duration) -> BenchmarkResult {
    let total_games = records.len();
    let wins = records.iter().filter(|r| r.won).count();
    let total_score: i64 = records.iter().map(|r| r.score).sum();
    let total_attempts: usize = records.iter().map(|r| r.attempts).sum();

    let mut distribution = BTreeMap::new();
    for record in records.iter().filter(|r| r.won) {
        *distribution.entry(record.attempts).or_insert(0) += 1;
    }

    let per_game = |total: f64| {
        if total_games == 0 {
            0.0
        } else {
            total / total_games as f64
        }
    };

    BenchmarkResult {
        level,
        total_games,
        wins,
        total_score,
        average_score: per_game(total_score as f64),
        average_attempts: per_game(total_attempts as f64),
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::wordlists::{Vocabulary, embedded_pool};

    fn quiet(games: usize, level: u32) -> BenchmarkOptions {
        BenchmarkOptions {
            games,
            level,
            seed: 7,
            progress: false,
        }
    }

    #[test]
    fn benchmark_runs() {
        let result =
            run_benchmark(&embedded_pool(), &GameConfig::default(), &quiet(10, 0)).unwrap();

        assert_eq!(result.total_games, 10);
        assert!(result.wins <= 10);
        assert!(result.average_attempts >= 1.0);
        assert!(result.average_attempts <= 6.0);
        assert!((0.0..=1.0).contains(&result.win_rate()));
    }

    #[test]
    fn benchmark_distribution_sums_to_wins() {
        let result =
            run_benchmark(&embedded_pool(), &GameConfig::default(), &quiet(12, 1)).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.wins);
        for &attempts in result.distribution.keys() {
            assert!((2..=7).contains(&attempts));
        }
    }

    #[test]
    fn game_is_deterministic_per_seed() {
        let pool = embedded_pool();
        let config = GameConfig::default();
        let a = play_game(&pool, &config, 1, 99).unwrap();
        let b = play_game(&pool, &config, 1, 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn seeds_wrap_past_max() {
        let pool = WordPool::new(5, &["crane", "slate"], Vocabulary::new(5));
        let options = BenchmarkOptions {
            seed: u64::MAX,
            ..quiet(2, 0)
        };

        let result = run_benchmark(&pool, &GameConfig::default(), &options).unwrap();

        assert_eq!(result.total_games, 2);
        let first = play_game(&pool, &GameConfig::default(), 0, u64::MAX).unwrap();
        let second = play_game(&pool, &GameConfig::default(), 0, 0).unwrap();
        assert_eq!(result.total_score, first.score + second.score);
    }

    #[test]
    fn tiny_pool_is_always_solved() {
        // Two candidates: the bot needs at most two guesses per board
        let pool = WordPool::new(5, &["crane", "slate"], Vocabulary::new(5));
        let record = play_game(&pool, &GameConfig::default(), 0, 3).unwrap();

        assert!(record.won);
        assert!(record.attempts <= 2);
        assert!(record.score == 100 || record.score == 85);
    }

    #[test]
    fn exhausted_pool_is_an_error() {
        let pool = WordPool::new(5, &["crane"], Vocabulary::new(5));
        let result = run_benchmark(&pool, &GameConfig::default(), &quiet(3, 2));
        assert!(matches!(result, Err(GameError::PoolExhausted { .. })));
    }

    #[test]
    fn empty_benchmark() {
        let result =
            run_benchmark(&embedded_pool(), &GameConfig::default(), &quiet(0, 0)).unwrap();
        assert_eq!(result.total_games, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
        assert!(result.distribution.is_empty());
    }
}
