//! Multiboard Wordle - CLI
//!
//! Guess several hidden words at once on shared attempts, with TUI, text and
//! self-play benchmark modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{Level, info};
use wordle_multiboard::{
    commands::{BenchmarkOptions, run_benchmark, run_simple},
    core::Word,
    game::{GameConfig, RoundController},
    output::print_benchmark_result,
    wordlists::{
        ALLOWED, ANSWERS, DictionaryService, Vocabulary, WordPool,
        dictionary::DEFAULT_DICTIONARY_URL, loader::load_from_file,
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_multiboard",
    about = "Solve several hidden words at once on a shared attempt budget",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for solution selection and hints (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Level to start at
    #[arg(long, global = true, default_value = "0")]
    level: u32,

    /// Newline-delimited word list to draw solutions from
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Word length (other than 5 requires --wordlist)
    #[arg(long, global = true, default_value = "5")]
    length: usize,

    /// Remote dictionary merged into the validation vocabulary
    #[arg(long, global = true, default_value = DEFAULT_DICTIONARY_URL)]
    dictionary_url: String,

    /// Skip the remote dictionary and validate against the local lists only
    #[arg(long, global = true)]
    offline: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info")]
    log_level: Level,

    /// Write logs to this file (the TUI discards logs otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based text mode
    Simple,

    /// Self-play benchmark across many seeded games
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "200")]
        games: usize,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(&cli, matches!(command, Commands::Play))?;

    let pool = build_pool(&cli)?;
    info!(
        length = pool.word_length(),
        candidates = pool.candidates().len(),
        vocabulary = pool.vocabulary().len(),
        "word pool ready"
    );

    match command {
        Commands::Play => {
            use wordle_multiboard::interactive::{App, run_tui};

            spawn_dictionary(&cli, &pool);
            let game = new_controller(&cli, pool)?;
            run_tui(App::new(game))
        }
        Commands::Simple => {
            spawn_dictionary(&cli, &pool);
            let game = new_controller(&cli, pool)?;
            run_simple(game).context("text mode I/O failed")
        }
        Commands::Benchmark { games } => {
            // Self-play only guesses pool candidates; the remote list is not needed
            let options = BenchmarkOptions {
                games,
                level: cli.level,
                seed: cli.seed.unwrap_or(0),
                progress: true,
            };
            println!(
                "Running {games} self-play games at level {} ({} boards)...",
                cli.level,
                cli.level + 1
            );
            let result = run_benchmark(&pool, &GameConfig::default(), &options)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

/// TUI logs go to `--log-file` or nowhere; the other modes log to stderr
fn init_logging(cli: &Cli, tui: bool) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_max_level(cli.log_level);

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if tui {
        builder.with_writer(std::io::sink).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

/// Solution candidates and the validation vocabulary for the chosen length
///
/// - five letters, no list: embedded answers, embedded allowed list
/// - five letters, custom list: custom answers, embedded allowed list plus the custom words
/// - any other length: the custom list serves both roles
fn build_pool(cli: &Cli) -> Result<WordPool> {
    let length = cli.length;
    if length == 0 {
        bail!("word length must be at least 1");
    }

    let Some(path) = &cli.wordlist else {
        if length != 5 {
            bail!("the embedded word lists are five letters; pass --wordlist for length {length}");
        }
        return Ok(WordPool::new(5, ANSWERS, Vocabulary::from_words(5, ALLOWED)));
    };

    let words = load_from_file(path, length)
        .with_context(|| format!("cannot read word list {}", path.display()))?;
    let texts: Vec<&str> = words.iter().map(Word::text).collect();
    if texts.is_empty() {
        bail!("{} has no {length}-letter words", path.display());
    }

    let vocabulary = if length == 5 {
        Vocabulary::from_words(5, ALLOWED)
    } else {
        Vocabulary::new(length)
    };
    Ok(WordPool::new(length, &texts, vocabulary))
}

fn spawn_dictionary(cli: &Cli, pool: &WordPool) {
    if cli.offline {
        info!("offline: using local vocabulary only");
        return;
    }
    // Detached: the merge lands whenever the download finishes
    let _handle =
        DictionaryService::new(cli.dictionary_url.clone()).spawn(pool.vocabulary().clone());
}

fn new_controller(cli: &Cli, pool: WordPool) -> Result<RoundController> {
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let game = RoundController::resume(GameConfig::default(), pool, rng, cli.level, 0)?;
    Ok(game)
}
