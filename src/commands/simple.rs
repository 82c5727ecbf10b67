//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. A typed word is loaded into the guess
//! buffer from the first slot and submitted; `.` keeps whatever the slot
//! already holds, so revealed hint letters can be skipped over.

use crate::game::{Action, Outcome, RoundController};
use crate::output::render_snapshot;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Guess(String),
    Play(Action),
    Help,
    Quit,
}

/// Parse a trimmed input line
#[must_use]
pub fn parse_command(line: &str) -> Option<SimpleCommand> {
    let line = line.trim();
    let command = match line.to_ascii_lowercase().as_str() {
        "" => return None,
        "quit" | "q" | "exit" => SimpleCommand::Quit,
        "?" | "hint" => SimpleCommand::Play(Action::HintRequest),
        "next" | "n" => SimpleCommand::Play(Action::AdvanceLevel),
        "restart" => SimpleCommand::Play(Action::RestartLevel),
        "reset" => SimpleCommand::Play(Action::ResetToZero),
        "help" | "h" => SimpleCommand::Help,
        _ => SimpleCommand::Guess(line.to_string()),
    };
    Some(command)
}

/// Type `word` into the buffer from slot 0 and submit it
///
/// Returns `None` without touching the session if the length is wrong or the
/// word holds anything other than letters and `.`.
pub fn submit_word<R: Rng>(game: &mut RoundController<R>, word: &str) -> Option<Outcome> {
    if word.chars().count() != game.pool().word_length()
        || !word.chars().all(|c| c == '.' || c.is_ascii_alphabetic())
    {
        return None;
    }

    game.apply(Action::TileClick(0));
    for c in word.chars() {
        if c == '.' {
            game.apply(Action::ArrowRight);
        } else {
            game.apply(Action::Letter(c));
        }
    }
    Some(game.apply(Action::Enter))
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng>(game: RoundController<R>) -> io::Result<()> {
    let stdin = io::stdin();
    run_simple_with(game, stdin.lock(), io::stdout())
}

/// Run the text loop over any reader and writer
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: Rng, I: BufRead, O: Write>(
    mut game: RoundController<R>,
    input: I,
    mut out: O,
) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║              Multiboard Wordle - Text Mode                   ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    print_help(&mut out)?;
    write!(out, "{}", render_snapshot(&game.snapshot()))?;
    prompt(&mut out)?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            prompt(&mut out)?;
            continue;
        };

        let outcome = match command {
            SimpleCommand::Quit => break,
            SimpleCommand::Help => {
                print_help(&mut out)?;
                prompt(&mut out)?;
                continue;
            }
            SimpleCommand::Play(action) => game.apply(action),
            SimpleCommand::Guess(word) => {
                if let Some(outcome) = submit_word(&mut game, &word) {
                    outcome
                } else {
                    let length = game.pool().word_length();
                    writeln!(
                        out,
                        "{}",
                        format!("Enter exactly {length} letters (use . to keep a slot)").red()
                    )?;
                    prompt(&mut out)?;
                    continue;
                }
            }
        };

        report(&mut out, &outcome)?;
        write!(out, "{}", render_snapshot(&game.snapshot()))?;
        prompt(&mut out)?;
    }

    writeln!(out, "\n👋 Thanks for playing! Final score: {}\n", game.session().score)?;
    Ok(())
}

fn report<O: Write>(out: &mut O, outcome: &Outcome) -> io::Result<()> {
    let Some(message) = &outcome.message else {
        return Ok(());
    };
    if outcome.is_rejected() {
        writeln!(out, "\n❌ {}", message.red())
    } else {
        writeln!(out, "\n✨ {}", message.bright_green().bold())
    }
}

fn print_help<O: Write>(out: &mut O) -> io::Result<()> {
    writeln!(out, "Guess a word on every board at once. Commands:")?;
    writeln!(out, "  <word>    submit a guess ('.' keeps the current slot)")?;
    writeln!(out, "  ?         buy a hint for the first unsolved board")?;
    writeln!(out, "  next      go to the next level after a win")?;
    writeln!(out, "  restart   replay the level after it ends")?;
    writeln!(out, "  reset     back to level 0 with score 0")?;
    writeln!(out, "  quit      exit\n")
}

fn prompt<O: Write>(out: &mut O) -> io::Result<()> {
    write!(out, "\nGuess: ")?;
    out.flush()
}
