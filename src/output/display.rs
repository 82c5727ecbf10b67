//! Display functions for the text front end and command results

use super::formatters::{colored_tile, create_progress_bar, format_row, row_to_emoji, row_width};
use crate::commands::BenchmarkResult;
use crate::game::{GameStatus, Snapshot};
use colored::Colorize;
use std::fmt::Write;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];
const BOARD_GAP: &str = "   ";

/// Render the whole session as terminal text: status, boards, keyboard
#[must_use]
pub fn render_snapshot(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let width = row_width(snapshot.word_length);

    let _ = writeln!(
        out,
        "{}  Score: {}  Hint cost: {}  Attempts: {}/{}",
        format!("Level {}", snapshot.level).bright_cyan().bold(),
        snapshot.score.to_string().bright_yellow(),
        snapshot.hint_cost,
        snapshot.attempts_used,
        snapshot.max_challenges
    );

    // Board headers, padded to the row width
    let headers: Vec<String> = snapshot
        .boards
        .iter()
        .enumerate()
        .map(|(i, board)| {
            let label = match (&board.solution, board.solved) {
                (Some(word), true) => format!("{} ✓ {word}", i + 1),
                (Some(word), false) => format!("{} ✗ {word}", i + 1),
                (None, _) => format!("{}", i + 1),
            };
            format!("{label:<width$}")
        })
        .collect();
    let _ = writeln!(out, "\n{}", headers.join(BOARD_GAP));

    for row in 0..snapshot.max_challenges {
        let line: Vec<String> = snapshot
            .boards
            .iter()
            .map(|board| format_row(&board.rows[row]))
            .collect();
        let _ = writeln!(out, "{}", line.join(BOARD_GAP));
    }

    out.push('\n');
    for (indent, keys) in KEYBOARD_ROWS.iter().enumerate() {
        let line: String = keys
            .chars()
            .map(|key| colored_tile(Some(key), snapshot.key_status(key)).to_string())
            .collect();
        let _ = writeln!(out, "{}{line}", " ".repeat(indent * 2));
    }

    match snapshot.status {
        GameStatus::Playing => {}
        GameStatus::Won => {
            let _ = writeln!(
                out,
                "\n{}",
                "🎉 Level complete! Type 'next' to continue.".green().bold()
            );
            out.push_str(&share_grid(snapshot));
        }
        GameStatus::Lost => {
            let _ = writeln!(
                out,
                "\n{}",
                "Out of attempts. Type 'restart' or 'reset'.".red().bold()
            );
            out.push_str(&share_grid(snapshot));
        }
    }

    out
}

/// Emoji summary of the finished level, one line per attempt
///
/// Boards already solved by that attempt leave a blank gap.
fn share_grid(snapshot: &Snapshot) -> String {
    let mut out = String::from("\n");
    for row in 0..snapshot.attempts_used {
        let line: Vec<String> = snapshot
            .boards
            .iter()
            .map(|board| {
                let emoji = row_to_emoji(&board.rows[row]);
                if emoji.is_empty() {
                    "  ".repeat(snapshot.word_length)
                } else {
                    emoji
                }
            })
            .collect();
        let _ = writeln!(out, "{}", line.join(" ").trim_end());
    }
    out
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ",
        format!("BENCHMARK RESULTS - LEVEL {}", result.level)
            .bright_cyan()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Average score:    {:.1}", result.average_score);
    println!("   Average attempts: {:.2}", result.average_attempts);
    println!("   Total score:      {}", result.total_score);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Attempts on won games:".bright_cyan().bold());
    for (&attempts, &count) in &result.distribution {
        let pct = (count as f64 / result.wins.max(1) as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempts:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
