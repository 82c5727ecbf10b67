//! Build script that embeds the word lists
//!
//! Each list becomes a `&[&str]` const plus a `_COUNT` const in `OUT_DIR`.
//! Entries are trimmed and lowercased; blank lines are skipped and anything
//! that is not plain ASCII letters fails the build.

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

const LISTS: [(&str, &str, &str, &str); 2] = [
    (
        "data/answers.txt",
        "answers.rs",
        "ANSWERS",
        "Common five-letter words drawn as solutions",
    ),
    (
        "data/allowed.txt",
        "allowed.rs",
        "ALLOWED",
        "Five-letter words accepted as guesses when no dictionary is available",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    for (input, output, const_name, doc) in LISTS {
        let source = render_list(input, const_name, doc);
        let path = Path::new(&out_dir).join(output);
        fs::write(&path, source)
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()));
        println!("cargo:rerun-if-changed={input}");
    }
}

fn render_list(input: &str, const_name: &str, doc: &str) -> String {
    let content =
        fs::read_to_string(input).unwrap_or_else(|e| panic!("Failed to read {input}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            assert!(
                line.bytes().all(|b| b.is_ascii_alphabetic()),
                "{input}: {line:?} is not a plain word"
            );
            line.to_ascii_lowercase()
        })
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "/// {doc}");
    let _ = writeln!(out, "pub const {const_name}: &[&str] = &[");
    for word in &words {
        let _ = writeln!(out, "    \"{word}\",");
    }
    let _ = writeln!(out, "];");
    let _ = writeln!(out);
    let _ = writeln!(out, "/// Number of words in {const_name}");
    let _ = writeln!(out, "pub const {const_name}_COUNT: usize = {};", words.len());
    out
}
