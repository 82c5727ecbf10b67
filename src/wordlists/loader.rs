//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Every entry goes through [`normalize_entry`], the same normalization the
//! remote dictionary uses.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Normalize a raw word-list entry
///
/// Trims, strips diacritics, uppercases, and keeps the result only if it is
/// made of exactly `length` letters A-Z.
///
/// # Examples
/// ```
/// use wordle_multiboard::wordlists::loader::normalize_entry;
///
/// assert_eq!(normalize_entry("  crâne ", 5).as_deref(), Some("CRANE"));
/// assert_eq!(normalize_entry("ice-t", 5), None);
/// ```
#[must_use]
pub fn normalize_entry(raw: &str, length: usize) -> Option<String> {
    let stripped: String = raw
        .trim()
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .collect::<String>()
        .to_uppercase();

    (stripped.len() == length && stripped.bytes().all(|b| b.is_ascii_uppercase()))
        .then_some(stripped)
}

/// Normalize every line of a newline-delimited word list
#[must_use]
pub fn parse_word_list(content: &str, length: usize) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| normalize_entry(line, length))
        .collect()
}

/// Load words of the given length from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_multiboard::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    Ok(parse_word_list(&content, length)
        .into_iter()
        .filter_map(|entry| Word::new(entry).ok())
        .collect())
}

/// Convert embedded string slice to Word vector, keeping only `length`-letter words
///
/// # Examples
/// ```
/// use wordle_multiboard::wordlists::loader::words_from_slice;
/// use wordle_multiboard::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS, 5);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_length(s, length).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input, 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "sl te", "slate"];
        let words = words_from_slice(input, 5);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn normalize_strips_diacritics() {
        assert_eq!(normalize_entry("Éclat", 5).as_deref(), Some("ECLAT"));
        assert_eq!(normalize_entry("naïve", 5).as_deref(), Some("NAIVE"));
        assert_eq!(normalize_entry("piñata", 6).as_deref(), Some("PINATA"));
    }

    #[test]
    fn normalize_rejects_separators_and_wrong_length() {
        assert_eq!(normalize_entry("o'er!", 5), None);
        assert_eq!(normalize_entry("two words", 5), None);
        assert_eq!(normalize_entry("cranes", 5), None);
        assert_eq!(normalize_entry("", 5), None);
    }

    #[test]
    fn parse_word_list_filters_lines() {
        let body = "crane\nSLATE\n\nab\nfaçon\n12345\n";
        assert_eq!(parse_word_list(body, 5), vec!["CRANE", "SLATE", "FACON"]);
    }

    #[test]
    fn load_from_embedded_answers() {
        use crate::wordlists::ANSWERS;

        let words = words_from_slice(ANSWERS, 5);
        assert_eq!(words.len(), ANSWERS.len());
    }
}
