//! Remote dictionary augmentation
//!
//! Fetches a newline-delimited word list and unions the entries of the right
//! length into the validation vocabulary. Failure is never fatal: a warning is
//! logged and the fallback vocabulary stays authoritative. No retry.

use super::Vocabulary;
use super::loader::parse_word_list;
use crate::error::{GameError, GameResult};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Public-domain English word list, one word per line
pub const DEFAULT_DICTIONARY_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/master/words_alpha.txt";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct DictionaryService {
    url: String,
    timeout: Duration,
}

impl Default for DictionaryService {
    fn default() -> Self {
        Self::new(DEFAULT_DICTIONARY_URL)
    }
}

impl DictionaryService {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download the raw word list body
    ///
    /// # Errors
    /// Returns `GameError::DictionaryFetchFailed` on any network, status or
    /// decoding failure.
    pub fn fetch(&self) -> GameResult<String> {
        let failed = |e: reqwest::Error| GameError::DictionaryFetchFailed(e.to_string());

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(failed)?;

        client
            .get(&self.url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text)
            .map_err(failed)
    }

    /// Fetch, normalize and merge into `vocabulary`, returning how many words were new
    ///
    /// # Errors
    /// Returns `GameError::DictionaryFetchFailed` if the download fails. The
    /// vocabulary is not touched in that case.
    pub fn merge_into(&self, vocabulary: &Vocabulary) -> GameResult<usize> {
        let body = self.fetch()?;
        Ok(merge_body(&body, vocabulary))
    }

    /// Run [`merge_into`](Self::merge_into) on a background thread
    ///
    /// The thread logs its own failure and yields 0 in that case.
    pub fn spawn(self, vocabulary: Vocabulary) -> JoinHandle<usize> {
        thread::spawn(move || {
            debug!(url = %self.url, "fetching dictionary");
            match self.merge_into(&vocabulary) {
                Ok(added) => {
                    info!(added, total = vocabulary.len(), "dictionary merged");
                    added
                }
                Err(err) => {
                    warn!(url = %self.url, error = %err, "keeping fallback vocabulary");
                    0
                }
            }
        })
    }
}

/// Normalize a downloaded body and union it into `vocabulary`
pub fn merge_body(body: &str, vocabulary: &Vocabulary) -> usize {
    let words = parse_word_list(body, vocabulary.word_length());
    vocabulary.extend(words.iter().map(String::as_str))
}
