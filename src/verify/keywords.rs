// Keyword extraction — turns a claim into a compact search query.
//
// The claim is lowercased, tokenized, and stripped of stopwords, question
// words, and anything that isn't purely alphabetic. What's left is rejoined
// in its original order and sent to the evidence provider as-is.
//
// Both resources (the tokenizer pattern and the stopword list) are chosen
// once, when the extractor is built. If either is unavailable the extractor
// degrades to a naive whitespace split or an empty stopword set instead of
// failing at call time.

use std::collections::HashSet;
use std::path::PathBuf;

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};
use tracing::{debug, warn};

/// Interrogative and auxiliary words removed on top of the stopword list.
pub const QUESTION_WORDS: [&str; 20] = [
    "is", "are", "was", "were", "did", "do", "does", "has", "have", "had", "can", "could",
    "should", "would", "what", "when", "where", "who", "why", "how",
];

// Runs of non-punctuation characters (hyphenated runs stay whole, so
// "well-known" is one token), contraction suffixes ("'s", "'t"), or a single
// ASCII punctuation mark.
const WORD_PATTERN: &str = r"[^\s!-/:-@\[-`{-~]+(?:-[^\s!-/:-@\[-`{-~]+)*|'[^\s!-/:-@\[-`{-~]+|[!-/:-@\[-`{-~]";

/// How a claim is split into tokens.
#[derive(Debug, Clone)]
pub enum Tokenizer {
    /// Splits punctuation off words, so "Paris?" yields "paris" and "?".
    Word(Regex),
    /// Plain whitespace split. Used when the word pattern can't be built.
    Whitespace,
}

impl Tokenizer {
    /// Build the word tokenizer, falling back to whitespace splitting.
    pub fn word() -> Self {
        match Regex::new(WORD_PATTERN) {
            Ok(re) => Tokenizer::Word(re),
            Err(e) => {
                warn!(error = %e, "Word tokenizer unavailable, using whitespace split");
                Tokenizer::Whitespace
            }
        }
    }

    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            Tokenizer::Word(re) => re.find_iter(text).map(|m| m.as_str()).collect(),
            Tokenizer::Whitespace => text.split_whitespace().collect(),
        }
    }
}

/// Where the stopword list comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum StopwordSource {
    /// NLTK's English list, bundled with the `stop-words` crate
    Bundled,
    /// Newline-separated word list on disk
    File(PathBuf),
    /// No stopwords at all
    None,
}

impl StopwordSource {
    /// Load the stopword set. An unreadable file yields an empty set.
    pub fn load(&self) -> HashSet<String> {
        match self {
            StopwordSource::Bundled => get(LANGUAGE::English).into_iter().collect(),
            StopwordSource::File(path) => match std::fs::read_to_string(path) {
                Ok(contents) => contents
                    .lines()
                    .map(|line| line.trim().to_lowercase())
                    .filter(|line| !line.is_empty())
                    .collect(),
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "Stopword list unavailable, extracting without stopwords"
                    );
                    HashSet::new()
                }
            },
            StopwordSource::None => HashSet::new(),
        }
    }
}

/// Builds search queries from claims.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    tokenizer: Tokenizer,
    stop_words: HashSet<String>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(&StopwordSource::Bundled)
    }
}

impl KeywordExtractor {
    /// Word tokenizer plus the stopwords from `source`.
    pub fn new(source: &StopwordSource) -> Self {
        Self {
            tokenizer: Tokenizer::word(),
            stop_words: source.load(),
        }
    }

    /// The resource-free tier: whitespace split, no stopword list.
    /// Question words and non-alphabetic tokens are still removed.
    pub fn fallback() -> Self {
        Self {
            tokenizer: Tokenizer::Whitespace,
            stop_words: HashSet::new(),
        }
    }

    /// Extract the search query for a claim.
    ///
    /// Returns an empty string when nothing survives filtering — callers
    /// treat that as "no usable keywords", not as an error.
    pub fn extract(&self, claim: &str) -> String {
        let lower = claim.to_lowercase();

        let keywords: Vec<&str> = self
            .tokenizer
            .tokenize(&lower)
            .into_iter()
            .filter(|token| is_alphabetic(token))
            .filter(|token| !self.stop_words.contains(*token))
            .filter(|token| !QUESTION_WORDS.contains(token))
            .collect();

        let query = keywords.join(" ");
        debug!(claim = claim, query = %query, "Extracted query keywords");
        query
    }
}

fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}
