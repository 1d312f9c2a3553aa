//! Player identity and per-round submissions

use crate::dictionary::normalize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Opaque identifier of a player
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(String);

impl PlayerId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A player's words for one round, uppercase
pub type WordSet = BTreeSet<String>;

/// Words submitted this round, by player
pub type Submissions = BTreeMap<PlayerId, WordSet>;

/// Normalize raw words into a submission set
///
/// Words are trimmed and uppercased; blank entries are dropped and duplicates
/// collapse.
///
/// # Examples
/// ```
/// use boggle_engine::round::normalize_words;
///
/// let words = normalize_words(["cat", "CAT ", "", "dog"]);
/// assert_eq!(words.len(), 2);
/// assert!(words.contains("CAT"));
/// ```
pub fn normalize_words<I, S>(words: I) -> WordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| normalize(word.as_ref()))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Split free-form player input into candidate words
///
/// Tokens are separated by whitespace or commas. Punctuation around a token is
/// stripped, and tokens that still contain anything but letters are dropped.
///
/// # Examples
/// ```
/// use boggle_engine::round::split_words;
///
/// assert_eq!(split_words("cat, dog. quit! 42 don't"), vec!["cat", "dog", "quit"]);
/// ```
#[must_use]
pub fn split_words(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(|token| token.trim_matches(|c: char| c.is_ascii_punctuation()))
        .filter(|token| !token.is_empty() && token.chars().all(char::is_alphabetic))
        .map(str::to_string)
        .collect()
}

/// Whether a player has handed in words for the current round
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    NotSubmitted,
    Submitted(WordSet),
}

impl SubmissionStatus {
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }

    /// The submitted words, if any
    #[must_use]
    pub const fn words(&self) -> Option<&WordSet> {
        match self {
            Self::Submitted(words) => Some(words),
            Self::NotSubmitted => None,
        }
    }

    /// Record words unless some were already recorded
    ///
    /// Returns false, leaving the first submission intact, on a second call.
    pub fn record(&mut self, words: WordSet) -> bool {
        if self.is_submitted() {
            return false;
        }
        *self = Self::Submitted(words);
        true
    }
}
