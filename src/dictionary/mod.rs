//! Dictionary of valid words
//!
//! An uppercase word set that only ever grows. The core uses it for membership
//! lookups; new words can be taught at runtime but none are removed.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use rustc_hash::FxHashSet;
use tracing::debug;

/// Normalize a submitted or taught word to the dictionary's form
///
/// Trims surrounding whitespace and uppercases.
///
/// # Examples
/// ```
/// use boggle_engine::dictionary::normalize;
///
/// assert_eq!(normalize("  quit\n"), "QUIT");
/// ```
#[must_use]
pub fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}

/// Set of valid uppercase words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from words in any case
    ///
    /// Blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use boggle_engine::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["cat", "Dog", " "]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("CAT"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        dictionary.teach(words);
        dictionary
    }

    /// The embedded default dictionary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS)
    }

    /// Check whether `word` is valid
    ///
    /// Lookups are exact: callers pass uppercase words.
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Merge new words into the dictionary
    ///
    /// Returns how many words were actually new. Existing words are untouched.
    pub fn teach<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.words.len();
        self.words.extend(
            words
                .into_iter()
                .map(|word| normalize(word.as_ref()))
                .filter(|word| !word.is_empty()),
        );
        let added = self.words.len() - before;

        if added > 0 {
            debug!(added, total = self.words.len(), "dictionary taught new words");
        }
        added
    }

    /// Every word, sorted
    #[must_use]
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
