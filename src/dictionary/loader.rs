//! Dictionary loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load a dictionary from a file with one word per line
///
/// Blank lines and lines starting with `#` are skipped. Words are uppercased.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use boggle_engine::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path.as_ref())?;
    let dictionary = parse_word_list(&content);

    debug!(
        path = %path.as_ref().display(),
        words = dictionary.len(),
        "loaded dictionary"
    );
    Ok(dictionary)
}

/// Parse word-list text with one word per line
#[must_use]
pub fn parse_word_list(content: &str) -> Dictionary {
    Dictionary::from_words(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('#')),
    )
}

/// Load the dictionary selected on the command line
///
/// `"embedded"` selects the built-in list; anything else is a file path.
///
/// # Errors
///
/// Returns an I/O error if a file path was given and cannot be read.
pub fn load_dictionary(source: &str) -> io::Result<Dictionary> {
    match source {
        "embedded" => Ok(Dictionary::embedded()),
        path => load_from_file(path),
    }
}
