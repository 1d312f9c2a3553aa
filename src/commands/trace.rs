//! Word tracing command
//!
//! Traces a single word on a board and reports the path and its value.

use crate::core::{Grid, Path};
use crate::dictionary::{Dictionary, normalize};
use crate::round::word_points;
use crate::solver::find_path;

/// Result of tracing a word
pub struct TraceResult {
    pub word: String,
    pub grid: Grid,
    pub path: Option<Path>,
    pub in_dictionary: bool,
    pub points: u32,
}

impl TraceResult {
    /// Whether the word would score if nobody else found it
    #[must_use]
    pub const fn would_score(&self) -> bool {
        self.path.is_some() && self.in_dictionary
    }
}

/// Trace `word` on the board described by `board`
///
/// # Errors
///
/// Returns an error if:
/// - The board text does not describe a square grid of letters
/// - The word is empty
pub fn trace_word(board: &str, word: &str, dictionary: &Dictionary) -> Result<TraceResult, String> {
    let grid = Grid::parse(board).map_err(|e| format!("Invalid board: {e}"))?;
    let word = normalize(word);
    let path = find_path(&grid, &word).map_err(|e| format!("Invalid word: {e}"))?;

    let in_dictionary = dictionary.contains(&word);
    let points = if path.is_some() && in_dictionary {
        word_points(&word)
    } else {
        0
    };

    Ok(TraceResult {
        word,
        grid,
        path,
        in_dictionary,
        points,
    })
}
