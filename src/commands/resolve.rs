//! Round resolution command
//!
//! Resolves a round given a board and `player=word,word,...` submissions.

use crate::core::Grid;
use crate::dictionary::Dictionary;
use crate::round::{
    PlayerId, PlayerResult, Submissions, normalize_words, resolve, split_words,
};

/// Result of resolving a round from the command line
pub struct RoundReport {
    pub grid: Grid,
    pub results: Vec<PlayerResult>,
}

/// Parse one `player=word,word` submission
///
/// A player with nothing after `=` submitted an empty set.
///
/// # Errors
///
/// Returns an error if the `=` is missing or the player name is blank.
pub fn parse_submission(entry: &str) -> Result<(PlayerId, Vec<String>), String> {
    let (player, words) = entry
        .split_once('=')
        .ok_or_else(|| format!("Submission '{entry}' must look like player=word,word"))?;

    let player = player.trim();
    if player.is_empty() {
        return Err(format!("Submission '{entry}' has no player name"));
    }

    Ok((PlayerId::from(player), split_words(words)))
}

/// Resolve a round from board text and submission entries
///
/// Repeated entries for the same player keep the first one, matching the
/// write-once rule of a live round.
///
/// # Errors
///
/// Returns an error if the board is invalid or a submission cannot be parsed.
pub fn resolve_round(
    board: &str,
    entries: &[String],
    dictionary: &Dictionary,
) -> Result<RoundReport, String> {
    let grid = Grid::parse(board).map_err(|e| format!("Invalid board: {e}"))?;

    let mut submissions = Submissions::new();
    for entry in entries {
        let (player, words) = parse_submission(entry)?;
        submissions
            .entry(player)
            .or_insert_with(|| normalize_words(words));
    }

    let results = resolve(&grid, dictionary, &submissions);
    Ok(RoundReport { grid, results })
}
