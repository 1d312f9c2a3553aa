//! Board path search
//!
//! Exhaustive depth-first search with prefix pruning. Every tile is tried as a
//! starting point; a branch survives only while the letters collected so far
//! are a prefix of the target word.

use crate::core::{Grid, GridError, Path, Position};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{trace, warn};

/// One pending branch of the search
struct Frame {
    /// Bytes of the target already spelled before `at`
    matched: usize,
    /// Positions visited before `at`, in order
    trail: Vec<Position>,
    at: Position,
}

/// Find a path on `grid` that spells `word` exactly
///
/// Returns `Ok(None)` when no path exists; that is an ordinary outcome. Tiles
/// holding several letters (e.g. "QU") are consumed as one unit. The word is
/// expected in uppercase, like the tiles.
///
/// # Errors
/// Returns `GridError::EmptyWord` if `word` is empty.
///
/// # Examples
/// ```
/// use boggle_engine::core::Grid;
/// use boggle_engine::solver::find_path;
///
/// let grid = Grid::parse("C A T S D O G E QU I T E R A I N").unwrap();
///
/// let path = find_path(&grid, "QUIT").unwrap().unwrap();
/// assert_eq!(path.spelled(&grid), "QUIT");
/// assert_eq!(path.len(), 3);
///
/// assert!(find_path(&grid, "ZEBRA").unwrap().is_none());
/// ```
pub fn find_path(grid: &Grid, word: &str) -> Result<Option<Path>, GridError> {
    if word.is_empty() {
        return Err(GridError::EmptyWord);
    }

    // Reversed so that position 0 is popped first
    let mut stack: Vec<Frame> = (0..grid.len())
        .rev()
        .map(|at| Frame {
            matched: 0,
            trail: Vec::new(),
            at,
        })
        .collect();

    while let Some(Frame {
        matched,
        mut trail,
        at,
    }) = stack.pop()
    {
        let tile = grid.tile(at);
        if !word[matched..].starts_with(tile) {
            continue;
        }

        let matched = matched + tile.len();
        trail.push(at);

        if matched == word.len() {
            trace!(word, path = ?trail, "path found");
            return Ok(Some(Path::new(trail)));
        }

        for next in grid.neighbors(at) {
            if !trail.contains(&next) {
                stack.push(Frame {
                    matched,
                    trail: trail.clone(),
                    at: next,
                });
            }
        }
    }

    trace!(word, "no path");
    Ok(None)
}

/// Check whether `word` can be traced on `grid`
///
/// Empty words are never on the board.
#[must_use]
pub fn is_on_board(grid: &Grid, word: &str) -> bool {
    matches!(find_path(grid, word), Ok(Some(_)))
}

/// Trace a batch of words in parallel
///
/// Each distinct word is searched once. Words that cannot be searched (empty)
/// map to `None` like words with no path.
pub fn trace_words<'a, I>(grid: &Grid, words: I) -> FxHashMap<&'a str, Option<Path>>
where
    I: IntoIterator<Item = &'a str>,
{
    let distinct: Vec<&'a str> = words
        .into_iter()
        .collect::<FxHashSet<_>>()
        .into_iter()
        .collect();

    distinct
        .par_iter()
        .map(|&word| {
            let path = find_path(grid, word).unwrap_or_else(|err| {
                warn!(word, %err, "skipping unsearchable word");
                None
            });
            (word, path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DiceSet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;

    fn sample_grid() -> Grid {
        // C  A  T  S
        // D  O  G  E
        // QU I  T  E
        // R  A  I  N
        Grid::parse("c a t s d o g e qu i t e r a i n").unwrap()
    }

    /// Random self-avoiding walk of up to `steps` tiles
    fn random_walk(grid: &Grid, rng: &mut StdRng, steps: usize) -> Vec<Position> {
        let positions: Vec<Position> = (0..grid.len()).collect();
        let mut trail = vec![*positions.choose(rng).unwrap()];

        while trail.len() < steps {
            let at = *trail.last().unwrap();
            let open: Vec<Position> = grid.neighbors(at).filter(|n| !trail.contains(n)).collect();
            match open.choose(rng) {
                Some(&next) => trail.push(next),
                None => break,
            }
        }

        trail
    }

    #[test]
    fn finds_straight_word() {
        let grid = sample_grid();
        let path = find_path(&grid, "CATS").unwrap().unwrap();
        assert_eq!(path.positions(), &[0, 1, 2, 3]);
    }

    #[test]
    fn finds_diagonal_word() {
        let grid = sample_grid();
        let path = find_path(&grid, "COTN").unwrap().unwrap();
        assert_eq!(path.positions(), &[0, 5, 10, 15]);
    }

    #[test]
    fn finds_word_requiring_backtracking() {
        let grid = sample_grid();
        // Both T tiles follow E at 7; only the one at 10 continues to E then N
        let path = find_path(&grid, "GETEN").unwrap().unwrap();
        assert_eq!(path.positions(), &[6, 7, 10, 11, 15]);

        let path = find_path(&grid, "DOGE").unwrap().unwrap();
        assert_eq!(path.spelled(&grid), "DOGE");
        assert!(path.is_valid_on(&grid));
    }

    #[test]
    fn multi_letter_tile_is_one_unit() {
        let grid = sample_grid();
        let path = find_path(&grid, "QUIT").unwrap().unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.positions()[0], 8);

        // A lone Q cannot be spelled from the QU tile
        assert!(find_path(&grid, "QI").unwrap().is_none());
        // A word ending in Q overruns the QU tile and is pruned
        assert!(find_path(&grid, "DQ").unwrap().is_none());
    }

    #[test]
    fn tiles_are_not_reused() {
        let grid = Grid::parse("a b c d").unwrap();
        assert!(find_path(&grid, "ABA").unwrap().is_none());
        assert!(find_path(&grid, "ABCD").unwrap().is_some());
        assert!(find_path(&grid, "ABCDA").unwrap().is_none());
    }

    #[test]
    fn missing_letter_is_not_found() {
        let grid = sample_grid();
        assert!(find_path(&grid, "ZZZZZ").unwrap().is_none());
        assert!(find_path(&grid, "CATX").unwrap().is_none());
    }

    #[test]
    fn prefix_only_is_not_a_match() {
        let grid = sample_grid();
        // "CA" is on the board but the search must spell the whole word
        assert!(find_path(&grid, "CAB").unwrap().is_none());
    }

    #[test]
    fn single_tile_word() {
        let grid = sample_grid();
        let path = find_path(&grid, "QU").unwrap().unwrap();
        assert_eq!(path.positions(), &[8]);
    }

    #[test]
    fn empty_word_is_invalid_input() {
        let grid = sample_grid();
        assert_eq!(find_path(&grid, ""), Err(GridError::EmptyWord));
        assert!(!is_on_board(&grid, ""));
    }

    #[test]
    fn traced_words_are_always_found() {
        let dice = DiceSet::standard();
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..200 {
            let grid = dice.roll(&mut rng);
            let walk = random_walk(&grid, &mut rng, 8);
            let word: String = walk.iter().map(|&pos| grid.tile(pos)).collect();

            let path = find_path(&grid, &word)
                .unwrap()
                .unwrap_or_else(|| panic!("{word} was traced on\n{grid}"));

            assert_eq!(path.spelled(&grid), word);
            assert!(path.is_valid_on(&grid));
        }
    }

    #[test]
    fn path_length_counts_tiles_not_letters() {
        let grid = Grid::parse("qu qu qu qu").unwrap();
        let path = find_path(&grid, "QUQUQU").unwrap().unwrap();
        assert_eq!(path.len(), 3);
        assert!(find_path(&grid, "QUQUQUQUQU").unwrap().is_none());
    }

    #[test]
    fn trace_words_searches_each_word() {
        let grid = sample_grid();
        let traced = trace_words(&grid, ["CATS", "ZEBRA", "CATS", ""]);

        assert_eq!(traced.len(), 3);
        assert!(traced["CATS"].is_some());
        assert!(traced["ZEBRA"].is_none());
        assert!(traced[""].is_none());
    }
}
