//! Round resolution
//!
//! Partitions every player's words into four disjoint categories and scores
//! the words that survive all checks.
//!
//! # Category precedence
//! Categories are claimed in a fixed order and a word lands in the first one
//! that applies:
//! 1. `others_got`: another player submitted the same word
//! 2. `not_on_board`: no path on the grid spells it
//! 3. `not_in_dictionary`: not a known word
//!
//! Whatever is left is `scored`. A shared word that is also misspelled is only
//! ever reported as shared.

use super::scoring::total_points;
use super::submission::{PlayerId, Submissions, WordSet};
use crate::core::Grid;
use crate::dictionary::Dictionary;
use crate::solver::trace_words;
use rustc_hash::FxHashMap;
use tracing::debug;

/// One player's outcome for a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    player: PlayerId,
    scored: WordSet,
    others_got: WordSet,
    not_on_board: WordSet,
    not_in_dictionary: WordSet,
    score: u32,
}

impl PlayerResult {
    fn new(
        player: PlayerId,
        scored: WordSet,
        others_got: WordSet,
        not_on_board: WordSet,
        not_in_dictionary: WordSet,
    ) -> Self {
        let score = total_points(&scored);
        Self {
            player,
            scored,
            others_got,
            not_on_board,
            not_in_dictionary,
            score,
        }
    }

    #[must_use]
    pub const fn player(&self) -> &PlayerId {
        &self.player
    }

    /// Unique, traceable, dictionary words
    #[must_use]
    pub const fn scored(&self) -> &WordSet {
        &self.scored
    }

    /// Words another player also submitted
    #[must_use]
    pub const fn others_got(&self) -> &WordSet {
        &self.others_got
    }

    /// Unique words with no path on the grid
    #[must_use]
    pub const fn not_on_board(&self) -> &WordSet {
        &self.not_on_board
    }

    /// Unique, traceable words missing from the dictionary
    #[must_use]
    pub const fn not_in_dictionary(&self) -> &WordSet {
        &self.not_in_dictionary
    }

    /// Points earned this round
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Every word the player submitted, across all categories
    pub fn all_words(&self) -> impl Iterator<Item = &String> {
        self.scored
            .iter()
            .chain(&self.others_got)
            .chain(&self.not_on_board)
            .chain(&self.not_in_dictionary)
    }
}

/// Resolve a round
///
/// Only players present in `submissions` take part; an empty word set is a
/// valid submission that scores zero. Results come back ordered by player.
///
/// # Examples
/// ```
/// use boggle_engine::core::Grid;
/// use boggle_engine::dictionary::Dictionary;
/// use boggle_engine::round::{Submissions, normalize_words, resolve};
///
/// let grid = Grid::parse("C A T S D O G E QU I T E R A I N").unwrap();
/// let dictionary = Dictionary::from_words(["cats", "dog", "quit"]);
///
/// let mut submissions = Submissions::new();
/// submissions.insert("alice".into(), normalize_words(["cats", "dog"]));
/// submissions.insert("bob".into(), normalize_words(["dog", "quit"]));
///
/// let results = resolve(&grid, &dictionary, &submissions);
/// assert_eq!(results[0].player().as_str(), "alice");
/// assert!(results[0].scored().contains("CATS"));
/// assert!(results[0].others_got().contains("DOG"));
/// assert_eq!(results[1].score(), 1);
/// ```
#[must_use]
pub fn resolve(
    grid: &Grid,
    dictionary: &Dictionary,
    submissions: &Submissions,
) -> Vec<PlayerResult> {
    // Submissions are sets, so a count of 1 means exactly one player has the word
    let mut submitters: FxHashMap<&str, usize> = FxHashMap::default();
    for words in submissions.values() {
        for word in words {
            *submitters.entry(word.as_str()).or_default() += 1;
        }
    }

    // Shared words never need a board check
    let unique_words = submitters
        .iter()
        .filter(|&(_, &count)| count == 1)
        .map(|(&word, _)| word);
    let paths = trace_words(grid, unique_words);

    let results: Vec<PlayerResult> = submissions
        .iter()
        .map(|(player, words)| {
            let mut scored = WordSet::new();
            let mut others_got = WordSet::new();
            let mut not_on_board = WordSet::new();
            let mut not_in_dictionary = WordSet::new();

            for word in words {
                let category = if submitters[word.as_str()] > 1 {
                    &mut others_got
                } else if paths.get(word.as_str()).is_none_or(Option::is_none) {
                    &mut not_on_board
                } else if !dictionary.contains(word) {
                    &mut not_in_dictionary
                } else {
                    &mut scored
                };
                category.insert(word.clone());
            }

            PlayerResult::new(
                player.clone(),
                scored,
                others_got,
                not_on_board,
                not_in_dictionary,
            )
        })
        .collect();

    debug!(
        players = results.len(),
        distinct_words = submitters.len(),
        scored_words = results.iter().map(|r| r.scored.len()).sum::<usize>(),
        "round resolved"
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::normalize_words;

    // C  A  T  S
    // D  O  G  E
    // QU I  T  E
    // R  A  I  N
    fn grid() -> Grid {
        Grid::parse("c a t s d o g e qu i t e r a i n").unwrap()
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["cat", "cats", "dog", "dogs", "quit", "quite", "rain", "tide"])
    }

    fn submissions(entries: &[(&str, &[&str])]) -> Submissions {
        entries
            .iter()
            .map(|&(player, words)| (PlayerId::from(player), normalize_words(words)))
            .collect()
    }

    fn result_for<'a>(results: &'a [PlayerResult], player: &str) -> &'a PlayerResult {
        results
            .iter()
            .find(|r| r.player().as_str() == player)
            .unwrap()
    }

    fn set(words: &[&str]) -> WordSet {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn shared_word_scores_for_nobody() {
        let subs = submissions(&[("alice", &["cat"]), ("bob", &["cat"])]);
        let results = resolve(&grid(), &dictionary(), &subs);

        for player in ["alice", "bob"] {
            let result = result_for(&results, player);
            assert_eq!(result.others_got(), &set(&["CAT"]));
            assert!(result.scored().is_empty());
            assert_eq!(result.score(), 0);
        }
    }

    #[test]
    fn word_missing_from_board() {
        let subs = submissions(&[("alice", &["zzzzz"])]);
        let results = resolve(&grid(), &dictionary(), &subs);

        let result = result_for(&results, "alice");
        assert_eq!(result.not_on_board(), &set(&["ZZZZZ"]));
        assert_eq!(result.score(), 0);
    }

    #[test]
    fn traceable_word_missing_from_dictionary() {
        // G-E-T-E-N is traceable but not a word
        let subs = submissions(&[("alice", &["geten"]), ("bob", &["dog"])]);
        let results = resolve(&grid(), &dictionary(), &subs);

        let result = result_for(&results, "alice");
        assert_eq!(result.not_in_dictionary(), &set(&["GETEN"]));
        assert!(result.not_on_board().is_empty());
        assert_eq!(result.score(), 0);
    }

    #[test]
    fn sole_submitter_of_long_word_scores() {
        // G-E-T-E-N-I-A runs 6, 7, 10, 11, 15, 14, 13
        let grid = grid();
        let mut dictionary = dictionary();
        dictionary.teach(["getenia"]);
        let subs = submissions(&[("alice", &["getenia", "cats"]), ("bob", &["dog"])]);

        let results = resolve(&grid, &dictionary, &subs);
        let result = result_for(&results, "alice");

        assert_eq!(result.scored(), &set(&["CATS", "GETENIA"]));
        assert_eq!(result.score(), 1 + 5);
    }

    #[test]
    fn shared_takes_precedence_over_board_and_dictionary() {
        let subs = submissions(&[("alice", &["zzzzz", "geten"]), ("bob", &["zzzzz", "geten"])]);
        let results = resolve(&grid(), &dictionary(), &subs);

        let result = result_for(&results, "alice");
        assert_eq!(result.others_got(), &set(&["GETEN", "ZZZZZ"]));
        assert!(result.not_on_board().is_empty());
        assert!(result.not_in_dictionary().is_empty());
    }

    #[test]
    fn board_takes_precedence_over_dictionary() {
        // Neither on the board nor a word
        let subs = submissions(&[("alice", &["xyzzy"])]);
        let results = resolve(&grid(), &dictionary(), &subs);

        let result = result_for(&results, "alice");
        assert_eq!(result.not_on_board(), &set(&["XYZZY"]));
        assert!(result.not_in_dictionary().is_empty());
    }

    #[test]
    fn categories_partition_submissions() {
        let subs = submissions(&[
            ("alice", &["cat", "cats", "dog", "zebra", "geten", "quit"]),
            ("bob", &["dog", "quite", "rain", "xx"]),
            ("carol", &["cat", "tide", "qi", "doge"]),
        ]);
        let results = resolve(&grid(), &dictionary(), &subs);
        assert_eq!(results.len(), 3);

        for result in &results {
            let submitted = &subs[result.player()];
            let all: Vec<&String> = result.all_words().collect();
            let distinct: WordSet = all.iter().map(|w| (*w).clone()).collect();

            assert_eq!(all.len(), submitted.len(), "a word was duplicated");
            assert_eq!(&distinct, submitted, "a word was lost");
        }
    }

    #[test]
    fn empty_submission_yields_empty_result() {
        let subs = submissions(&[("alice", &[]), ("bob", &["cats"])]);
        let results = resolve(&grid(), &dictionary(), &subs);

        let alice = result_for(&results, "alice");
        assert_eq!(alice.all_words().count(), 0);
        assert_eq!(alice.score(), 0);

        let bob = result_for(&results, "bob");
        assert_eq!(bob.score(), 1);
    }

    #[test]
    fn no_submissions_no_results() {
        let results = resolve(&grid(), &dictionary(), &Submissions::new());
        assert!(results.is_empty());
    }

    #[test]
    fn results_are_ordered_by_player() {
        let subs = submissions(&[("carol", &[]), ("alice", &[]), ("bob", &[])]);
        let results = resolve(&grid(), &dictionary(), &subs);
        let order: Vec<&str> = results.iter().map(|r| r.player().as_str()).collect();
        assert_eq!(order, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn empty_word_is_not_on_board() {
        let mut subs = submissions(&[("alice", &["cat"])]);
        subs.get_mut(&PlayerId::from("alice"))
            .unwrap()
            .insert(String::new());

        let results = resolve(&grid(), &dictionary(), &subs);
        let result = result_for(&results, "alice");
        assert!(result.not_on_board().contains(""));
        assert_eq!(result.score(), 1);
    }

    #[test]
    fn score_sums_scored_words_only() {
        let subs = submissions(&[
            ("alice", &["quite", "cats", "rain", "geten"]),
            ("bob", &["rain"]),
        ]);
        let results = resolve(&grid(), &dictionary(), &subs);

        let alice = result_for(&results, "alice");
        // QUITE (5 letters) = 2, CATS = 1; RAIN shared, GETEN not a word
        assert_eq!(alice.scored(), &set(&["CATS", "QUITE"]));
        assert_eq!(alice.score(), 3);
    }

    #[test]
    fn teaching_makes_word_scoreable_next_time() {
        let grid = grid();
        let mut dictionary = dictionary();
        let subs = submissions(&[("alice", &["geten"])]);

        let before = resolve(&grid, &dictionary, &subs);
        assert_eq!(before[0].not_in_dictionary(), &set(&["GETEN"]));

        dictionary.teach(["geten"]);
        let after = resolve(&grid, &dictionary, &subs);

        assert_eq!(after[0].scored(), &set(&["GETEN"]));
        assert_eq!(after[0].score(), 2);
        // Earlier results are untouched
        assert_eq!(before[0].score(), 0);
        assert!(before[0].scored().is_empty());
    }
}
