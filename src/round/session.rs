//! Game session
//!
//! A session owns everything that lives across rounds: the players with their
//! cumulative scores, the dice, the dictionary, and the current grid. Callers
//! drive it round by round; nothing here is global.

use super::resolver::{PlayerResult, resolve};
use super::submission::{PlayerId, SubmissionStatus, Submissions, normalize_words};
use crate::core::{DiceSet, Grid};
use crate::dictionary::Dictionary;
use rand::Rng;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};

/// Error type for session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    NoBoard,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBoard => write!(f, "No board has been rolled yet"),
        }
    }
}

impl std::error::Error for SessionError {}

/// What happened to a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The player has not joined; nothing was recorded
    NotPlaying,
    /// No round is in progress
    NoBoard,
    /// Words were already recorded this round and were kept
    AlreadySubmitted,
    /// Recorded; still waiting on this many players
    Pending { waiting_on: usize },
    /// Recorded, and every player is now in
    RoundComplete(Vec<PlayerResult>),
}

/// Per-player state across rounds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub status: SubmissionStatus,
    pub score: u32,
    /// This round's points are already in `score`
    pub banked: bool,
}

/// A game across many rounds
#[derive(Debug, Clone)]
pub struct Session {
    dice: DiceSet,
    dictionary: Dictionary,
    grid: Option<Grid>,
    players: BTreeMap<PlayerId, PlayerState>,
    round: u32,
}

impl Session {
    /// Create a session with the standard dice and no players
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dice: DiceSet::standard(),
            dictionary,
            grid: None,
            players: BTreeMap::new(),
            round: 0,
        }
    }

    /// Use a different dice set for future rolls
    #[must_use]
    pub fn with_dice(mut self, dice: DiceSet) -> Self {
        self.dice = dice;
        self
    }

    /// Add a player
    ///
    /// Returns false if they were already playing. A player joining mid-round
    /// must submit before the round can complete.
    pub fn join(&mut self, player: impl Into<PlayerId>) -> bool {
        let player = player.into();
        if self.players.contains_key(&player) {
            return false;
        }
        debug!(%player, "player joined");
        self.players.insert(player, PlayerState::default());
        true
    }

    /// Remove a player and their score
    pub fn kick(&mut self, player: &PlayerId) -> bool {
        let removed = self.players.remove(player).is_some();
        if removed {
            debug!(%player, "player removed");
        }
        removed
    }

    #[must_use]
    pub fn is_playing(&self, player: &PlayerId) -> bool {
        self.players.contains_key(player)
    }

    /// Players in id order
    pub fn players(&self) -> impl Iterator<Item = (&PlayerId, &PlayerState)> {
        self.players.iter()
    }

    /// Submission status of a player
    #[must_use]
    pub fn status(&self, player: &PlayerId) -> Option<&SubmissionStatus> {
        self.players.get(player).map(|state| &state.status)
    }

    /// Players who have not submitted this round
    pub fn waiting_on(&self) -> impl Iterator<Item = &PlayerId> {
        self.players
            .iter()
            .filter(|(_, state)| !state.status.is_submitted())
            .map(|(player, _)| player)
    }

    /// Whether every player has submitted this round
    #[must_use]
    pub fn all_submitted(&self) -> bool {
        self.players.values().all(|state| state.status.is_submitted())
    }

    /// Start a round on a caller-supplied grid
    ///
    /// The previous round is confirmed first if it was complete. Every player
    /// goes back to `NotSubmitted`.
    pub fn start_round(&mut self, grid: Grid) -> &Grid {
        self.confirm();

        self.round += 1;
        for state in self.players.values_mut() {
            state.status = SubmissionStatus::NotSubmitted;
            state.banked = false;
        }

        info!(round = self.round, players = self.players.len(), "round started");
        self.grid.insert(grid)
    }

    /// Start a round on a freshly rolled grid
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Grid {
        let grid = self.dice.roll(rng);
        self.start_round(grid)
    }

    /// Record a player's words for this round
    ///
    /// Words are normalized to uppercase. The first submission of a round
    /// sticks; later ones are ignored.
    pub fn submit<I, S>(&mut self, player: &PlayerId, words: I) -> SubmitOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.grid.is_none() {
            return SubmitOutcome::NoBoard;
        }
        let Some(state) = self.players.get_mut(player) else {
            return SubmitOutcome::NotPlaying;
        };

        let words = normalize_words(words);
        let count = words.len();
        if !state.status.record(words) {
            debug!(%player, "duplicate submission ignored");
            return SubmitOutcome::AlreadySubmitted;
        }
        debug!(%player, words = count, "words submitted");

        let waiting_on = self.waiting_on().count();
        if waiting_on > 0 {
            return SubmitOutcome::Pending { waiting_on };
        }

        match self.finalize() {
            Ok(results) => SubmitOutcome::RoundComplete(results),
            Err(SessionError::NoBoard) => SubmitOutcome::NoBoard,
        }
    }

    /// Words recorded so far this round
    #[must_use]
    pub fn submissions(&self) -> Submissions {
        self.players
            .iter()
            .filter_map(|(player, state)| {
                state
                    .status
                    .words()
                    .map(|words| (player.clone(), words.clone()))
            })
            .collect()
    }

    /// Resolve the round now over whoever has submitted
    ///
    /// # Errors
    /// Returns `SessionError::NoBoard` if no round has started.
    pub fn finalize(&self) -> Result<Vec<PlayerResult>, SessionError> {
        let grid = self.grid.as_ref().ok_or(SessionError::NoBoard)?;
        Ok(resolve(grid, &self.dictionary, &self.submissions()))
    }

    /// Add this round's points into cumulative scores
    ///
    /// Only happens once every player has submitted, and each player is banked
    /// at most once per round. A player who joins and submits after the round
    /// was confirmed is banked by the next confirm. Returns whether any score
    /// was banked.
    pub fn confirm(&mut self) -> bool {
        if self.grid.is_none() || !self.all_submitted() {
            return false;
        }

        let Ok(results) = self.finalize() else {
            return false;
        };

        let mut banked = 0;
        for result in &results {
            let Some(state) = self.players.get_mut(result.player()) else {
                continue;
            };
            if !state.banked {
                state.score += result.score();
                state.banked = true;
                banked += 1;
            }
        }

        if banked == 0 {
            return false;
        }
        debug!(round = self.round, players = banked, "round confirmed");
        true
    }

    /// Cumulative scores by player
    #[must_use]
    pub fn scores(&self) -> BTreeMap<PlayerId, u32> {
        self.players
            .iter()
            .map(|(player, state)| (player.clone(), state.score))
            .collect()
    }

    /// Number of rounds started so far
    #[must_use]
    pub const fn round_number(&self) -> u32 {
        self.round
    }

    /// The current grid, if a round has started
    #[must_use]
    pub const fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Teach the session's dictionary new words
    ///
    /// Affects resolutions from now on; results already produced are unchanged.
    pub fn teach<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dictionary.teach(words)
    }
}
