//! Round play: submissions, resolution, scoring and sessions
//!
//! `resolve` is the pure entry point; `Session` wraps it with players,
//! cumulative scores and the write-once submission rule.

mod resolver;
pub mod scoring;
mod session;
mod submission;

pub use resolver::{PlayerResult, resolve};
pub use scoring::{points_for_length, word_points};
pub use session::{PlayerState, Session, SessionError, SubmitOutcome};
pub use submission::{
    PlayerId, SubmissionStatus, Submissions, WordSet, normalize_words, split_words,
};
