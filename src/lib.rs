//! Boggle Engine
//!
//! Finds words on a square letter grid and resolves multiplayer rounds.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_engine::core::Grid;
//! use boggle_engine::dictionary::Dictionary;
//! use boggle_engine::round::{Submissions, resolve};
//! use boggle_engine::solver::find_path;
//!
//! let grid = Grid::parse("c a t s d o g e qu i t e r a i n").unwrap();
//!
//! // Trace a word
//! let path = find_path(&grid, "QUIT").unwrap().unwrap();
//! assert_eq!(path.len(), 3);
//!
//! // Resolve a round
//! let dictionary = Dictionary::from_words(["cats", "quit"]);
//! let mut submissions = Submissions::new();
//! submissions.insert("alice".into(), ["CATS".to_string()].into());
//! submissions.insert("bob".into(), ["QUIT".to_string()].into());
//!
//! let results = resolve(&grid, &dictionary, &submissions);
//! assert_eq!(results[0].score(), 1);
//! ```

// Core domain types
pub mod core;

// Path search
pub mod solver;

// Word lists
pub mod dictionary;

// Round resolution and sessions
pub mod round;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
